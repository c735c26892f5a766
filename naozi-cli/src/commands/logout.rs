//! Logout command - clear the stored session

use anyhow::{Context, Result};

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    if !ctx.api.is_logged_in() {
        output::warning("Not logged in");
        return Ok(());
    }

    ctx.api.logout().context("Failed to clear stored session")?;
    output::success("Logged out");
    Ok(())
}
