//! Init command - backend spreadsheet initialization

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let response = ctx.api.initialize_sheets();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.success {
        output::success(response.message_or("Backend initialized"));
        Ok(())
    } else {
        anyhow::bail!("{}", response.message_or("Initialization failed"));
    }
}
