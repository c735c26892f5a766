//! Ping command - check backend reachability

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let response = ctx.api.test_connection();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.success {
        output::success(response.message_or("Backend is reachable"));
        Ok(())
    } else {
        anyhow::bail!("{}", response.message_or("Backend is not reachable"));
    }
}
