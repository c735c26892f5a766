//! Whoami command - show the current session

use anyhow::Result;
use serde_json::json;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = ctx.api.current_session();

    if json {
        let value = json!({
            "loggedIn": session.is_logged_in(),
            "user": session.user,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &session.user {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            output::info(&format!("User id: {}", user.id));
        }
        None => output::warning("Not logged in"),
    }
    Ok(())
}
