//! Login command

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;

use naozi_core::Credentials;

use super::get_context;

pub fn run(email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let ctx = get_context()?;
    let response = ctx.api.login(&Credentials {
        email: email.to_string(),
        password,
    });

    if !response.success {
        anyhow::bail!("{}", response.message_or("Login failed"));
    }

    let name = response
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or(email);
    println!("{} Logged in as {}", "Success!".green(), name);
    Ok(())
}
