//! Register command - create an account and log in

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;

use naozi_core::domain::is_valid_email;
use naozi_core::Registration;

use super::get_context;

pub fn run(name: &str, email: &str, phone: Option<String>, password: Option<String>) -> Result<()> {
    if !is_valid_email(email) {
        anyhow::bail!("Invalid email format: {}", email);
    }

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let ctx = get_context()?;
    let response = ctx.api.register(&Registration {
        name: name.to_string(),
        email: email.to_string(),
        phone,
        password,
    });

    if !response.success {
        anyhow::bail!("{}", response.message_or("Registration failed"));
    }

    let display_name = response
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or(name);
    println!("{} Welcome, {}! You are now logged in.", "Success!".green(), display_name);
    Ok(())
}
