//! Order command - place a print order

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use naozi_core::{DesignFile, Error, OrderForm};

use super::get_context;
use crate::output;

pub struct OrderArgs {
    pub service: String,
    pub quantity: u32,
    pub file: PathBuf,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: String,
    pub address: String,
    pub notes: String,
    pub paper: String,
    pub size: String,
    pub json: bool,
}

pub fn run(args: OrderArgs) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.api.current_user();

    // Contact details fall back to the logged-in user, then to a prompt
    let name = match args.name.or_else(|| user.as_ref().map(|u| u.name.clone())) {
        Some(n) if !n.trim().is_empty() => n,
        _ => Input::new().with_prompt("Your name").interact_text()?,
    };
    let email = match args.email.or_else(|| user.as_ref().map(|u| u.email.clone())) {
        Some(e) if !e.trim().is_empty() => e,
        _ => Input::new().with_prompt("Email").interact_text()?,
    };
    let phone = match args.phone {
        Some(p) => p,
        None => Input::new().with_prompt("Phone number").interact_text()?,
    };

    let file = DesignFile::from_path(&args.file)?;
    if !args.json {
        let size = file.size()?;
        output::info(&format!(
            "Design file: {} ({})",
            file.file_name,
            output::format_size(size)
        ));
    }

    let form = OrderForm {
        service_type: args.service,
        quantity: args.quantity,
        name,
        email,
        phone,
        company: args.company,
        address: args.address,
        notes: args.notes,
        paper_type: args.paper,
        size: args.size,
        file: Some(file),
    };

    let spinner = if args.json {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message("Sending order...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    };

    let result = ctx.order_service.submit(&form);
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(Error::Validation(message)) => anyhow::bail!("{}", message),
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.success {
        anyhow::bail!("{}", response.message_or("Order submission failed"));
    }

    match &response.order_id {
        Some(id) => println!("{} Order submitted! ID: {}", "Success!".green(), id),
        None => output::success("Order submitted!"),
    }
    Ok(())
}
