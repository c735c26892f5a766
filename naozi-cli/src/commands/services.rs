//! Services command - list the print service catalogue

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let response = ctx.api.get_services();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.success {
        anyhow::bail!("{}", response.message_or("Could not fetch services"));
    }

    let services = response.services.unwrap_or_default();
    if services.is_empty() {
        output::warning("No services available");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Service", "Description", "Price"]);
    for service in &services {
        table.add_row(vec![
            service.name.clone(),
            service.description.clone().unwrap_or_default(),
            service
                .price
                .as_ref()
                .map(output::format_price)
                .unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
