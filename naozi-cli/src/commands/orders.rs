//! Orders command - list the logged-in user's order history

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let response = ctx.api.get_user_orders();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.success {
        anyhow::bail!("{}", response.message_or("Could not fetch orders"));
    }

    let orders = response.orders.unwrap_or_default();
    if orders.is_empty() {
        output::warning("No orders yet");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Order", "Service", "Qty", "Status", "Placed"]);
    for order in &orders {
        table.add_row(vec![
            order.order_id.clone(),
            order.service_type.clone().unwrap_or_default(),
            order.quantity.map(|q| q.to_string()).unwrap_or_default(),
            order.status.clone().unwrap_or_default(),
            order.created_at.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
