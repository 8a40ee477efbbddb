//! # Orders Subcommand
//!
//! Lists the demo orders, one line per shipment, with the status badge
//! text the display layer would show.

use clap::Args;

use postship_model::demo;

/// Arguments for the orders subcommand.
#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// Only show the order with this code.
    #[arg(long)]
    pub order: Option<String>,
}

/// List the demo orders.
pub fn run(args: OrdersArgs) -> anyhow::Result<()> {
    let orders = demo::orders();
    let mut shown = 0usize;

    for order in &orders {
        if let Some(filter) = &args.order {
            if order.id.as_str() != filter {
                continue;
            }
        }
        shown += 1;

        println!(
            "{}  placed {}  {}  ₹{}",
            order.order_number, order.order_date, order.payment.status, order.payment.total
        );
        for shipment in &order.shipments {
            println!(
                "    {}  [{}]  {} item(s)  expected: {}",
                shipment.id.as_str(),
                shipment.status.badge_label(),
                shipment.items.len(),
                shipment.expected_delivery
            );
        }
    }

    if shown == 0 {
        anyhow::bail!("no matching order");
    }
    tracing::debug!(count = shown, "listed orders");
    Ok(())
}
