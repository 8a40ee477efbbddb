//! # Track Subcommand
//!
//! Prints the carrier tracking timeline for one shipment, marker per
//! milestone: `[x]` reached, `[>]` latest, `[ ]` pending.

use anyhow::Context;
use clap::Args;

use postship_core::ShipmentId;
use postship_model::demo;

/// Arguments for the track subcommand.
#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Shipment code, e.g. SHP003.
    #[arg(long)]
    pub shipment: String,
}

/// Show a shipment's tracking timeline.
pub fn run(args: TrackArgs) -> anyhow::Result<()> {
    let shipment = demo::shipment_by_id(&ShipmentId::new(&args.shipment))
        .with_context(|| format!("unknown shipment: {}", args.shipment))?;

    println!(
        "{}  [{}]  carrier: {}",
        shipment.id.as_str(),
        shipment.status.badge_label(),
        shipment.carrier.as_deref().unwrap_or("-"),
    );
    if let Some(delivered) = &shipment.delivered_date {
        println!("Delivered on {delivered}");
    } else {
        println!("Expected delivery: {}", shipment.expected_delivery);
    }

    for milestone in &shipment.milestones {
        let marker = match (milestone.is_complete, milestone.is_current) {
            (_, true) => "[>]",
            (true, false) => "[x]",
            (false, false) => "[ ]",
        };
        let timestamp = milestone.timestamp.as_deref().unwrap_or("");
        println!("  {marker} {:<18} {timestamp}", milestone.label);
        if let Some(description) = &milestone.description {
            println!("        {description}");
        }
    }
    Ok(())
}
