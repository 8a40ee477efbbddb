//! # Journey Subcommand
//!
//! Prints the post-delivery journey for one item in a demo shipment, the
//! way the journey sheet renders it: `[x]` complete, `[>]` current,
//! `[ ]` future.

use anyhow::Context;
use clap::Args;

use postship_core::{ItemId, ShipmentId};
use postship_engine::{derive_journey, StepState};
use postship_model::demo;

/// Arguments for the journey subcommand.
#[derive(Args, Debug)]
pub struct JourneyArgs {
    /// Shipment code, e.g. SHP003.
    #[arg(long)]
    pub shipment: String,

    /// Item code, e.g. TSCDESK01.
    #[arg(long)]
    pub item: String,
}

/// Print an item's post-delivery journey steps.
pub fn run(args: JourneyArgs) -> anyhow::Result<()> {
    let shipment = demo::shipment_by_id(&ShipmentId::new(&args.shipment))
        .with_context(|| format!("unknown shipment: {}", args.shipment))?;
    let item = shipment
        .item(&ItemId::new(&args.item))
        .with_context(|| format!("unknown item in {}: {}", args.shipment, args.item))?;

    println!("{} ({})", item.name, item.variant);
    if let Some(badge) = item.action.status.badge_label() {
        println!("Action: {badge}");
    }
    if let Some(badge) = item.installation.status.badge_label() {
        println!("Installation: {badge}");
    }

    let steps = derive_journey(item);
    for step in &steps {
        let marker = match step.state {
            StepState::Complete => "[x]",
            StepState::Current => "[>]",
            StepState::Future => "[ ]",
        };
        println!("  {marker} {}", step.label);
        if let Some(description) = &step.description {
            println!("        {description}");
        }
    }

    if steps.len() == 1 {
        println!("No post-delivery actions initiated yet");
    }
    Ok(())
}
