//! # Eligibility Subcommand
//!
//! Runs the eligibility resolver for a product category and a free-text
//! city, printing the offered action set.

use clap::Args;

use postship_core::{metro_region_for, City, ProductCategory};
use postship_engine::EligibilityPolicy;

/// Arguments for the eligibility subcommand.
#[derive(Args, Debug)]
pub struct EligibilityArgs {
    /// Shipping city, free text (e.g. "Noida", "New Delhi 110001").
    #[arg(long)]
    pub city: String,

    /// Product category (snake_case, e.g. pillow, bed_frame).
    #[arg(long)]
    pub category: ProductCategory,
}

/// Resolve and print the offered action set.
pub fn run(args: EligibilityArgs) -> anyhow::Result<()> {
    let city = City::new(&args.city);
    let policy = EligibilityPolicy::default();

    match metro_region_for(&city) {
        Some(region) => println!("{}: metro ({})", city, region.name),
        None => println!("{city}: not a serviced metro"),
    }

    for kind in policy.available_actions(args.category, &city) {
        println!("  - {}", kind.label());
    }
    Ok(())
}
