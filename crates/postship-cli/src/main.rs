//! # postship CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Post-delivery engine CLI for order tracking and action tooling.
///
/// Lists orders, shows tracking timelines, resolves action eligibility,
/// and prints post-delivery journeys against the demo dataset.
#[derive(Parser, Debug)]
#[command(name = "postship", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the demo orders with shipment status.
    Orders(postship_cli::orders::OrdersArgs),
    /// Show a shipment's carrier tracking timeline.
    Track(postship_cli::track::TrackArgs),
    /// Resolve the action set for a category and city.
    Eligibility(postship_cli::eligibility::EligibilityArgs),
    /// Print an item's post-delivery journey.
    Journey(postship_cli::journey::JourneyArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Orders(args) => postship_cli::orders::run(args),
        Commands::Track(args) => postship_cli::track::run(args),
        Commands::Eligibility(args) => postship_cli::eligibility::run(args),
        Commands::Journey(args) => postship_cli::journey::run(args),
    }
}
