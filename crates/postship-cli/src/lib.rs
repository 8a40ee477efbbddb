//! # postship-cli: Post-Delivery Engine Command-Line Interface
//!
//! A small operator console over the demo dataset. Useful for eyeballing
//! the engine's outputs without a rendering layer.
//!
//! ## Subcommands
//!
//! - `orders`: List the demo orders with shipment status badges
//! - `track`: Carrier tracking timeline for a shipment
//! - `eligibility`: Resolver output for a category and city
//! - `journey`: Post-delivery journey steps for an item
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the engine crates; no business logic here.

pub mod eligibility;
pub mod journey;
pub mod orders;
pub mod track;
