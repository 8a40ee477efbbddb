//! # postship-core: Foundational Types for the Post-Delivery Engine
//!
//! This crate is the bedrock of the postship workspace. It defines the
//! primitives every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `OrderId`, `ShipmentId`,
//!    `ItemId`, `City`. No bare strings in APIs. Identifiers here are
//!    human-facing codes (`SHP003`, `20546974`), not UUIDs.
//!
//! 2. **Closed enums for every status and rule axis.** `ProductCategory` and
//!    `ReturnReason` are single definitions with exhaustive `match`
//!    everywhere. Adding a category or reason forces every consumer to
//!    handle it at compile time; there are no string-keyed lookup maps.
//!
//! 3. **One error type, three kinds.** Every rejection the engine can
//!    produce is an `InvalidTransition`, a `MissingRequiredInput`, or an
//!    `IneligibleAction`. Nothing is silently corrected.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `postship-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod category;
pub mod city;
pub mod error;
pub mod ids;
pub mod reason;

// Re-export primary types for ergonomic imports.
pub use category::ProductCategory;
pub use city::{metro_region_for, City, MetroRegion, METRO_REGIONS};
pub use error::PostshipError;
pub use ids::{ItemId, OrderId, ShipmentId};
pub use reason::ReturnReason;
