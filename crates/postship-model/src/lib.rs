//! # postship-model: Order, Shipment, and Item Records
//!
//! The record shapes the engine consumes, mirroring the upstream order
//! system's data: an `Order` owns one or more `Shipment`s (multi-package
//! orders ship separately but settle under one payment), a `Shipment`
//! groups `Item`s delivered together, and each `Item` carries its own
//! action lifecycle and installation track.
//!
//! The engine treats shipment and order records as read-only; the only
//! mutable state is each item's two state machines, and those change only
//! through their validated transition methods.
//!
//! Statuses that the predecessor system stored as plain string unions are
//! closed serde enums here: an unknown status fails deserialization
//! instead of slipping through as an unstyled badge.

pub mod demo;
pub mod item;
pub mod order;
pub mod shipment;

// Re-export primary types for ergonomic imports.
pub use item::Item;
pub use order::{InstallationBooking, Order, PaymentSummary};
pub use shipment::{Address, OrderStatus, Shipment, ShipmentStatus, TrackingMilestone};
