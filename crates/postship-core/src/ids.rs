//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the record identifiers in the postship workspace.
//! These prevent accidental identifier confusion: you cannot pass an
//! `ItemId` where a `ShipmentId` is expected.
//!
//! Identifiers are the human-facing codes carried by the upstream order
//! system (`"SHP003"`, `"20546974"`, `"TSCPILLOW01"`), so each newtype
//! wraps a `String` rather than a UUID.

use serde::{Deserialize, Serialize};

/// Unique identifier for a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

/// Unique identifier for a shipment (one physical package).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipmentId(pub String);

/// Unique identifier for a purchased item within a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl OrderId {
    /// Wrap an upstream order code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Access the inner code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ShipmentId {
    /// Wrap an upstream shipment code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Access the inner code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemId {
    /// Wrap an upstream item code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Access the inner code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order:{}", self.0)
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shipment:{}", self.0)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item:{}", self.0)
    }
}
