//! # Shipment Record
//!
//! A physical package of items tracked and delivered as a unit, with its
//! carrier tracking milestones and shipping address. The address's city
//! drives exchange eligibility for every item in the package.

use serde::{Deserialize, Serialize};

use postship_core::{City, ItemId, OrderId, ShipmentId};

use crate::item::Item;

// ─── Shipment Status ─────────────────────────────────────────────────

/// Delivery status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Being picked and packed at the warehouse.
    Processing,
    /// With the carrier, moving between hubs.
    InTransit,
    /// With the delivery executive.
    OutForDelivery,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl ShipmentStatus {
    /// Badge label for display.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Processing => "processing",
            Self::InTransit => "in_transit",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

// ─── Order Status (milestone axis) ───────────────────────────────────

/// Progress axis used by the carrier tracking milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed and confirmed.
    Confirmed,
    /// Items packed, awaiting dispatch.
    Packed,
    /// Package handed to the carrier.
    Shipped,
    /// With the delivery executive.
    OutForDelivery,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled.
    Cancelled,
}

/// One milestone in a shipment's carrier tracking timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingMilestone {
    /// Which progress point this milestone marks.
    pub status: OrderStatus,
    /// Display label, e.g. "Out for Delivery".
    pub label: String,
    /// Display timestamp, when the milestone was reached.
    pub timestamp: Option<String>,
    /// Optional detail line, e.g. "In transit - Gurgaon Hub".
    pub description: Option<String>,
    /// Whether the milestone has been reached.
    pub is_complete: bool,
    /// Whether this is the latest reached milestone.
    pub is_current: bool,
}

// ─── Address ─────────────────────────────────────────────────────────

/// A shipping or billing address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Recipient name.
    pub name: String,
    /// Address line 1.
    pub line1: String,
    /// Address line 2, when present.
    pub line2: Option<String>,
    /// City as free text, resolved against the metro table for eligibility.
    pub city: City,
    /// State.
    pub state: String,
    /// Postal PIN code.
    pub pincode: String,
    /// Contact phone; billing addresses may omit it.
    pub phone: Option<String>,
}

// ─── Shipment ────────────────────────────────────────────────────────

/// A physical package grouping items delivered and tracked together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    /// Shipment identifier (upstream shipment code).
    pub id: ShipmentId,
    /// The order this package belongs to.
    pub order_id: OrderId,
    /// Items in the package, in pick order.
    pub items: Vec<Item>,
    /// Delivery status.
    pub status: ShipmentStatus,
    /// Customer-facing expected delivery window.
    pub expected_delivery: String,
    /// Display date of delivery, once delivered.
    pub delivered_date: Option<String>,
    /// Carrier tracking number, once shipped.
    pub tracking_number: Option<String>,
    /// Carrier name, once shipped.
    pub carrier: Option<String>,
    /// Shipping address; the city drives exchange eligibility.
    pub shipping_address: Address,
    /// Ordered carrier tracking milestones.
    pub milestones: Vec<TrackingMilestone>,
}

impl Shipment {
    /// Whether the package has been delivered. Item-level post-delivery
    /// actions are only permitted once this is true.
    pub fn is_delivered(&self) -> bool {
        self.status == ShipmentStatus::Delivered
    }

    /// Look up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up an item by id, mutably.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_matches_record_strings() {
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
        let back: ShipmentStatus = serde_json::from_str("\"in_transit\"").unwrap();
        assert_eq!(back, ShipmentStatus::InTransit);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(ShipmentStatus::InTransit.badge_label(), "In Transit");
        assert_eq!(ShipmentStatus::Delivered.badge_label(), "Delivered");
    }

    #[test]
    fn test_unknown_status_fails_deserialization() {
        let result: Result<ShipmentStatus, _> = serde_json::from_str("\"misplaced\"");
        assert!(result.is_err());
    }
}
