//! # Order Record
//!
//! A purchase transaction. Multi-package orders ship their items as
//! separate shipments but settle under one payment.

use serde::{Deserialize, Serialize};

use postship_core::{OrderId, ShipmentId};

use crate::shipment::{Address, Shipment};

/// Payment summary for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Payment method description, e.g. "UPI (PhonePe)".
    pub method: String,
    /// Payment status, e.g. "Paid", "Refunded".
    pub status: String,
    /// Grand total in whole rupees.
    pub total: u32,
    /// Item subtotal in whole rupees.
    pub subtotal: u32,
    /// Shipping charge in whole rupees.
    pub shipping: u32,
    /// Discount applied, when any.
    pub discount: Option<u32>,
}

/// Installation booking made at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationBooking {
    /// Whether an installation slot was booked.
    pub scheduled: bool,
    /// Display date of the slot.
    pub date: Option<String>,
    /// Time window of the slot, e.g. "10:00 AM - 2:00 PM".
    pub time_slot: Option<String>,
}

/// A purchase transaction owning one or more shipments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier (upstream order code).
    pub id: OrderId,
    /// Customer-facing order number, e.g. "#20546974".
    pub order_number: String,
    /// Display date the order was placed.
    pub order_date: String,
    /// Shipments the order ships as.
    pub shipments: Vec<Shipment>,
    /// Billing address.
    pub billing_address: Address,
    /// Payment summary.
    pub payment: PaymentSummary,
    /// Installation booking, when the order includes installable items.
    pub installation: Option<InstallationBooking>,
}

impl Order {
    /// Look up a shipment by id.
    pub fn shipment(&self, id: &ShipmentId) -> Option<&Shipment> {
        self.shipments.iter().find(|s| &s.id == id)
    }

    /// Total number of items across all shipments.
    pub fn item_count(&self) -> usize {
        self.shipments.iter().map(|s| s.items.len()).sum()
    }
}
