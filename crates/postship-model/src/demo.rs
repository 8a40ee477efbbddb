//! # Demo Dataset
//!
//! The read-only sample records used by the CLI and integration tests,
//! mirroring the upstream order system's fixture data: four orders, each
//! with one shipment, covering the out-for-delivery, in-transit, delivered,
//! and cancelled paths. The delivered shipment carries an installable item
//! mid-installation so the post-delivery journey has something to show.

use postship_core::{City, ItemId, OrderId, ProductCategory, ShipmentId};
use postship_state::{InstallationStatus, InstallationTrack};

use crate::item::Item;
use crate::order::{InstallationBooking, Order, PaymentSummary};
use crate::shipment::{Address, OrderStatus, Shipment, ShipmentStatus, TrackingMilestone};

fn noida_address() -> Address {
    Address {
        name: "Rahul Sharma".to_string(),
        line1: "B-42, Sector 15".to_string(),
        line2: Some("Near City Mall".to_string()),
        city: City::new("Noida"),
        state: "Uttar Pradesh".to_string(),
        pincode: "201301".to_string(),
        phone: Some("+91 98278 74262".to_string()),
    }
}

fn milestone(
    status: OrderStatus,
    label: &str,
    timestamp: Option<&str>,
    description: Option<&str>,
    is_complete: bool,
    is_current: bool,
) -> TrackingMilestone {
    TrackingMilestone {
        status,
        label: label.to_string(),
        timestamp: timestamp.map(str::to_string),
        description: description.map(str::to_string),
        is_complete,
        is_current,
    }
}

fn out_for_delivery_shipment() -> Shipment {
    Shipment {
        id: ShipmentId::new("SHP001"),
        order_id: OrderId::new("20551926"),
        status: ShipmentStatus::OutForDelivery,
        expected_delivery: "Today, by 6:00 PM".to_string(),
        delivered_date: None,
        tracking_number: Some("DTDC1234567890".to_string()),
        carrier: Some("DTDC".to_string()),
        items: vec![
            Item::new(
                ItemId::new("TSCSMS002"),
                "SmartGRID Luxe Mattress",
                "King Size / 8 inch",
                34999,
                1,
                ProductCategory::Mattress,
            )
            .with_sku("TSC-SMS-002"),
            Item::new(
                ItemId::new("TSCPILLOW01"),
                "SmartGRID Pillow",
                "Standard",
                2499,
                2,
                ProductCategory::Pillow,
            ),
        ],
        shipping_address: noida_address(),
        milestones: vec![
            milestone(
                OrderStatus::Confirmed,
                "Order Confirmed",
                Some("Dec 5, 2024 at 10:30 AM"),
                Some("Your order has been placed successfully"),
                true,
                false,
            ),
            milestone(
                OrderStatus::Packed,
                "Packed",
                Some("Dec 6, 2024 at 2:15 PM"),
                Some("Your items are packed and ready for dispatch"),
                true,
                false,
            ),
            milestone(
                OrderStatus::Shipped,
                "Shipped",
                Some("Dec 6, 2024 at 6:45 PM"),
                Some("Package picked up by DTDC courier"),
                true,
                false,
            ),
            milestone(
                OrderStatus::OutForDelivery,
                "Out for Delivery",
                Some("Dec 8, 2024 at 9:00 AM"),
                Some("Your package is with the delivery executive"),
                false,
                true,
            ),
            milestone(OrderStatus::Delivered, "Delivered", None, None, false, false),
        ],
    }
}

fn in_transit_shipment() -> Shipment {
    Shipment {
        id: ShipmentId::new("SHP002"),
        order_id: OrderId::new("20553743"),
        status: ShipmentStatus::InTransit,
        expected_delivery: "Dec 10 - Dec 12".to_string(),
        delivered_date: None,
        tracking_number: Some("BLUEDART9876543".to_string()),
        carrier: Some("Blue Dart".to_string()),
        items: vec![Item::new(
            ItemId::new("TSCBED01"),
            "SmartGRID Ortho Bed Frame",
            "King Size / Walnut",
            45999,
            1,
            ProductCategory::BedFrame,
        )],
        shipping_address: noida_address(),
        milestones: vec![
            milestone(
                OrderStatus::Confirmed,
                "Order Confirmed",
                Some("Dec 4, 2024 at 3:20 PM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Packed,
                "Packed",
                Some("Dec 5, 2024 at 11:00 AM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Shipped,
                "Shipped",
                Some("Dec 6, 2024 at 8:30 AM"),
                Some("In transit - Gurgaon Hub"),
                false,
                true,
            ),
            milestone(OrderStatus::OutForDelivery, "Out for Delivery", None, None, false, false),
            milestone(OrderStatus::Delivered, "Delivered", None, None, false, false),
        ],
    }
}

fn delivered_shipment() -> Shipment {
    Shipment {
        id: ShipmentId::new("SHP003"),
        order_id: OrderId::new("20546974"),
        status: ShipmentStatus::Delivered,
        expected_delivery: "Nov 25, 2024".to_string(),
        delivered_date: Some("Nov 24, 2024".to_string()),
        tracking_number: Some("DELHIVERY111222".to_string()),
        carrier: Some("Delhivery".to_string()),
        items: vec![Item::new(
            ItemId::new("TSCDESK01"),
            "SmartGRID Adjustable Desk",
            "Standard / Oak",
            28999,
            1,
            ProductCategory::Desk,
        )
        .with_installation(InstallationTrack::at_status(
            InstallationStatus::TechnicianAssigned,
        ))],
        shipping_address: noida_address(),
        milestones: vec![
            milestone(
                OrderStatus::Confirmed,
                "Order Confirmed",
                Some("Nov 20, 2024 at 10:00 AM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Packed,
                "Packed",
                Some("Nov 21, 2024 at 4:00 PM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Shipped,
                "Shipped",
                Some("Nov 22, 2024 at 9:00 AM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::OutForDelivery,
                "Out for Delivery",
                Some("Nov 24, 2024 at 8:00 AM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Delivered,
                "Delivered",
                Some("Nov 24, 2024 at 2:30 PM"),
                Some("Delivered - Signed by Rahul"),
                true,
                true,
            ),
        ],
    }
}

fn cancelled_shipment() -> Shipment {
    Shipment {
        id: ShipmentId::new("SHP004"),
        order_id: OrderId::new("20543687"),
        status: ShipmentStatus::Cancelled,
        expected_delivery: "Cancelled".to_string(),
        delivered_date: None,
        tracking_number: None,
        carrier: None,
        items: vec![Item::new(
            ItemId::new("TSCCHAIR01"),
            "SmartGRID Ergo Chair",
            "Premium / Black",
            18999,
            1,
            ProductCategory::Chair,
        )],
        shipping_address: noida_address(),
        milestones: vec![
            milestone(
                OrderStatus::Confirmed,
                "Order Confirmed",
                Some("Nov 8, 2024 at 5:00 PM"),
                None,
                true,
                false,
            ),
            milestone(
                OrderStatus::Cancelled,
                "Cancelled",
                Some("Nov 10, 2024 at 11:00 AM"),
                Some("Order cancelled by customer"),
                true,
                true,
            ),
        ],
    }
}

fn billing_address() -> Address {
    Address {
        phone: None,
        ..noida_address()
    }
}

/// The demo shipments, in display order.
pub fn shipments() -> Vec<Shipment> {
    vec![
        out_for_delivery_shipment(),
        in_transit_shipment(),
        delivered_shipment(),
        cancelled_shipment(),
    ]
}

/// The demo orders, in display order (most recent first).
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("20551926"),
            order_number: "#20551926".to_string(),
            order_date: "Dec 5, 2024".to_string(),
            shipments: vec![out_for_delivery_shipment()],
            billing_address: billing_address(),
            payment: PaymentSummary {
                method: "Credit Card (HDFC ****4523)".to_string(),
                status: "Paid".to_string(),
                total: 39997,
                subtotal: 37497,
                shipping: 0,
                discount: Some(2500),
            },
            installation: Some(InstallationBooking {
                scheduled: true,
                date: Some("Dec 9, 2024".to_string()),
                time_slot: Some("10:00 AM - 2:00 PM".to_string()),
            }),
        },
        Order {
            id: OrderId::new("20553743"),
            order_number: "#20553743".to_string(),
            order_date: "Dec 4, 2024".to_string(),
            shipments: vec![in_transit_shipment()],
            billing_address: billing_address(),
            payment: PaymentSummary {
                method: "UPI (PhonePe)".to_string(),
                status: "Paid".to_string(),
                total: 45999,
                subtotal: 45999,
                shipping: 0,
                discount: None,
            },
            installation: Some(InstallationBooking {
                scheduled: true,
                date: Some("Dec 13, 2024".to_string()),
                time_slot: Some("2:00 PM - 6:00 PM".to_string()),
            }),
        },
        Order {
            id: OrderId::new("20546974"),
            order_number: "#20546974".to_string(),
            order_date: "Nov 20, 2024".to_string(),
            shipments: vec![delivered_shipment()],
            billing_address: billing_address(),
            payment: PaymentSummary {
                method: "Net Banking".to_string(),
                status: "Paid".to_string(),
                total: 28999,
                subtotal: 28999,
                shipping: 0,
                discount: None,
            },
            installation: None,
        },
        Order {
            id: OrderId::new("20543687"),
            order_number: "#20543687".to_string(),
            order_date: "Nov 8, 2024".to_string(),
            shipments: vec![cancelled_shipment()],
            billing_address: billing_address(),
            payment: PaymentSummary {
                method: "Credit Card".to_string(),
                status: "Refunded".to_string(),
                total: 18999,
                subtotal: 18999,
                shipping: 0,
                discount: None,
            },
            installation: None,
        },
    ]
}

/// Look up a demo shipment by id.
pub fn shipment_by_id(id: &ShipmentId) -> Option<Shipment> {
    shipments().into_iter().find(|s| &s.id == id)
}

/// Look up a demo order by id.
pub fn order_by_id(id: &OrderId) -> Option<Order> {
    orders().into_iter().find(|o| &o.id == id)
}

/// Look up the shipment belonging to a demo order.
pub fn shipment_for_order(order_id: &OrderId) -> Option<Shipment> {
    shipments().into_iter().find(|s| &s.order_id == order_id)
}
