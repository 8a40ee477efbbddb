//! # Item Record
//!
//! One purchased unit within a shipment, with its two independent
//! post-delivery state machines attached.

use serde::{Deserialize, Serialize};

use postship_core::{ItemId, ProductCategory};
use postship_state::{ActionLifecycle, InstallationTrack};

/// A purchased item within a shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier (upstream item code).
    pub id: ItemId,
    /// Stock keeping unit, when the catalog carries one.
    pub sku: Option<String>,
    /// Display name, e.g. "SmartGRID Luxe Mattress".
    pub name: String,
    /// Variant description, e.g. "King Size / 8 inch".
    pub variant: String,
    /// Optional configuration detail, e.g. "Headboard + Storage".
    pub configuration: Option<String>,
    /// Unit price in whole rupees.
    pub price: u32,
    /// Units purchased.
    pub quantity: u32,
    /// Product category, set at catalog time. Drives exchange exclusion.
    pub category: ProductCategory,
    /// Whether the item needs technician installation.
    pub installation_required: bool,
    /// Installation progress; meaningful only when `installation_required`.
    pub installation: InstallationTrack,
    /// Post-delivery action lifecycle (return/replacement/exchange).
    pub action: ActionLifecycle,
}

impl Item {
    /// A plain catalog item with no installation and no action history.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        variant: impl Into<String>,
        price: u32,
        quantity: u32,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            sku: None,
            name: name.into(),
            variant: variant.into(),
            configuration: None,
            price,
            quantity,
            category,
            installation_required: false,
            installation: InstallationTrack::new(),
            action: ActionLifecycle::new(),
        }
    }

    /// Attach a SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Attach a configuration detail.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Mark the item as requiring technician installation.
    pub fn with_installation(mut self, installation: InstallationTrack) -> Self {
        self.installation_required = true;
        self.installation = installation;
        self
    }

    /// Whether there is a post-delivery journey worth displaying: an action
    /// lifecycle (active or finished) or an installation track.
    pub fn has_post_delivery_journey(&self) -> bool {
        self.action.status != postship_state::ActionStatus::None || self.installation_required
    }
}
