//! # City and Metro-Region Primitives
//!
//! Shipping addresses carry the city as free text typed by the customer or
//! the upstream order system: `"Noida"`, `"New Delhi"`, `"Delhi NCR"`.
//! Exchange eligibility depends on whether that text resolves to one of the
//! serviced metro regions, so matching is deliberately forgiving:
//! case-insensitive, and an alias only has to appear as a substring of the
//! city text.
//!
//! The alias table folds satellite cities into their region: "Noida" and
//! "Gurgaon" are aliases of Delhi NCR, "Thane" of Mumbai. One region, many
//! spellings.

use serde::{Deserialize, Serialize};

// ─── City ────────────────────────────────────────────────────────────

/// Free-text city from a shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City(pub String);

impl City {
    /// Wrap the city text from an address record.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this city resolves to a serviced metro region.
    pub fn is_metro(&self) -> bool {
        metro_region_for(self).is_some()
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Metro Regions ───────────────────────────────────────────────────

/// A metro region serviced for simultaneous pickup-and-delivery exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetroRegion {
    /// Canonical region name.
    pub name: &'static str,
    /// Lowercase aliases matched as substrings of the city text.
    pub aliases: &'static [&'static str],
}

/// The fixed list of exchange-serviced metro regions.
pub const METRO_REGIONS: &[MetroRegion] = &[
    MetroRegion {
        name: "Delhi NCR",
        aliases: &[
            "delhi",
            "new delhi",
            "delhi ncr",
            "noida",
            "greater noida",
            "gurgaon",
            "gurugram",
            "ghaziabad",
            "faridabad",
        ],
    },
    MetroRegion {
        name: "Mumbai",
        aliases: &["mumbai", "navi mumbai", "thane"],
    },
    MetroRegion {
        name: "Bengaluru",
        aliases: &["bengaluru", "bangalore"],
    },
    MetroRegion {
        name: "Hyderabad",
        aliases: &["hyderabad", "secunderabad"],
    },
    MetroRegion {
        name: "Chennai",
        aliases: &["chennai"],
    },
    MetroRegion {
        name: "Kolkata",
        aliases: &["kolkata", "calcutta"],
    },
    MetroRegion {
        name: "Pune",
        aliases: &["pune"],
    },
];

/// Resolve a city to its metro region, if any alias matches.
///
/// Matching is case-insensitive substring containment: `"New Delhi 110001"`
/// matches the `"delhi"` alias. Resolution is deterministic: the first region in table
/// order wins (aliases do not overlap across regions).
pub fn metro_region_for(city: &City) -> Option<&'static MetroRegion> {
    let normalized = city.as_str().trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    METRO_REGIONS
        .iter()
        .find(|region| region.aliases.iter().any(|alias| normalized.contains(alias)))
}
