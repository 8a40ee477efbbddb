//! # Product Categories
//!
//! Defines the `ProductCategory` enum for every product line in the
//! catalog. This is the ONE definition used across the workspace. Every
//! `match` on `ProductCategory` must be exhaustive, so adding a category
//! forces every consumer (eligibility policy included) to handle it at
//! compile time.
//!
//! The predecessor system derived the category by substring-matching the
//! item's display name (`name.includes("pillow")`), conflating display text
//! with business rules. Here the category is an explicit field set at
//! catalog time; [`ProductCategory::infer`] keeps the substring heuristic
//! available for ingesting legacy rows that never stored one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PostshipError;

/// Product category of a purchased item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Mattresses (all sizes and heights).
    Mattress,
    /// Pillows and cushions.
    Pillow,
    /// Bed frames and headboards.
    BedFrame,
    /// Desks and work tables.
    Desk,
    /// Chairs and seating.
    Chair,
    /// Sheets, protectors, and other bedding.
    Bedding,
    /// Anything else sold alongside (toppers, frames, spares).
    Accessory,
}

impl ProductCategory {
    /// All categories, in declaration order.
    pub const ALL: &'static [ProductCategory] = &[
        Self::Mattress,
        Self::Pillow,
        Self::BedFrame,
        Self::Desk,
        Self::Chair,
        Self::Bedding,
        Self::Accessory,
    ];

    /// The canonical snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mattress => "mattress",
            Self::Pillow => "pillow",
            Self::BedFrame => "bed_frame",
            Self::Desk => "desk",
            Self::Chair => "chair",
            Self::Bedding => "bedding",
            Self::Accessory => "accessory",
        }
    }

    /// Infer a category from a display name.
    ///
    /// Legacy fallback for catalog rows that predate the explicit category
    /// field. Case-insensitive substring checks, first match wins; anything
    /// unrecognized lands in `Accessory`. New code should read the stored
    /// category instead.
    pub fn infer(display_name: &str) -> Self {
        let name = display_name.to_lowercase();
        if name.contains("pillow") || name.contains("cushion") {
            Self::Pillow
        } else if name.contains("mattress") {
            Self::Mattress
        } else if name.contains("bed") {
            Self::BedFrame
        } else if name.contains("desk") || name.contains("table") {
            Self::Desk
        } else if name.contains("chair") {
            Self::Chair
        } else if name.contains("sheet") || name.contains("protector") || name.contains("bedding") {
            Self::Bedding
        } else {
            Self::Accessory
        }
    }
}

impl FromStr for ProductCategory {
    type Err = PostshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mattress" => Ok(Self::Mattress),
            "pillow" => Ok(Self::Pillow),
            "bed_frame" => Ok(Self::BedFrame),
            "desk" => Ok(Self::Desk),
            "chair" => Ok(Self::Chair),
            "bedding" => Ok(Self::Bedding),
            "accessory" => Ok(Self::Accessory),
            other => Err(PostshipError::MissingRequiredInput {
                input: format!("unknown product category: {other}"),
            }),
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
