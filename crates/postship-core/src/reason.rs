//! # Return Reasons
//!
//! The fixed enumerated list a customer picks from when initiating a
//! return, replacement, or exchange. The form's reason selector is
//! populated from [`ReturnReason::ALL`]; free-text detail goes in the
//! optional notes field, never here.

use serde::{Deserialize, Serialize};

/// Customer-selected reason for a post-delivery action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    /// Item arrived damaged or stopped working.
    DamagedProduct,
    /// A different item than ordered was delivered.
    WrongItemDelivered,
    /// Product quality did not match expectations.
    QualityNotAsExpected,
    /// Comfort or size issue after trial.
    ComfortIssue,
    /// Customer no longer needs the item.
    NoLongerNeeded,
    /// Anything else; detail expected in the notes.
    Other,
}

impl ReturnReason {
    /// All reasons, in the order the form presents them.
    pub const ALL: &'static [ReturnReason] = &[
        Self::DamagedProduct,
        Self::WrongItemDelivered,
        Self::QualityNotAsExpected,
        Self::ComfortIssue,
        Self::NoLongerNeeded,
        Self::Other,
    ];

    /// Customer-facing label for the reason selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DamagedProduct => "Damaged or defective product",
            Self::WrongItemDelivered => "Wrong item delivered",
            Self::QualityNotAsExpected => "Quality not as expected",
            Self::ComfortIssue => "Comfort or size issue",
            Self::NoLongerNeeded => "No longer needed",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ReturnReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
