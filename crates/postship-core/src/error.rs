//! # Structured Rejections
//!
//! Defines the error type used throughout the postship workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! The engine performs no I/O and nothing is retried: every failure is a
//! synchronous, typed rejection the calling layer must surface.
//!
//! - `InvalidTransition`: the requested state change does not follow the
//!   legal sequence for that lifecycle. Attempts to move out of a terminal
//!   state report the same kind: a finished lifecycle is history, and
//!   history admits no transitions.
//! - `MissingRequiredInput`: the submission lacked a mandatory field
//!   (reason, or supporting images for replacement/exchange). The caller
//!   must block submission, not supply a default.
//! - `IneligibleAction`: the caller asked for an action the eligibility
//!   resolver never offered for that item/city combination. This is a
//!   programming or UI error, not a recoverable runtime condition.

use thiserror::Error;

/// Top-level error type for the post-delivery action engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostshipError {
    /// State machine transition rejected.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state name.
        from: String,
        /// Attempted target state name.
        to: String,
    },

    /// A mandatory submission input was absent.
    #[error("missing required input: {input}")]
    MissingRequiredInput {
        /// The input that was absent (e.g. "reason", "images").
        input: String,
    },

    /// The requested action is not offered for this item/city combination.
    #[error("action {action} is not eligible: {reason}")]
    IneligibleAction {
        /// The action the caller attempted.
        action: String,
        /// Why the action is not offered.
        reason: String,
    },
}

impl PostshipError {
    /// Construct an `InvalidTransition` from state display names.
    pub fn invalid_transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Construct a `MissingRequiredInput` for the named input.
    pub fn missing_input(input: &str) -> Self {
        Self::MissingRequiredInput {
            input: input.to_string(),
        }
    }

    /// Construct an `IneligibleAction` with a rejection reason.
    pub fn ineligible(action: impl std::fmt::Display, reason: &str) -> Self {
        Self::IneligibleAction {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }
}
