//! # postship-engine: Post-Delivery Action Engine
//!
//! Pure domain logic with no I/O: decides which post-delivery actions an
//! item may offer, validates and applies lifecycle transitions, and derives
//! the display journey. The rendering and data layers consume this crate;
//! it depends on neither.
//!
//! ## Modules
//!
//! - **Eligibility** (`eligibility.rs`): `(category, city) → action set`.
//!   Return is always offered once delivered; exchange only in serviced
//!   metro regions for non-excluded categories; replacement exactly when
//!   exchange is not offered.
//!
//! - **Submission** (`submit.rs`): the front door. Gates on shipment
//!   delivery, checks the requested kind against the resolver, then
//!   delegates to the item's lifecycle, which stays the single point of
//!   truth for whether a transition is legal.
//!
//! - **Journey** (`journey.rs`): derives the ordered step sequence shown in
//!   the post-delivery timeline, recomputed fresh from current state on
//!   every call.
//!
//! Every operation here is a synchronous computation over in-memory values.
//! Each item's state is independent; no operation ever touches two items.

pub mod eligibility;
pub mod journey;
pub mod submit;

// ─── Re-exports ──────────────────────────────────────────────────────

pub use eligibility::EligibilityPolicy;
pub use journey::{derive_journey, JourneyStep, StepState};
pub use submit::{approve_action, complete_pickup, request_action, schedule_action};
