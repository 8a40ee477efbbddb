//! # postship-state: Post-Delivery State Machines
//!
//! Implements the two state machines that govern an item after its shipment
//! is delivered. Each machine is a plain enum with named transition methods;
//! every transition is runtime-validated and rejected with a structured
//! error when it does not follow the legal sequence. Item records arrive
//! from the data layer with arbitrary persisted statuses, so the states
//! cannot be encoded in the type system alone; validation happens when a
//! transition is requested.
//!
//! ## State Machines
//!
//! - **Action lifecycle** (`action.rs`): one lifecycle per item for
//!   return, replacement, or exchange:
//!
//!   ```text
//!   none ──initiate(k)──▶ k_requested ──approve()──▶ k_approved
//!                                                        │
//!                                  schedule(date)────────┘
//!                                        │
//!                                        ▼
//!                   k_scheduled ──complete_pickup()──▶ k_picked_up (terminal)
//!   ```
//!
//!   `k_picked_up` is permanent history: a finished lifecycle admits no
//!   further transitions, and a new one can only start from `none`.
//!
//! - **Installation track** (`installation.rs`): linear, no skips, no
//!   backward moves:
//!
//!   ```text
//!   not_required ──▶ job_created ──▶ technician_assigned ──▶ installation_completed
//!   ```
//!
//! The two machines are independent axes. Installation progress never gates
//! the action lifecycle and the action lifecycle never touches installation
//! state: an item can be mid-installation and still request a return.

pub mod action;
pub mod installation;

// ─── Action lifecycle re-exports ────────────────────────────────────

pub use action::{
    ActionKind, ActionLifecycle, ActionRequest, ActionStage, ActionStatus, ActionTransitionRecord,
    ImageAttachment, PickupSchedule,
};

// ─── Installation re-exports ────────────────────────────────────────

pub use installation::{InstallationStatus, InstallationTrack};
