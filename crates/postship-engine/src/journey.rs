//! # Journey Step Deriver
//!
//! Produces the ordered, human-readable step sequence shown in the
//! post-delivery timeline for one item. The sequence is derived fresh from
//! the item's current statuses on every call; nothing is cached or
//! mutated in place.
//!
//! ## Shape
//!
//! 1. A synthetic "Delivered" step, always first and always complete.
//! 2. The three installation steps, when the item requires installation.
//! 3. The four action steps, when an action lifecycle is or was active.
//!    The terminal exchange step reads "Exchange Completed" because the pickup
//!    and the replacement delivery happen in the same visit.

use serde::Serialize;

use postship_state::{ActionKind, ActionStage, InstallationStatus};

use postship_model::Item;

// ─── Step State ──────────────────────────────────────────────────────

/// Display state of one journey step.
///
/// A single closed axis instead of the two booleans the predecessor UI
/// carried: a step that is both "reached" and "latest" renders as
/// `Current`, so `Current` wins wherever both would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// Reached and superseded.
    Complete,
    /// The step the item sits at right now.
    Current,
    /// Not yet reached.
    Future,
}

/// One step in an item's post-delivery journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyStep {
    /// Stable step key, e.g. "request_approved".
    pub id: &'static str,
    /// Display label.
    pub label: String,
    /// Optional detail line.
    pub description: Option<String>,
    /// Display state.
    pub state: StepState,
}

impl JourneyStep {
    fn new(id: &'static str, label: impl Into<String>, description: impl Into<String>, state: StepState) -> Self {
        Self {
            id,
            label: label.into(),
            description: Some(description.into()),
            state,
        }
    }
}

// ─── Derivation ──────────────────────────────────────────────────────

/// Derive the journey step sequence for an item.
///
/// Finite, restartable, and recomputed from current state on each call.
pub fn derive_journey(item: &Item) -> Vec<JourneyStep> {
    let mut steps = vec![JourneyStep::new(
        "delivered",
        "Delivered",
        "Package delivered successfully",
        StepState::Complete,
    )];

    if item.installation_required {
        steps.extend(installation_steps(item.installation.status));
    }

    if let (Some(kind), Some(stage)) = (item.action.status.kind(), item.action.status.stage()) {
        steps.extend(action_steps(item, kind, stage));
    }

    steps
}

fn installation_steps(status: InstallationStatus) -> Vec<JourneyStep> {
    let position = |step: InstallationStatus| -> StepState {
        if status == step {
            // installation_completed is an end state, not a waiting point
            if step == InstallationStatus::InstallationCompleted {
                StepState::Complete
            } else {
                StepState::Current
            }
        } else if status > step {
            StepState::Complete
        } else {
            StepState::Future
        }
    };

    vec![
        JourneyStep::new(
            "job_created",
            "Job Created",
            "Installation request submitted",
            position(InstallationStatus::JobCreated),
        ),
        JourneyStep::new(
            "technician_assigned",
            "Technician Assigned",
            "A technician will contact you",
            position(InstallationStatus::TechnicianAssigned),
        ),
        JourneyStep::new(
            "installation_completed",
            "Installation Completed",
            "Setup complete",
            position(InstallationStatus::InstallationCompleted),
        ),
    ]
}

fn action_steps(item: &Item, kind: ActionKind, stage: ActionStage) -> Vec<JourneyStep> {
    let label = kind.label();

    let scheduled_description = match (&item.action.scheduled_date, &item.action.courier_partner) {
        (Some(date), Some(partner)) => format!("Scheduled for {date}, partner: {partner}"),
        (Some(date), None) => format!("Scheduled for {date}"),
        (None, _) => "Pickup date will be confirmed".to_string(),
    };

    let (terminal_label, terminal_description) = match kind {
        ActionKind::Return => ("Return Picked Up", "Item has been collected"),
        ActionKind::Replacement => ("Replacement Picked Up", "Item has been collected"),
        ActionKind::Exchange => ("Exchange Completed", "Delivered and collected in one visit"),
    };

    let position = |step: ActionStage| -> StepState {
        if stage == step {
            // picked_up is finished history, not a waiting point
            if step == ActionStage::PickedUp {
                StepState::Complete
            } else {
                StepState::Current
            }
        } else if stage > step {
            StepState::Complete
        } else {
            StepState::Future
        }
    };

    vec![
        JourneyStep::new(
            "request_submitted",
            "Request Submitted",
            format!("{label} request received"),
            position(ActionStage::Requested),
        ),
        JourneyStep::new(
            "request_approved",
            "Request Approved",
            "Your request has been approved",
            position(ActionStage::Approved),
        ),
        JourneyStep::new(
            "scheduled",
            format!("{label} Scheduled"),
            scheduled_description,
            position(ActionStage::Scheduled),
        ),
        JourneyStep::new(
            "picked_up",
            terminal_label,
            terminal_description,
            position(ActionStage::PickedUp),
        ),
    ]
}
