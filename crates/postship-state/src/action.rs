//! # Post-Delivery Action Lifecycle
//!
//! Models the request-to-completion lifecycle of a return, replacement, or
//! exchange for one delivered item.
//!
//! ## States
//!
//! The same four-stage sequence applies to every action kind `k`:
//!
//! ```text
//! none ──▶ k_requested ──▶ k_approved ──▶ k_scheduled ──▶ k_picked_up
//!                                                           (terminal)
//! ```
//!
//! For an exchange, `exchange_picked_up` means "exchange completed": the
//! replacement was delivered and the old item collected in one visit.
//!
//! ## Input Constraints
//!
//! - Initiation always requires a reason from the fixed enumerated list.
//! - Replacement and exchange additionally require at least one supporting
//!   image; a return needs none.
//! - Scheduling requires a pickup date; the courier partner is optional.
//!
//! ## Invariants
//!
//! - Exactly one active lifecycle per item: initiation is legal only from
//!   `none`.
//! - `k_picked_up` is permanent history. Every transition attempt out of it
//!   is rejected as an invalid transition.
//! - Invalid transitions are rejected, never silently coerced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postship_core::{PostshipError, ReturnReason};

// ─── Action Kind ─────────────────────────────────────────────────────

/// The kind of post-delivery action a customer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Pickup and refund to the original payment method.
    Return,
    /// Asynchronous flow: pickup first, new item shipped afterward.
    Replacement,
    /// Simultaneous pickup and delivery of the new item in one visit.
    Exchange,
}

impl ActionKind {
    /// Customer-facing label ("Return", "Replacement", "Exchange").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Return => "Return",
            Self::Replacement => "Replacement",
            Self::Exchange => "Exchange",
        }
    }

    /// Whether initiation requires at least one supporting image.
    ///
    /// A refund-only return needs none; replacement and exchange ship a new
    /// unit and require photographic evidence of the issue.
    pub fn requires_images(&self) -> bool {
        !matches!(self, Self::Return)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Return => "return",
            Self::Replacement => "replacement",
            Self::Exchange => "exchange",
        };
        f.write_str(s)
    }
}

// ─── Action Stage ────────────────────────────────────────────────────

/// Position within an active lifecycle, independent of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStage {
    /// Customer submitted the request.
    Requested,
    /// Ops approved the request.
    Approved,
    /// Pickup (or exchange visit) has a confirmed date.
    Scheduled,
    /// Item collected, lifecycle finished (terminal).
    PickedUp,
}

impl ActionStage {
    /// The canonical snake_case name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Approved => "approved",
            Self::Scheduled => "scheduled",
            Self::PickedUp => "picked_up",
        }
    }
}

// ─── Action Status ───────────────────────────────────────────────────

/// The persisted action status of an item.
///
/// One closed enum per the record format: `none` plus the twelve
/// kind-stage combinations, serialized exactly as the upstream records
/// spell them (`"return_scheduled"`, `"exchange_picked_up"`, …).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// No action lifecycle has ever been initiated.
    #[default]
    None,
    /// Return requested, awaiting review.
    ReturnRequested,
    /// Return approved, awaiting scheduling.
    ReturnApproved,
    /// Return pickup scheduled.
    ReturnScheduled,
    /// Return completed, item collected (terminal).
    ReturnPickedUp,
    /// Replacement requested, awaiting review.
    ReplacementRequested,
    /// Replacement approved, awaiting scheduling.
    ReplacementApproved,
    /// Replacement pickup scheduled.
    ReplacementScheduled,
    /// Replacement pickup completed; new item ships next (terminal).
    ReplacementPickedUp,
    /// Exchange requested, awaiting review.
    ExchangeRequested,
    /// Exchange approved, awaiting scheduling.
    ExchangeApproved,
    /// Exchange visit scheduled.
    ExchangeScheduled,
    /// Exchange completed: delivered and collected in one visit (terminal).
    ExchangePickedUp,
}

impl ActionStatus {
    /// Compose a status from kind and stage.
    pub fn of(kind: ActionKind, stage: ActionStage) -> Self {
        match (kind, stage) {
            (ActionKind::Return, ActionStage::Requested) => Self::ReturnRequested,
            (ActionKind::Return, ActionStage::Approved) => Self::ReturnApproved,
            (ActionKind::Return, ActionStage::Scheduled) => Self::ReturnScheduled,
            (ActionKind::Return, ActionStage::PickedUp) => Self::ReturnPickedUp,
            (ActionKind::Replacement, ActionStage::Requested) => Self::ReplacementRequested,
            (ActionKind::Replacement, ActionStage::Approved) => Self::ReplacementApproved,
            (ActionKind::Replacement, ActionStage::Scheduled) => Self::ReplacementScheduled,
            (ActionKind::Replacement, ActionStage::PickedUp) => Self::ReplacementPickedUp,
            (ActionKind::Exchange, ActionStage::Requested) => Self::ExchangeRequested,
            (ActionKind::Exchange, ActionStage::Approved) => Self::ExchangeApproved,
            (ActionKind::Exchange, ActionStage::Scheduled) => Self::ExchangeScheduled,
            (ActionKind::Exchange, ActionStage::PickedUp) => Self::ExchangePickedUp,
        }
    }

    /// The action kind, if a lifecycle is or was active.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::None => None,
            Self::ReturnRequested
            | Self::ReturnApproved
            | Self::ReturnScheduled
            | Self::ReturnPickedUp => Some(ActionKind::Return),
            Self::ReplacementRequested
            | Self::ReplacementApproved
            | Self::ReplacementScheduled
            | Self::ReplacementPickedUp => Some(ActionKind::Replacement),
            Self::ExchangeRequested
            | Self::ExchangeApproved
            | Self::ExchangeScheduled
            | Self::ExchangePickedUp => Some(ActionKind::Exchange),
        }
    }

    /// The lifecycle stage, if a lifecycle is or was active.
    pub fn stage(&self) -> Option<ActionStage> {
        match self {
            Self::None => None,
            Self::ReturnRequested | Self::ReplacementRequested | Self::ExchangeRequested => {
                Some(ActionStage::Requested)
            }
            Self::ReturnApproved | Self::ReplacementApproved | Self::ExchangeApproved => {
                Some(ActionStage::Approved)
            }
            Self::ReturnScheduled | Self::ReplacementScheduled | Self::ExchangeScheduled => {
                Some(ActionStage::Scheduled)
            }
            Self::ReturnPickedUp | Self::ReplacementPickedUp | Self::ExchangePickedUp => {
                Some(ActionStage::PickedUp)
            }
        }
    }

    /// Whether this status is terminal (a finished lifecycle, kept as history).
    pub fn is_terminal(&self) -> bool {
        matches!(self.stage(), Some(ActionStage::PickedUp))
    }

    /// Whether a lifecycle is in flight (initiated and not yet picked up).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None) && !self.is_terminal()
    }

    /// Badge label for display, `None` when there is nothing to show.
    pub fn badge_label(&self) -> Option<&'static str> {
        let label = match self {
            Self::None => return None,
            Self::ReturnRequested => "Return Requested",
            Self::ReturnApproved => "Return Approved",
            Self::ReturnScheduled => "Pickup Scheduled",
            Self::ReturnPickedUp => "Returned",
            Self::ReplacementRequested => "Replacement Requested",
            Self::ReplacementApproved => "Replacement Approved",
            Self::ReplacementScheduled => "Replacement Scheduled",
            Self::ReplacementPickedUp => "Replaced",
            Self::ExchangeRequested => "Exchange Requested",
            Self::ExchangeApproved => "Exchange Approved",
            Self::ExchangeScheduled => "Exchange Scheduled",
            Self::ExchangePickedUp => "Exchanged",
        };
        Some(label)
    }

    /// The canonical snake_case name, matching the record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReturnRequested => "return_requested",
            Self::ReturnApproved => "return_approved",
            Self::ReturnScheduled => "return_scheduled",
            Self::ReturnPickedUp => "return_picked_up",
            Self::ReplacementRequested => "replacement_requested",
            Self::ReplacementApproved => "replacement_approved",
            Self::ReplacementScheduled => "replacement_scheduled",
            Self::ReplacementPickedUp => "replacement_picked_up",
            Self::ExchangeRequested => "exchange_requested",
            Self::ExchangeApproved => "exchange_approved",
            Self::ExchangeScheduled => "exchange_scheduled",
            Self::ExchangePickedUp => "exchange_picked_up",
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Submission Inputs ───────────────────────────────────────────────

/// A supporting image attached to a replacement or exchange request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// Uploaded file name.
    pub file_name: String,
}

impl ImageAttachment {
    /// Attachment with the given file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Customer input collected by the request form.
///
/// The reason is optional here because the form starts empty; the
/// lifecycle rejects initiation until one is selected.
#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    /// Selected reason from the fixed list.
    pub reason: Option<ReturnReason>,
    /// Free-text notes ("Tell us more about the issue…").
    pub notes: Option<String>,
    /// Supporting images; required for replacement and exchange.
    pub images: Vec<ImageAttachment>,
}

/// Pickup (or exchange visit) scheduling details.
#[derive(Debug, Clone)]
pub struct PickupSchedule {
    /// Customer-facing display date, e.g. "Dec 20, 2024".
    pub date: String,
    /// Courier partner handling the visit, if already assigned.
    pub courier_partner: Option<String>,
}

// ─── Transition Record ───────────────────────────────────────────────

/// One entry in the lifecycle's transition log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionTransitionRecord {
    /// Status before the transition.
    pub from: ActionStatus,
    /// Status after the transition.
    pub to: ActionStatus,
    /// When the transition was recorded.
    pub at: DateTime<Utc>,
    /// Short note describing the event.
    pub note: String,
}

// ─── Action Lifecycle ────────────────────────────────────────────────

/// An item's post-delivery action lifecycle with its transition history.
///
/// Enforces the legal stage sequence with structured error reporting. The
/// submitted reason, notes, images, and scheduling details are kept on the
/// lifecycle so the display layer can render them without another lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionLifecycle {
    /// Current status.
    pub status: ActionStatus,
    /// Reason given at initiation.
    pub reason: Option<ReturnReason>,
    /// Free-text notes given at initiation.
    pub notes: Option<String>,
    /// Supporting images given at initiation.
    pub images: Vec<ImageAttachment>,
    /// Display date of the scheduled visit, once scheduled.
    pub scheduled_date: Option<String>,
    /// Courier partner for the scheduled visit, if assigned.
    pub courier_partner: Option<String>,
    /// Ordered log of all transitions.
    pub transitions: Vec<ActionTransitionRecord>,
}

impl ActionLifecycle {
    /// A lifecycle that has never been initiated.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifecycle restored at a given persisted status, with no local
    /// history. Used when hydrating records from the data source.
    pub fn at_status(status: ActionStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Initiate a lifecycle (`none` → `k_requested`).
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` when a lifecycle is already in flight or
    ///   finished; only `none` may initiate.
    /// - `MissingRequiredInput` when no reason is selected, or when a
    ///   replacement/exchange request carries no supporting image.
    pub fn initiate(&mut self, kind: ActionKind, request: ActionRequest) -> Result<(), PostshipError> {
        let target = ActionStatus::of(kind, ActionStage::Requested);
        if self.status != ActionStatus::None {
            return Err(PostshipError::invalid_transition(self.status, target));
        }
        let Some(reason) = request.reason else {
            return Err(PostshipError::missing_input("reason"));
        };
        if kind.requires_images() && request.images.is_empty() {
            return Err(PostshipError::missing_input("images"));
        }

        self.reason = Some(reason);
        self.notes = request.notes;
        self.images = request.images;
        self.record(target, format!("{} requested: {}", kind.label(), reason.label()));
        Ok(())
    }

    /// Approve the request (`k_requested` → `k_approved`).
    ///
    /// Approval is an external ops event; the engine only validates and
    /// records it.
    pub fn approve(&mut self) -> Result<(), PostshipError> {
        let kind = self.require_stage(ActionStage::Requested, ActionStage::Approved)?;
        self.record(
            ActionStatus::of(kind, ActionStage::Approved),
            format!("{} approved", kind.label()),
        );
        Ok(())
    }

    /// Schedule the visit (`k_approved` → `k_scheduled`).
    ///
    /// # Errors
    ///
    /// `MissingRequiredInput` when the schedule carries no date.
    pub fn schedule(&mut self, schedule: PickupSchedule) -> Result<(), PostshipError> {
        let kind = self.require_stage(ActionStage::Approved, ActionStage::Scheduled)?;
        if schedule.date.trim().is_empty() {
            return Err(PostshipError::missing_input("scheduled_date"));
        }
        self.scheduled_date = Some(schedule.date);
        self.courier_partner = schedule.courier_partner;
        self.record(
            ActionStatus::of(kind, ActionStage::Scheduled),
            format!("{} scheduled", kind.label()),
        );
        Ok(())
    }

    /// Complete the visit (`k_scheduled` → `k_picked_up`). Terminal.
    pub fn complete_pickup(&mut self) -> Result<(), PostshipError> {
        let kind = self.require_stage(ActionStage::Scheduled, ActionStage::PickedUp)?;
        self.record(
            ActionStatus::of(kind, ActionStage::PickedUp),
            format!("{} picked up", kind.label()),
        );
        Ok(())
    }

    /// Whether a lifecycle is in flight.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the lifecycle finished and is now history.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Validate that an active lifecycle sits at `expected`, returning its
    /// kind. The error names the stage the caller was trying to reach.
    fn require_stage(
        &self,
        expected: ActionStage,
        target: ActionStage,
    ) -> Result<ActionKind, PostshipError> {
        match (self.status.kind(), self.status.stage()) {
            (Some(kind), Some(stage)) if stage == expected => Ok(kind),
            (Some(kind), _) => Err(PostshipError::invalid_transition(
                self.status,
                ActionStatus::of(kind, target),
            )),
            (None, _) => Err(PostshipError::InvalidTransition {
                from: self.status.to_string(),
                to: target.as_str().to_string(),
            }),
        }
    }

    /// Append a transition record and move to the new status.
    fn record(&mut self, to: ActionStatus, note: String) {
        self.transitions.push(ActionTransitionRecord {
            from: self.status,
            to,
            at: Utc::now(),
            note,
        });
        self.status = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn return_request() -> ActionRequest {
        ActionRequest {
            reason: Some(ReturnReason::DamagedProduct),
            notes: Some("Tear along the left seam".to_string()),
            images: Vec::new(),
        }
    }

    fn request_with_image(reason: ReturnReason) -> ActionRequest {
        ActionRequest {
            reason: Some(reason),
            notes: None,
            images: vec![ImageAttachment::new("IMG_0041.jpg")],
        }
    }

    fn schedule() -> PickupSchedule {
        PickupSchedule {
            date: "Dec 20, 2024".to_string(),
            courier_partner: Some("Delhivery".to_string()),
        }
    }

    // ── Happy-path lifecycle tests ───────────────────────────────────

    #[test]
    fn test_new_lifecycle_is_none() {
        let lc = ActionLifecycle::new();
        assert_eq!(lc.status, ActionStatus::None);
        assert!(!lc.is_active());
        assert!(!lc.is_terminal());
    }

    #[test]
    fn test_return_initiation_without_images() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        assert_eq!(lc.status, ActionStatus::ReturnRequested);
        assert_eq!(lc.reason, Some(ReturnReason::DamagedProduct));
        assert_eq!(lc.transitions.len(), 1);
        assert!(lc.is_active());
    }

    #[test]
    fn test_full_return_lifecycle() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        lc.approve().unwrap();
        lc.schedule(schedule()).unwrap();
        lc.complete_pickup().unwrap();

        assert_eq!(lc.status, ActionStatus::ReturnPickedUp);
        assert!(lc.is_terminal());
        assert_eq!(lc.transitions.len(), 4);
        assert_eq!(lc.scheduled_date.as_deref(), Some("Dec 20, 2024"));
        assert_eq!(lc.courier_partner.as_deref(), Some("Delhivery"));
    }

    #[test]
    fn test_exchange_lifecycle_reaches_completion() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Exchange, request_with_image(ReturnReason::ComfortIssue))
            .unwrap();
        lc.approve().unwrap();
        lc.schedule(schedule()).unwrap();
        lc.complete_pickup().unwrap();
        assert_eq!(lc.status, ActionStatus::ExchangePickedUp);
    }

    #[test]
    fn test_schedule_without_courier_partner() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        lc.approve().unwrap();
        lc.schedule(PickupSchedule {
            date: "Dec 22, 2024".to_string(),
            courier_partner: None,
        })
        .unwrap();
        assert_eq!(lc.status, ActionStatus::ReturnScheduled);
        assert_eq!(lc.courier_partner, None);
    }

    // ── Missing-input tests ──────────────────────────────────────────

    #[test]
    fn test_initiation_without_reason_is_rejected() {
        let mut lc = ActionLifecycle::new();
        let result = lc.initiate(
            ActionKind::Return,
            ActionRequest {
                reason: None,
                ..ActionRequest::default()
            },
        );
        assert_eq!(result, Err(PostshipError::missing_input("reason")));
        assert_eq!(lc.status, ActionStatus::None);
    }

    #[test]
    fn test_replacement_without_images_is_rejected() {
        let mut lc = ActionLifecycle::new();
        let result = lc.initiate(ActionKind::Replacement, return_request());
        assert_eq!(result, Err(PostshipError::missing_input("images")));
        assert_eq!(lc.status, ActionStatus::None);
    }

    #[test]
    fn test_replacement_with_image_succeeds() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(
            ActionKind::Replacement,
            request_with_image(ReturnReason::WrongItemDelivered),
        )
        .unwrap();
        assert_eq!(lc.status, ActionStatus::ReplacementRequested);
    }

    #[test]
    fn test_exchange_without_images_is_rejected() {
        let mut lc = ActionLifecycle::new();
        let result = lc.initiate(ActionKind::Exchange, return_request());
        assert_eq!(result, Err(PostshipError::missing_input("images")));
    }

    #[test]
    fn test_schedule_with_empty_date_is_rejected() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        lc.approve().unwrap();
        let result = lc.schedule(PickupSchedule {
            date: "  ".to_string(),
            courier_partner: None,
        });
        assert_eq!(result, Err(PostshipError::missing_input("scheduled_date")));
        assert_eq!(lc.status, ActionStatus::ReturnApproved);
    }

    // ── Invalid transition tests ─────────────────────────────────────

    #[test]
    fn test_cannot_skip_to_picked_up() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        let result = lc.complete_pickup();
        assert_eq!(
            result,
            Err(PostshipError::invalid_transition(
                ActionStatus::ReturnRequested,
                ActionStatus::ReturnPickedUp,
            ))
        );
    }

    #[test]
    fn test_cannot_approve_from_none() {
        let mut lc = ActionLifecycle::new();
        assert!(matches!(
            lc.approve(),
            Err(PostshipError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_cannot_schedule_before_approval() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        assert!(matches!(
            lc.schedule(schedule()),
            Err(PostshipError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_cannot_initiate_while_action_in_flight() {
        let mut lc = ActionLifecycle::at_status(ActionStatus::ExchangeApproved);
        let result = lc.initiate(ActionKind::Return, return_request());
        assert_eq!(
            result,
            Err(PostshipError::invalid_transition(
                ActionStatus::ExchangeApproved,
                ActionStatus::ReturnRequested,
            ))
        );
    }

    #[test]
    fn test_terminal_status_rejects_everything() {
        let mut lc = ActionLifecycle::at_status(ActionStatus::ReturnPickedUp);
        assert!(matches!(
            lc.initiate(ActionKind::Return, return_request()),
            Err(PostshipError::InvalidTransition { .. })
        ));
        assert!(matches!(lc.approve(), Err(PostshipError::InvalidTransition { .. })));
        assert!(matches!(
            lc.schedule(schedule()),
            Err(PostshipError::InvalidTransition { .. })
        ));
        assert!(matches!(
            lc.complete_pickup(),
            Err(PostshipError::InvalidTransition { .. })
        ));
        assert_eq!(lc.status, ActionStatus::ReturnPickedUp);
    }

    #[test]
    fn test_double_approve_is_rejected() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        lc.approve().unwrap();
        assert!(lc.approve().is_err());
        assert_eq!(lc.status, ActionStatus::ReturnApproved);
    }

    // ── Status accessor tests ────────────────────────────────────────

    #[test]
    fn test_status_kind_and_stage_round_trip() {
        for kind in [ActionKind::Return, ActionKind::Replacement, ActionKind::Exchange] {
            for stage in [
                ActionStage::Requested,
                ActionStage::Approved,
                ActionStage::Scheduled,
                ActionStage::PickedUp,
            ] {
                let status = ActionStatus::of(kind, stage);
                assert_eq!(status.kind(), Some(kind));
                assert_eq!(status.stage(), Some(stage));
            }
        }
        assert_eq!(ActionStatus::None.kind(), None);
        assert_eq!(ActionStatus::None.stage(), None);
    }

    #[test]
    fn test_terminal_and_active_flags() {
        assert!(ActionStatus::ExchangePickedUp.is_terminal());
        assert!(!ActionStatus::ExchangePickedUp.is_active());
        assert!(ActionStatus::ReturnRequested.is_active());
        assert!(!ActionStatus::None.is_active());
        assert!(!ActionStatus::None.is_terminal());
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(ActionStatus::None.badge_label(), None);
        assert_eq!(ActionStatus::ReturnScheduled.badge_label(), Some("Pickup Scheduled"));
        assert_eq!(ActionStatus::ReturnPickedUp.badge_label(), Some("Returned"));
        assert_eq!(ActionStatus::ExchangePickedUp.badge_label(), Some("Exchanged"));
    }

    // ── Serialization tests ──────────────────────────────────────────

    #[test]
    fn test_status_serializes_to_record_strings() {
        assert_eq!(serde_json::to_string(&ActionStatus::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::to_string(&ActionStatus::ReturnScheduled).unwrap(),
            "\"return_scheduled\""
        );
        assert_eq!(
            serde_json::to_string(&ActionStatus::ExchangePickedUp).unwrap(),
            "\"exchange_picked_up\""
        );
        let back: ActionStatus = serde_json::from_str("\"replacement_approved\"").unwrap();
        assert_eq!(back, ActionStatus::ReplacementApproved);
    }

    #[test]
    fn test_lifecycle_serialization_round_trip() {
        let mut lc = ActionLifecycle::new();
        lc.initiate(ActionKind::Return, return_request()).unwrap();
        lc.approve().unwrap();
        let json = serde_json::to_string(&lc).unwrap();
        let parsed: ActionLifecycle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, lc.status);
        assert_eq!(parsed.reason, lc.reason);
        assert_eq!(parsed.transitions.len(), 2);
    }
}
