//! # Installation Track
//!
//! Tracks physical installation progress for items that need a technician
//! visit (bed frames, desks). Strictly linear: no skips, no backward moves:
//!
//! ```text
//! not_required ──▶ job_created ──▶ technician_assigned ──▶ installation_completed
//! ```
//!
//! This axis is informational to the display layer and fully independent of
//! the action lifecycle. An item can be mid-installation and still request
//! a return; the two machines never consult each other.

use serde::{Deserialize, Serialize};

use postship_core::PostshipError;

// ─── Installation Status ─────────────────────────────────────────────

/// Installation progress for an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationStatus {
    /// The item needs no installation, or none has been requested yet.
    #[default]
    NotRequired,
    /// Installation job raised with the service team.
    JobCreated,
    /// A technician has been assigned and will contact the customer.
    TechnicianAssigned,
    /// Setup complete (terminal).
    InstallationCompleted,
}

impl InstallationStatus {
    /// The next status in the linear sequence, if any.
    pub fn next(&self) -> Option<InstallationStatus> {
        match self {
            Self::NotRequired => Some(Self::JobCreated),
            Self::JobCreated => Some(Self::TechnicianAssigned),
            Self::TechnicianAssigned => Some(Self::InstallationCompleted),
            Self::InstallationCompleted => None,
        }
    }

    /// Badge label for display, `None` when there is nothing to show.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            Self::NotRequired => None,
            Self::JobCreated => Some("Installation Pending"),
            Self::TechnicianAssigned => Some("Technician Assigned"),
            Self::InstallationCompleted => Some("Installation Complete"),
        }
    }

    /// The canonical snake_case name, matching the record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRequired => "not_required",
            Self::JobCreated => "job_created",
            Self::TechnicianAssigned => "technician_assigned",
            Self::InstallationCompleted => "installation_completed",
        }
    }
}

impl std::fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Installation Track ──────────────────────────────────────────────

/// The installation state machine for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationTrack {
    /// Current installation status.
    pub status: InstallationStatus,
}

impl InstallationTrack {
    /// A track with no job raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// A track restored at a persisted status.
    pub fn at_status(status: InstallationStatus) -> Self {
        Self { status }
    }

    /// Raise the installation job (`not_required` → `job_created`).
    pub fn create_job(&mut self) -> Result<(), PostshipError> {
        self.step_to(InstallationStatus::JobCreated)
    }

    /// Assign a technician (`job_created` → `technician_assigned`).
    pub fn assign_technician(&mut self) -> Result<(), PostshipError> {
        self.step_to(InstallationStatus::TechnicianAssigned)
    }

    /// Mark setup complete (`technician_assigned` → `installation_completed`).
    pub fn complete(&mut self) -> Result<(), PostshipError> {
        self.step_to(InstallationStatus::InstallationCompleted)
    }

    /// Whether installation finished.
    pub fn is_complete(&self) -> bool {
        self.status == InstallationStatus::InstallationCompleted
    }

    /// Advance one step, validating linearity.
    fn step_to(&mut self, target: InstallationStatus) -> Result<(), PostshipError> {
        if self.status.next() != Some(target) {
            return Err(PostshipError::invalid_transition(self.status, target));
        }
        self.status = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progression() {
        let mut track = InstallationTrack::new();
        track.create_job().unwrap();
        track.assign_technician().unwrap();
        track.complete().unwrap();
        assert!(track.is_complete());
    }

    #[test]
    fn test_cannot_skip_forward() {
        let mut track = InstallationTrack::new();
        assert_eq!(
            track.assign_technician(),
            Err(PostshipError::invalid_transition(
                InstallationStatus::NotRequired,
                InstallationStatus::TechnicianAssigned,
            ))
        );
        assert_eq!(track.status, InstallationStatus::NotRequired);
    }

    #[test]
    fn test_cannot_move_backward() {
        let mut track = InstallationTrack::at_status(InstallationStatus::TechnicianAssigned);
        assert!(track.create_job().is_err());
        assert_eq!(track.status, InstallationStatus::TechnicianAssigned);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut track = InstallationTrack::at_status(InstallationStatus::InstallationCompleted);
        assert!(track.create_job().is_err());
        assert!(track.assign_technician().is_err());
        assert!(track.complete().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&InstallationStatus::TechnicianAssigned).unwrap(),
            "\"technician_assigned\""
        );
        let back: InstallationStatus = serde_json::from_str("\"job_created\"").unwrap();
        assert_eq!(back, InstallationStatus::JobCreated);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(InstallationStatus::NotRequired.badge_label(), None);
        assert_eq!(
            InstallationStatus::JobCreated.badge_label(),
            Some("Installation Pending")
        );
    }
}
