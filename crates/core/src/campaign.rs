//! Campaign lifecycle statuses, content tracks, and transition rules (PRD-04).
//!
//! The transition table here is the single source of truth for which status
//! moves are legal. The db layer re-checks the same rules with guarded
//! conditional UPDATEs so two concurrent writers cannot race a campaign
//! into an illegal state.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Campaign status
// ---------------------------------------------------------------------------

/// Lifecycle status of a campaign. Exactly one value at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
    Active,
    Completed,
    Cancelled,
    Paused,
}

impl CampaignStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending_approval" => Ok(Self::PendingApproval),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "paused" => Ok(Self::Paused),
            _ => Err(CoreError::Validation(format!(
                "Invalid campaign status '{s}'"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Paused => "paused",
        }
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Statuses in which the owning brand may edit the campaign.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Draft | Self::Rejected)
    }
}

/// Check whether a status transition is legal.
///
/// ```text
/// draft            --(submit)-->    pending_approval
/// rejected         --(resubmit)-->  pending_approval
/// pending_approval --(approve)-->   approved | active   (policy, PRD-09)
/// pending_approval --(reject)-->    rejected
/// approved         --(activate)-->  active
/// active           --(pause)-->     paused
/// paused           --(resume)-->    active
/// active           --(complete)-->  completed
/// any non-terminal --(cancel)-->    cancelled
/// ```
pub fn can_transition(from: CampaignStatus, to: CampaignStatus) -> bool {
    use CampaignStatus::*;
    match (from, to) {
        (Draft, PendingApproval) => true,
        (Rejected, PendingApproval) => true,
        (PendingApproval, Approved) => true,
        (PendingApproval, Active) => true,
        (PendingApproval, Rejected) => true,
        (Approved, Active) => true,
        (Active, Paused) => true,
        (Paused, Active) => true,
        (Active, Completed) => true,
        (from, Cancelled) => !from.is_terminal(),
        _ => false,
    }
}

/// Validate a transition, naming both sides on failure.
pub fn ensure_transition(
    from: CampaignStatus,
    to: CampaignStatus,
) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidState {
            entity: "Campaign",
            current: from.as_str(),
            requested: to.as_str(),
        })
    }
}

// ---------------------------------------------------------------------------
// Post-approval policy
// ---------------------------------------------------------------------------

/// What status an approved campaign lands in (PRD-09).
///
/// Deployments differ on whether approval implies an immediate go-live.
/// With `Approved`, activation is a separate admin step; with `Active`,
/// approval and activation collapse into one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    Approved,
    Active,
}

impl ApprovalPolicy {
    /// Parse the policy from its configuration string.
    pub fn from_config(s: &str) -> Result<Self, CoreError> {
        match s {
            "approved" => Ok(Self::Approved),
            "active" => Ok(Self::Active),
            _ => Err(CoreError::Validation(format!(
                "Invalid approval policy '{s}'. Must be 'approved' or 'active'"
            ))),
        }
    }

    /// The status an approve transition resolves to under this policy.
    pub fn post_approval_status(self) -> CampaignStatus {
        match self {
            Self::Approved => CampaignStatus::Approved,
            Self::Active => CampaignStatus::Active,
        }
    }
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::Approved
    }
}

// ---------------------------------------------------------------------------
// Content type
// ---------------------------------------------------------------------------

/// Which content tracks a campaign funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Original,
    Repurposed,
    Both,
}

impl ContentType {
    /// Parse a content type string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "original" => Ok(Self::Original),
            "repurposed" => Ok(Self::Repurposed),
            "both" => Ok(Self::Both),
            _ => Err(CoreError::Validation(format!(
                "Invalid content type '{s}'. Must be one of: original, repurposed, both"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Repurposed => "repurposed",
            Self::Both => "both",
        }
    }

    /// Whether the original track is active for this campaign.
    pub fn has_original(self) -> bool {
        matches!(self, Self::Original | Self::Both)
    }

    /// Whether the repurposed track is active for this campaign.
    pub fn has_repurposed(self) -> bool {
        matches!(self, Self::Repurposed | Self::Both)
    }
}

// ---------------------------------------------------------------------------
// Application / submission statuses
// ---------------------------------------------------------------------------

/// Status of a creator's join record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Active,
    Approved,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }
}

/// Review status of a content submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use CampaignStatus::*;

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            Draft,
            PendingApproval,
            Approved,
            Rejected,
            Active,
            Completed,
            Cancelled,
            Paused,
        ] {
            assert_eq!(CampaignStatus::from_str_db(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_from_str_invalid() {
        assert!(CampaignStatus::from_str_db("archived").is_err());
        assert!(CampaignStatus::from_str_db("").is_err());
    }

    #[test]
    fn submit_path_is_legal() {
        assert!(can_transition(Draft, PendingApproval));
        assert!(can_transition(PendingApproval, Approved));
        assert!(can_transition(Approved, Active));
        assert!(can_transition(Active, Completed));
    }

    #[test]
    fn rejection_and_resubmission_are_legal() {
        assert!(can_transition(PendingApproval, Rejected));
        assert!(can_transition(Rejected, PendingApproval));
    }

    #[test]
    fn approve_from_draft_is_illegal() {
        assert!(!can_transition(Draft, Approved));
        assert!(!can_transition(Draft, Active));
    }

    #[test]
    fn terminal_states_admit_nothing() {
        for from in [Completed, Cancelled] {
            for to in [
                Draft,
                PendingApproval,
                Approved,
                Rejected,
                Active,
                Completed,
                Cancelled,
                Paused,
            ] {
                assert!(!can_transition(from, to), "{from:?} -> {to:?} must be illegal");
            }
        }
    }

    #[test]
    fn cancel_is_legal_from_any_non_terminal() {
        for from in [Draft, PendingApproval, Approved, Rejected, Active, Paused] {
            assert!(can_transition(from, Cancelled));
        }
    }

    #[test]
    fn pause_resume_cycle() {
        assert!(can_transition(Active, Paused));
        assert!(can_transition(Paused, Active));
        assert!(!can_transition(Paused, Completed));
    }

    #[test]
    fn ensure_transition_names_both_sides() {
        let err = ensure_transition(Draft, Approved).unwrap_err();
        match err {
            CoreError::InvalidState {
                entity,
                current,
                requested,
            } => {
                assert_eq!(entity, "Campaign");
                assert_eq!(current, "draft");
                assert_eq!(requested, "approved");
            }
            other => panic!("expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn approval_policy_resolves_status() {
        assert_eq!(
            ApprovalPolicy::Approved.post_approval_status(),
            Approved
        );
        assert_eq!(ApprovalPolicy::Active.post_approval_status(), Active);
    }

    #[test]
    fn approval_policy_from_config() {
        assert_eq!(
            ApprovalPolicy::from_config("approved").unwrap(),
            ApprovalPolicy::Approved
        );
        assert_eq!(
            ApprovalPolicy::from_config("active").unwrap(),
            ApprovalPolicy::Active
        );
        assert!(ApprovalPolicy::from_config("live").is_err());
    }

    #[test]
    fn content_type_tracks() {
        assert!(ContentType::Original.has_original());
        assert!(!ContentType::Original.has_repurposed());
        assert!(ContentType::Repurposed.has_repurposed());
        assert!(!ContentType::Repurposed.has_original());
        assert!(ContentType::Both.has_original());
        assert!(ContentType::Both.has_repurposed());
    }

    #[test]
    fn content_type_roundtrip() {
        for ct in [ContentType::Original, ContentType::Repurposed, ContentType::Both] {
            assert_eq!(ContentType::from_str_db(ct.as_str()).unwrap(), ct);
        }
        assert!(ContentType::from_str_db("remix").is_err());
    }
}
