//! Campaign creation wizard: steps, completeness gating, and the draft
//! payload built at save/submit time (PRD-06).
//!
//! The wizard is a linear six-step flow with back-navigation. Each gated
//! step exposes a completeness predicate; forward navigation is blocked
//! until the current step's predicate passes. Date problems are reported
//! as field-keyed advisory errors and only block navigation through the
//! step predicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::campaign::ContentType;
use crate::error::CoreError;
use crate::requirements::{
    BudgetAllocation, CampaignBrief, CampaignRequirements, HashtagPair, PayoutRate,
};
use crate::targets::{
    calculate_view_targets, ViewTargets, MIN_BUDGET, MIN_RATE_ORIGINAL, MIN_RATE_REPURPOSED,
};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Total number of wizard steps.
pub const TOTAL_STEPS: u8 = 6;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

/// Minimum campaign duration in days.
pub const MIN_CAMPAIGN_DURATION_DAYS: i64 = 30;

/// The six steps of the campaign wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Details,
    ContentGuidelines,
    CreatorPreview,
    Budget,
    PaymentSummary,
    FinalReview,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 6] = [
        Self::Details,
        Self::ContentGuidelines,
        Self::CreatorPreview,
        Self::Budget,
        Self::PaymentSummary,
        Self::FinalReview,
    ];

    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Details),
            2 => Ok(Self::ContentGuidelines),
            3 => Ok(Self::CreatorPreview),
            4 => Ok(Self::Budget),
            5 => Ok(Self::PaymentSummary),
            6 => Ok(Self::FinalReview),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::ContentGuidelines => 2,
            Self::CreatorPreview => 3,
            Self::Budget => 4,
            Self::PaymentSummary => 5,
            Self::FinalReview => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Campaign Details",
            Self::ContentGuidelines => "Content & Guidelines",
            Self::CreatorPreview => "Creator Preview",
            Self::Budget => "Budget & Rates",
            Self::PaymentSummary => "Payment Summary",
            Self::FinalReview => "Final Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The accumulating state of the wizard. Converted to a persistence request
/// only at save/submit time via [`build_campaign_payload`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub title: String,
    pub platforms: Vec<String>,
    pub content_type: Option<ContentType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub brief_original: String,
    pub brief_repurposed: String,
    pub guidelines_original: Vec<String>,
    pub guidelines_repurposed: Vec<String>,
    pub hashtag_original: String,
    pub hashtag_repurposed: String,
    pub budget: String,
    pub rate_original: String,
    pub rate_repurposed: String,
    pub allocation: BudgetAllocation,
    pub payment_method: Option<String>,
    pub terms_accepted: bool,
}

/// A field-keyed advisory validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Hashtag rule
// ---------------------------------------------------------------------------

/// Disclosure-compliance check for a campaign hashtag: must start with `#`,
/// contain no whitespace, and contain "ad" in any casing.
pub fn is_valid_hashtag(tag: &str) -> bool {
    tag.starts_with('#')
        && !tag.chars().any(char::is_whitespace)
        && tag.to_lowercase().contains("ad")
}

// ---------------------------------------------------------------------------
// Step completeness
// ---------------------------------------------------------------------------

fn has_nonblank_entry(guidelines: &[String]) -> bool {
    guidelines.iter().any(|g| !g.trim().is_empty())
}

fn track_content_complete(brief: &str, guidelines: &[String], hashtag: &str) -> bool {
    !brief.trim().is_empty() && has_nonblank_entry(guidelines) && is_valid_hashtag(hashtag)
}

/// Whether a step's completeness predicate passes for the draft.
///
/// `CreatorPreview` is a read-only preview and always passes.
pub fn is_step_complete(step: WizardStep, draft: &CampaignDraft) -> bool {
    match step {
        WizardStep::Details => {
            !draft.title.trim().is_empty()
                && !draft.platforms.is_empty()
                && draft.content_type.is_some()
        }
        WizardStep::ContentGuidelines => {
            let Some(content_type) = draft.content_type else {
                return false;
            };
            let (Some(start), Some(end)) = (draft.start_date, draft.end_date) else {
                return false;
            };
            // The clock-free date invariants gate the step; "start date in
            // the past" stays advisory (validate_dates) so a draft saved
            // yesterday does not wedge the wizard.
            if end <= start || (end - start).num_days() < MIN_CAMPAIGN_DURATION_DAYS {
                return false;
            }
            let original_ok = !content_type.has_original()
                || track_content_complete(
                    &draft.brief_original,
                    &draft.guidelines_original,
                    &draft.hashtag_original,
                );
            let repurposed_ok = !content_type.has_repurposed()
                || track_content_complete(
                    &draft.brief_repurposed,
                    &draft.guidelines_repurposed,
                    &draft.hashtag_repurposed,
                );
            original_ok && repurposed_ok
        }
        WizardStep::CreatorPreview => true,
        WizardStep::Budget => {
            let Some(content_type) = draft.content_type else {
                return false;
            };
            let budget_ok = matches!(draft.budget.trim().parse::<f64>(), Ok(b) if b >= MIN_BUDGET);
            let original_ok = !content_type.has_original()
                || matches!(draft.rate_original.trim().parse::<f64>(), Ok(r) if r >= MIN_RATE_ORIGINAL);
            let repurposed_ok = !content_type.has_repurposed()
                || matches!(draft.rate_repurposed.trim().parse::<f64>(), Ok(r) if r >= MIN_RATE_REPURPOSED);
            budget_ok && original_ok && repurposed_ok
        }
        WizardStep::PaymentSummary => draft
            .payment_method
            .as_deref()
            .is_some_and(|m| !m.trim().is_empty()),
        WizardStep::FinalReview => draft.terms_accepted,
    }
}

/// The first gated step whose predicate fails, if any. `None` means the
/// draft is ready to submit for review.
pub fn first_incomplete_step(draft: &CampaignDraft) -> Option<WizardStep> {
    WizardStep::ALL
        .into_iter()
        .find(|&step| !is_step_complete(step, draft))
}

// ---------------------------------------------------------------------------
// Date validation
// ---------------------------------------------------------------------------

/// Advisory, field-keyed date checks: start not in the past, end after
/// start, duration at least [`MIN_CAMPAIGN_DURATION_DAYS`]. `today` is
/// passed in so the checks stay pure.
pub fn validate_dates(draft: &CampaignDraft, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(start) = draft.start_date {
        if start < today {
            errors.push(FieldError {
                field: "start_date",
                message: "Start date cannot be in the past".to_string(),
            });
        }
    }

    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if end <= start {
            errors.push(FieldError {
                field: "end_date",
                message: "End date must be after the start date".to_string(),
            });
        } else if (end - start).num_days() < MIN_CAMPAIGN_DURATION_DAYS {
            errors.push(FieldError {
                field: "end_date",
                message: format!(
                    "Campaign must run for at least {MIN_CAMPAIGN_DURATION_DAYS} days"
                ),
            });
        }
    }

    errors
}

// ---------------------------------------------------------------------------
// Legacy guideline partition
// ---------------------------------------------------------------------------

/// Reconstruct per-track guideline lists from a legacy flat list.
///
/// Single-track campaigns map the whole list onto their track. For `both`,
/// the list is split at its midpoint, first half to the original track.
/// Lossy, which is why new writes persist the two lists separately (see
/// [`CampaignRequirements`]).
pub fn partition_guidelines(
    flat: &[String],
    content_type: ContentType,
) -> (Vec<String>, Vec<String>) {
    match content_type {
        ContentType::Original => (flat.to_vec(), Vec::new()),
        ContentType::Repurposed => (Vec::new(), flat.to_vec()),
        ContentType::Both => {
            let mid = flat.len().div_ceil(2);
            (flat[..mid].to_vec(), flat[mid..].to_vec())
        }
    }
}

/// Rebuild a wizard draft from a persisted campaign's parts (edit mode).
///
/// Per-track guideline lists are used when the row has them; legacy rows
/// fall back to the midpoint split. Payment method and terms acceptance are
/// per-session and never restored from storage.
pub fn draft_for_edit(
    title: &str,
    content_type: ContentType,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    brief: &CampaignBrief,
    requirements: &CampaignRequirements,
) -> CampaignDraft {
    let (guidelines_original, guidelines_repurposed) = if requirements.has_per_track_guidelines() {
        (
            requirements.content_guidelines_original.clone(),
            requirements.content_guidelines_repurposed.clone(),
        )
    } else {
        partition_guidelines(&requirements.content_guidelines, content_type)
    };

    CampaignDraft {
        title: title.to_string(),
        platforms: requirements.platforms.clone(),
        content_type: Some(content_type),
        start_date,
        end_date,
        brief_original: brief.original.clone().unwrap_or_default(),
        brief_repurposed: brief.repurposed.clone().unwrap_or_default(),
        guidelines_original,
        guidelines_repurposed,
        hashtag_original: requirements.hashtags.original.clone(),
        hashtag_repurposed: requirements.hashtags.repurposed.clone(),
        budget: requirements.total_budget.clone(),
        rate_original: requirements.payout_rate.original.clone(),
        rate_repurposed: requirements.payout_rate.repurposed.clone(),
        allocation: requirements.budget_allocation,
        payment_method: None,
        terms_accepted: false,
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Everything the store needs to persist a campaign, derived from a draft.
#[derive(Debug, Clone)]
pub struct CampaignPayload {
    pub title: String,
    pub content_type: ContentType,
    pub budget: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub brief: CampaignBrief,
    pub requirements: CampaignRequirements,
    pub view_targets: ViewTargets,
}

/// Convert a draft into its persistence payload, computing view targets
/// immediately before the save (both Save-as-Draft and Submit-for-Review
/// go through here).
///
/// A content type must have been chosen; the targets are undefined
/// without it and the column is NOT NULL. For `both`-type
/// campaigns the allocation pair is validated; single-track campaigns are
/// normalized to the degenerate 100/0 split.
pub fn build_campaign_payload(draft: &CampaignDraft) -> Result<CampaignPayload, CoreError> {
    let content_type = draft.content_type.ok_or_else(|| {
        CoreError::Validation("A content type must be selected before saving".to_string())
    })?;

    let allocation = match content_type {
        ContentType::Original => BudgetAllocation::all_original(),
        ContentType::Repurposed => BudgetAllocation::all_repurposed(),
        ContentType::Both => {
            draft.allocation.validate()?;
            draft.allocation
        }
    };

    let view_targets = calculate_view_targets(
        &draft.budget,
        &draft.rate_original,
        &draft.rate_repurposed,
        content_type,
        &allocation,
    );

    let brief = CampaignBrief {
        original: content_type
            .has_original()
            .then(|| draft.brief_original.clone()),
        repurposed: content_type
            .has_repurposed()
            .then(|| draft.brief_repurposed.clone()),
    };

    let mut content_guidelines = draft.guidelines_original.clone();
    content_guidelines.extend(draft.guidelines_repurposed.iter().cloned());

    let requirements = CampaignRequirements {
        platforms: draft.platforms.clone(),
        content_guidelines,
        content_guidelines_original: draft.guidelines_original.clone(),
        content_guidelines_repurposed: draft.guidelines_repurposed.clone(),
        payout_rate: PayoutRate {
            original: draft.rate_original.clone(),
            repurposed: draft.rate_repurposed.clone(),
        },
        hashtags: HashtagPair {
            original: draft.hashtag_original.clone(),
            repurposed: draft.hashtag_repurposed.clone(),
        },
        budget_allocation: allocation,
        min_views_for_payout: "0".to_string(),
        total_budget: draft.budget.clone(),
    };

    Ok(CampaignPayload {
        title: draft.title.clone(),
        content_type,
        budget: draft.budget.trim().parse::<f64>().unwrap_or(0.0).max(0.0),
        start_date: draft.start_date,
        end_date: draft.end_date,
        brief,
        requirements,
        view_targets,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
