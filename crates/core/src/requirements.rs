//! Persisted campaign requirement and metric shapes (PRD-04).
//!
//! The field names and nesting here are the wire contract shared with the
//! web client and with existing rows; the serde renames pin them exactly.
//! Every field that older rows may lack carries an explicit default so a
//! missing value cannot occur for new writes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Budget allocation
// ---------------------------------------------------------------------------

/// The percentage split a campaign allocation must sum to.
pub const ALLOCATION_SUM: f64 = 100.0;

/// Percentage split of the budget between the two tracks. Only meaningful
/// for `both`-type campaigns; single-track campaigns carry the degenerate
/// 100/0 or 0/100 pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub original: f64,
    pub repurposed: f64,
}

impl BudgetAllocation {
    /// The whole budget on the original track.
    pub fn all_original() -> Self {
        Self {
            original: 100.0,
            repurposed: 0.0,
        }
    }

    /// The whole budget on the repurposed track.
    pub fn all_repurposed() -> Self {
        Self {
            original: 0.0,
            repurposed: 100.0,
        }
    }

    /// Validate the pair: both halves in [0, 100] and summing to 100.
    pub fn validate(&self) -> Result<(), CoreError> {
        let in_range =
            (0.0..=ALLOCATION_SUM).contains(&self.original)
                && (0.0..=ALLOCATION_SUM).contains(&self.repurposed);
        if !in_range || (self.original + self.repurposed - ALLOCATION_SUM).abs() > 1e-9 {
            return Err(CoreError::Validation(format!(
                "Budget allocation must sum to 100, got {} + {}",
                self.original, self.repurposed
            )));
        }
        Ok(())
    }
}

impl Default for BudgetAllocation {
    /// Even split, applied when older rows lack the field.
    fn default() -> Self {
        Self {
            original: 50.0,
            repurposed: 50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire sub-shapes
// ---------------------------------------------------------------------------

/// Per-track campaign brief text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBrief {
    pub original: Option<String>,
    pub repurposed: Option<String>,
}

/// Per-track payout rates, kept as strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRate {
    pub original: String,
    pub repurposed: String,
}

/// Per-track disclosure hashtags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagPair {
    pub original: String,
    pub repurposed: String,
}

fn default_zero_string() -> String {
    "0".to_string()
}

/// The `requirements` JSONB payload on a campaign row.
///
/// `contentGuidelines` remains the flat combined list older readers expect;
/// `contentGuidelinesOriginal` / `contentGuidelinesRepurposed` are the
/// per-track lists new writes populate so the lossy midpoint reconstruction
/// (see [`crate::wizard::partition_guidelines`]) is only ever needed for
/// legacy rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignRequirements {
    #[serde(default)]
    pub platforms: Vec<String>,

    #[serde(rename = "contentGuidelines", default)]
    pub content_guidelines: Vec<String>,

    #[serde(rename = "contentGuidelinesOriginal", default)]
    pub content_guidelines_original: Vec<String>,

    #[serde(rename = "contentGuidelinesRepurposed", default)]
    pub content_guidelines_repurposed: Vec<String>,

    #[serde(rename = "payoutRate", default)]
    pub payout_rate: PayoutRate,

    #[serde(default)]
    pub hashtags: HashtagPair,

    #[serde(default)]
    pub budget_allocation: BudgetAllocation,

    #[serde(rename = "minViewsForPayout", default = "default_zero_string")]
    pub min_views_for_payout: String,

    #[serde(rename = "totalBudget", default = "default_zero_string")]
    pub total_budget: String,
}

impl CampaignRequirements {
    /// Whether this row carries per-track guideline lists. Legacy rows only
    /// have the flat `contentGuidelines` list and need the midpoint shim.
    pub fn has_per_track_guidelines(&self) -> bool {
        !self.content_guidelines_original.is_empty()
            || !self.content_guidelines_repurposed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Campaign metrics
// ---------------------------------------------------------------------------

/// Mutable campaign counters, updated by joins and submission approvals.
/// Never touched by the allocation engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub engagement: i64,
    #[serde(default)]
    pub creators_joined: i64,
    #[serde(default)]
    pub posts_submitted: i64,
    #[serde(default)]
    pub posts_approved: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
