//! Authoritative view-target calculation (PRD-08).
//!
//! Computes the integer view targets persisted on a campaign at save/submit
//! time. Distinct from [`crate::estimation`] in two ways: an unset or
//! unparseable rate falls back to the track default (500 original / 250
//! repurposed) instead of zero, and for `both`-type campaigns the total is
//! always the sum of the two track targets, never an independent figure.
//! Deterministic, so what the brand was shown at submit time is exactly
//! what the store holds.

use serde::{Deserialize, Serialize};

use crate::campaign::ContentType;
use crate::estimation::parse_positive;
use crate::requirements::BudgetAllocation;

// ---------------------------------------------------------------------------
// Pricing constants
// ---------------------------------------------------------------------------

/// Minimum total budget accepted at submission.
pub const MIN_BUDGET: f64 = 1000.0;

/// Minimum payout rate for the original track (per 1M views).
pub const MIN_RATE_ORIGINAL: f64 = 500.0;

/// Minimum payout rate for the repurposed track (per 1M views).
pub const MIN_RATE_REPURPOSED: f64 = 250.0;

/// Rate substituted when the original track's rate is unset or unparseable.
pub const DEFAULT_RATE_ORIGINAL: f64 = 500.0;

/// Rate substituted when the repurposed track's rate is unset or unparseable.
pub const DEFAULT_RATE_REPURPOSED: f64 = 250.0;

/// Payout rates are priced per this many delivered views.
pub const VIEWS_PER_RATE_UNIT: f64 = 1_000_000.0;

// ---------------------------------------------------------------------------
// View targets
// ---------------------------------------------------------------------------

/// Persisted view targets, computed once at submission and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTargets {
    pub total: i64,
    pub original: i64,
    pub repurposed: i64,
}

impl ViewTargets {
    pub const ZERO: Self = Self {
        total: 0,
        original: 0,
        repurposed: 0,
    };
}

fn rate_or_default(raw: &str, default: f64) -> f64 {
    parse_positive(raw).unwrap_or(default)
}

fn track_target(budget: f64, rate: f64) -> i64 {
    (budget / rate * VIEWS_PER_RATE_UNIT).round() as i64
}

/// Compute the view targets to persist on a campaign.
///
/// For `both`-type campaigns the caller must supply an allocation pair
/// summing to 100; the wizard keeps the pair synchronized via a single
/// slider, and [`BudgetAllocation::validate`] enforces it at the API edge.
/// An unparseable budget produces the zero targets (drafts may be saved
/// before the budget step is complete).
pub fn calculate_view_targets(
    budget: &str,
    rate_original: &str,
    rate_repurposed: &str,
    content_type: ContentType,
    allocation: &BudgetAllocation,
) -> ViewTargets {
    let Some(budget) = parse_positive(budget) else {
        return ViewTargets::ZERO;
    };

    let rate_original = rate_or_default(rate_original, DEFAULT_RATE_ORIGINAL);
    let rate_repurposed = rate_or_default(rate_repurposed, DEFAULT_RATE_REPURPOSED);

    match content_type {
        ContentType::Original => {
            let original = track_target(budget, rate_original);
            ViewTargets {
                total: original,
                original,
                repurposed: 0,
            }
        }
        ContentType::Repurposed => {
            let repurposed = track_target(budget, rate_repurposed);
            ViewTargets {
                total: repurposed,
                original: 0,
                repurposed,
            }
        }
        ContentType::Both => {
            let original_budget = budget * allocation.original / 100.0;
            let repurposed_budget = budget * allocation.repurposed / 100.0;
            let original = track_target(original_budget, rate_original);
            let repurposed = track_target(repurposed_budget, rate_repurposed);
            ViewTargets {
                total: original + repurposed,
                original,
                repurposed,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
