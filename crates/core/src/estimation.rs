//! Live view estimation for the campaign wizard (PRD-08).
//!
//! Converts a budget and per-track payout rates into a non-persisted preview
//! of how many views the budget buys. Invoked on every keystroke, so it never
//! raises: unparseable input simply contributes zero. The persisted figures
//! come from [`crate::targets`], which substitutes track defaults instead of
//! zero for missing rates.

use serde::Serialize;

use crate::campaign::ContentType;
use crate::requirements::BudgetAllocation;
use crate::targets::VIEWS_PER_RATE_UNIT;

/// A live, non-persisted view preview. All figures rounded to whole views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewEstimate {
    pub original_views: i64,
    pub repurposed_views: i64,
    pub total_views: i64,
}

impl ViewEstimate {
    /// The all-zero estimate returned for unusable input.
    pub const ZERO: Self = Self {
        original_views: 0,
        repurposed_views: 0,
        total_views: 0,
    };
}

/// Parse a decimal string, accepting only finite positive values.
pub(crate) fn parse_positive(s: &str) -> Option<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

/// Views a budget slice buys at a given rate, zero when the rate is unusable.
fn track_views(budget: f64, rate: Option<f64>) -> f64 {
    match rate {
        Some(r) => budget / r * VIEWS_PER_RATE_UNIT,
        None => 0.0,
    }
}

/// Estimate the views a budget will buy, for UI feedback during editing.
///
/// An invalid or non-positive budget yields the zero estimate. An invalid
/// rate zeroes that track's contribution rather than erroring; this is a
/// preview, not a validation gate.
pub fn estimate_views(
    budget: &str,
    rate_original: &str,
    rate_repurposed: &str,
    content_type: ContentType,
    allocation: &BudgetAllocation,
) -> ViewEstimate {
    let Some(budget) = parse_positive(budget) else {
        return ViewEstimate::ZERO;
    };

    let rate_original = parse_positive(rate_original);
    let rate_repurposed = parse_positive(rate_repurposed);

    let (original, repurposed) = match content_type {
        ContentType::Original => (track_views(budget, rate_original), 0.0),
        ContentType::Repurposed => (0.0, track_views(budget, rate_repurposed)),
        ContentType::Both => {
            let original_budget = budget * allocation.original / 100.0;
            let repurposed_budget = budget * allocation.repurposed / 100.0;
            (
                track_views(original_budget, rate_original),
                track_views(repurposed_budget, rate_repurposed),
            )
        }
    };

    let original_views = original.round() as i64;
    let repurposed_views = repurposed.round() as i64;
    ViewEstimate {
        original_views,
        repurposed_views,
        total_views: original_views + repurposed_views,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
