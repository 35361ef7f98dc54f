//! Live view-estimate endpoint backing the wizard preview (PRD-08).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use clipcast_core::campaign::ContentType;
use clipcast_core::estimation::estimate_views;
use clipcast_core::requirements::BudgetAllocation;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn default_half() -> f64 {
    50.0
}

/// Query parameters for the estimate endpoint, mirroring the wizard's
/// budget-step inputs.
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub rate_original: String,
    #[serde(default)]
    pub rate_repurposed: String,
    pub content_type: String,
    #[serde(default = "default_half")]
    pub allocation_original: f64,
    #[serde(default = "default_half")]
    pub allocation_repurposed: f64,
}

/// GET /api/v1/campaigns/estimate
///
/// Pure preview; invoked on every keystroke in the wizard, so invalid
/// numbers produce zeros rather than errors. Only an unknown content type
/// is a 400.
pub async fn estimate(
    _auth: AuthUser,
    State(_state): State<AppState>,
    Query(query): Query<EstimateQuery>,
) -> AppResult<impl IntoResponse> {
    let content_type = ContentType::from_str_db(&query.content_type).map_err(AppError::Core)?;
    let allocation = BudgetAllocation {
        original: query.allocation_original,
        repurposed: query.allocation_repurposed,
    };

    let estimate = estimate_views(
        &query.budget,
        &query.rate_original,
        &query.rate_repurposed,
        content_type,
        &allocation,
    );

    Ok(Json(DataResponse { data: estimate }))
}
