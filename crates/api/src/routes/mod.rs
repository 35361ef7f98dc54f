pub mod admin;
pub mod applications;
pub mod campaign;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns/estimate                     live view estimate (GET)
/// /campaigns                              create draft, list mine (POST, GET)
/// /campaigns/browse                       active campaigns for creators (GET)
/// /campaigns/{id}                         get, update (GET, PATCH)
/// /campaigns/{id}/draft                   wizard draft for edit mode (GET)
/// /campaigns/{id}/submit                  submit for approval (POST)
/// /campaigns/{id}/complete                mark completed (POST)
/// /campaigns/{id}/cancel                  cancel (POST)
/// /campaigns/{id}/join                    creator join, idempotent (POST)
/// /campaigns/{id}/submissions             submit content, list (POST, GET)
///
/// /applications                           caller's join records (GET)
///
/// /admin/campaigns/pending                review queue (GET)
/// /admin/campaigns/{id}/approve           approve (POST)
/// /admin/campaigns/{id}/reject            reject with reason (POST)
/// /admin/campaigns/{id}/activate          approved → active (POST)
/// /admin/submissions/{id}/approve         approve submission (POST)
/// /admin/submissions/{id}/reject          reject submission (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Brand + creator campaign surface.
        .nest("/campaigns", campaign::router())
        // Creator join records.
        .nest("/applications", applications::router())
        // Admin review workflow (PRD-09).
        .nest("/admin", admin::router())
}
