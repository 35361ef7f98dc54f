//! Route definitions for the admin review workflow (PRD-09).
//!
//! ```text
//! GET    /campaigns/pending           review queue
//! POST   /campaigns/{id}/approve      approve campaign
//! POST   /campaigns/{id}/reject       reject campaign with reason
//! POST   /campaigns/{id}/activate     approved → active
//! POST   /submissions/{id}/approve    approve submission
//! POST   /submissions/{id}/reject     reject submission
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campaigns/pending", get(admin::list_pending_campaigns))
        .route("/campaigns/{id}/approve", post(admin::approve_campaign))
        .route("/campaigns/{id}/reject", post(admin::reject_campaign))
        .route("/campaigns/{id}/activate", post(admin::activate_campaign))
        .route("/submissions/{id}/approve", post(admin::approve_submission))
        .route("/submissions/{id}/reject", post(admin::reject_submission))
}
