//! Route definitions for the campaign surface (PRD-04, PRD-06, PRD-11).
//!
//! ```text
//! GET    /estimate                live view estimate
//! POST   /                        create draft
//! GET    /                        list caller brand's campaigns
//! GET    /browse                  active campaigns
//! GET    /{id}                    get campaign
//! PATCH  /{id}                    update draft/rejected campaign
//! GET    /{id}/draft              wizard draft for edit mode
//! POST   /{id}/submit             submit for approval
//! POST   /{id}/complete           mark completed
//! POST   /{id}/pause              pause an active campaign
//! POST   /{id}/resume             resume a paused campaign
//! POST   /{id}/cancel             cancel
//! POST   /{id}/join               creator join (idempotent)
//! POST   /{id}/submissions        submit content
//! GET    /{id}/submissions        list submissions
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{campaign, creator, estimation};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/estimate", get(estimation::estimate))
        .route(
            "/",
            post(campaign::create_campaign).get(campaign::list_my_campaigns),
        )
        .route("/browse", get(campaign::browse_active_campaigns))
        .route(
            "/{id}",
            get(campaign::get_campaign).patch(campaign::update_campaign),
        )
        .route("/{id}/draft", get(campaign::get_campaign_draft))
        .route("/{id}/submit", post(campaign::submit_campaign))
        .route("/{id}/complete", post(campaign::complete_campaign))
        .route("/{id}/pause", post(campaign::pause_campaign))
        .route("/{id}/resume", post(campaign::resume_campaign))
        .route("/{id}/cancel", post(campaign::cancel_campaign))
        .route("/{id}/join", post(creator::join_campaign))
        .route(
            "/{id}/submissions",
            post(creator::submit_content).get(creator::list_campaign_submissions),
        )
}
