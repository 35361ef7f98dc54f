//! Handlers for the admin review workflow (PRD-09).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use clipcast_core::campaign::{ensure_transition, CampaignStatus, SubmissionStatus};
use clipcast_core::error::CoreError;
use clipcast_core::types::DbId;
use clipcast_db::models::campaign::RejectCampaignRequest;
use clipcast_db::models::submission::ContentSubmission;
use clipcast_db::repositories::{CampaignRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::fetch_campaign;
use crate::middleware::auth::{AuthUser, RequestContext};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/campaigns/pending
///
/// The review queue, longest-waiting first.
pub async fn list_pending_campaigns(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;
    let campaigns =
        CampaignRepo::list_by_status(&state.pool, CampaignStatus::PendingApproval).await?;
    Ok(Json(DataResponse { data: campaigns }))
}

/// POST /api/v1/admin/campaigns/{id}/approve
///
/// pending_approval → the configured post-approval status.
pub async fn approve_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;

    let campaign = fetch_campaign(&state, id).await?;
    let post_status = state.config.approval_policy.post_approval_status();
    ensure_transition(campaign.status()?, post_status)?;

    let approved = CampaignRepo::approve(&state.pool, id, ctx.user_id, post_status)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Campaign was modified concurrently".into(),
        )))?;

    tracing::info!(
        campaign_id = id,
        admin_id = ctx.user_id,
        status = approved.status.as_str(),
        "Campaign approved"
    );

    Ok(Json(DataResponse { data: approved }))
}

/// POST /api/v1/admin/campaigns/{id}/reject
///
/// pending_approval → rejected, with a structured reason the brand-facing
/// UI renders before the brand edits and resubmits.
pub async fn reject_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RejectCampaignRequest>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;

    let reason = input.into_reason();
    if reason.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A rejection reason is required".into(),
        )));
    }

    let campaign = fetch_campaign(&state, id).await?;
    ensure_transition(campaign.status()?, CampaignStatus::Rejected)?;

    let rejected = CampaignRepo::reject(&state.pool, id, ctx.user_id, &reason)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Campaign was modified concurrently".into(),
        )))?;

    tracing::info!(
        campaign_id = id,
        admin_id = ctx.user_id,
        reasons = reason.reasons.len(),
        "Campaign rejected"
    );

    Ok(Json(DataResponse { data: rejected }))
}

/// POST /api/v1/admin/campaigns/{id}/activate
///
/// approved → active. Only needed when the approval policy keeps the two
/// steps separate.
pub async fn activate_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;

    let campaign = fetch_campaign(&state, id).await?;
    ensure_transition(campaign.status()?, CampaignStatus::Active)?;

    let active = CampaignRepo::transition(
        &state.pool,
        id,
        CampaignStatus::Approved,
        CampaignStatus::Active,
    )
    .await?
    .ok_or(AppError::Core(CoreError::Conflict(
        "Campaign was modified concurrently".into(),
    )))?;

    tracing::info!(campaign_id = id, admin_id = ctx.user_id, "Campaign activated");
    Ok(Json(DataResponse { data: active }))
}

/// Shared review flow for submission approve/reject.
async fn review_submission(
    state: &AppState,
    ctx: &RequestContext,
    id: DbId,
    decision: SubmissionStatus,
) -> AppResult<Json<DataResponse<ContentSubmission>>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    let reviewed = SubmissionRepo::review(&state.pool, id, ctx.user_id, decision)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(format!(
            "Submission has already been reviewed (currently '{}')",
            submission.status
        ))))?;

    // Approved views/engagement roll up into the campaign counters.
    CampaignRepo::refresh_submission_metrics(&state.pool, reviewed.campaign_id).await?;

    tracing::info!(
        submission_id = id,
        campaign_id = reviewed.campaign_id,
        admin_id = ctx.user_id,
        decision = decision.as_str(),
        "Submission reviewed"
    );

    Ok(Json(DataResponse { data: reviewed }))
}

/// POST /api/v1/admin/submissions/{id}/approve
pub async fn approve_submission(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;
    review_submission(&state, &ctx, id, SubmissionStatus::Approved).await
}

/// POST /api/v1/admin/submissions/{id}/reject
pub async fn reject_submission(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("admin")?;
    review_submission(&state, &ctx, id, SubmissionStatus::Rejected).await
}
