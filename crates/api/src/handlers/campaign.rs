//! Handlers for brand-facing campaign management (PRD-04, PRD-06).
//!
//! The wizard posts its whole draft on save; the payload builder in
//! `clipcast_core::wizard` computes the view targets immediately before
//! every persist, so what the brand was shown is what the store holds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use clipcast_core::campaign::{ensure_transition, CampaignStatus, ContentType};
use clipcast_core::error::CoreError;
use clipcast_core::targets::{
    calculate_view_targets, MIN_BUDGET, MIN_RATE_ORIGINAL, MIN_RATE_REPURPOSED,
};
use clipcast_core::types::DbId;
use clipcast_core::wizard::{build_campaign_payload, draft_for_edit, CampaignDraft};
use clipcast_db::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};
use clipcast_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_owner, fetch_campaign};
use crate::middleware::auth::{AuthUser, RequestContext};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/campaigns
///
/// Persist a wizard draft as a new campaign. Always lands in `draft`.
pub async fn create_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(draft): Json<CampaignDraft>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let brand_id = ctx.require_brand()?;

    let payload = build_campaign_payload(&draft).map_err(AppError::Core)?;
    let input = CreateCampaign {
        brand_id,
        title: payload.title,
        content_type: payload.content_type,
        budget: payload.budget,
        start_date: payload.start_date,
        end_date: payload.end_date,
        brief: payload.brief,
        requirements: payload.requirements,
        total_view_target: payload.view_targets.total,
        original_view_target: payload.view_targets.original,
        repurposed_view_target: payload.view_targets.repurposed,
    };

    let campaign = CampaignRepo::create(&state.pool, &input).await?;

    tracing::info!(
        brand_id,
        campaign_id = campaign.id,
        total_view_target = campaign.total_view_target,
        "Campaign draft created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: campaign })))
}

/// GET /api/v1/campaigns
///
/// List the caller brand's campaigns, newest first.
pub async fn list_my_campaigns(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let brand_id = ctx.require_brand()?;
    let campaigns = CampaignRepo::list_by_brand(&state.pool, brand_id).await?;
    Ok(Json(DataResponse { data: campaigns }))
}

/// GET /api/v1/campaigns/browse
///
/// Creator-facing discovery: all currently active campaigns.
pub async fn browse_active_campaigns(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let campaigns = CampaignRepo::list_by_status(&state.pool, CampaignStatus::Active).await?;
    Ok(Json(DataResponse { data: campaigns }))
}

/// GET /api/v1/campaigns/{id}
///
/// Owners and admins see any status; other callers only active campaigns.
pub async fn get_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;

    let visible = ctx.is_admin()
        || ctx.brand_id == Some(campaign.brand_id)
        || campaign.status()? == CampaignStatus::Active;
    if !visible {
        return Err(AppError::Core(CoreError::Forbidden(
            "This campaign is not visible to you".into(),
        )));
    }

    Ok(Json(DataResponse { data: campaign }))
}

/// GET /api/v1/campaigns/{id}/draft
///
/// Rebuild the wizard draft from a persisted campaign for edit mode.
pub async fn get_campaign_draft(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    let draft = draft_for_edit(
        &campaign.title,
        campaign.content_type()?,
        campaign.start_date,
        campaign.end_date,
        &campaign.brief.0,
        &campaign.requirements.0,
    );
    Ok(Json(DataResponse { data: draft }))
}

/// PATCH /api/v1/campaigns/{id}
///
/// Re-save the wizard draft over an editable campaign. Only `draft` and
/// `rejected` campaigns may be edited; status is never changed here.
pub async fn update_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(draft): Json<CampaignDraft>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    if !campaign.status()?.is_editable() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Only draft or rejected campaigns can be edited (currently '{}')",
            campaign.status
        ))));
    }

    let payload = build_campaign_payload(&draft).map_err(AppError::Core)?;
    let patch = UpdateCampaign {
        title: Some(payload.title),
        content_type: Some(payload.content_type),
        budget: Some(payload.budget),
        start_date: payload.start_date,
        end_date: payload.end_date,
        brief: Some(payload.brief),
        requirements: Some(payload.requirements),
        total_view_target: Some(payload.view_targets.total),
        original_view_target: Some(payload.view_targets.original),
        repurposed_view_target: Some(payload.view_targets.repurposed),
        status: None,
    };

    let updated = CampaignRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// Submission-time numeric gates: budget and active-track rate minimums.
fn validate_submission_minimums(campaign: &Campaign) -> Result<(), CoreError> {
    if campaign.budget < MIN_BUDGET {
        return Err(CoreError::Validation(format!(
            "Budget must be at least {MIN_BUDGET}"
        )));
    }

    let content_type = campaign.content_type()?;
    let rates = &campaign.requirements.0.payout_rate;
    if content_type.has_original() {
        let rate: f64 = rates.original.trim().parse().unwrap_or(0.0);
        if rate < MIN_RATE_ORIGINAL {
            return Err(CoreError::Validation(format!(
                "Original track rate must be at least {MIN_RATE_ORIGINAL}"
            )));
        }
    }
    if content_type.has_repurposed() {
        let rate: f64 = rates.repurposed.trim().parse().unwrap_or(0.0);
        if rate < MIN_RATE_REPURPOSED {
            return Err(CoreError::Validation(format!(
                "Repurposed track rate must be at least {MIN_RATE_REPURPOSED}"
            )));
        }
    }
    Ok(())
}

/// POST /api/v1/campaigns/{id}/submit
///
/// draft | rejected → pending_approval. View targets are recomputed from
/// the stored budget and rates immediately before the transition.
pub async fn submit_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    ensure_transition(campaign.status()?, CampaignStatus::PendingApproval)?;
    validate_submission_minimums(&campaign)?;

    let content_type: ContentType = campaign.content_type()?;
    let requirements = &campaign.requirements.0;
    let targets = calculate_view_targets(
        &requirements.total_budget,
        &requirements.payout_rate.original,
        &requirements.payout_rate.repurposed,
        content_type,
        &requirements.budget_allocation,
    );

    let submitted = CampaignRepo::submit_for_approval(&state.pool, id, &targets)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Campaign was modified concurrently".into(),
        )))?;

    tracing::info!(
        campaign_id = id,
        brand_id = campaign.brand_id,
        total_view_target = targets.total,
        "Campaign submitted for approval"
    );

    Ok(Json(DataResponse { data: submitted }))
}

/// POST /api/v1/campaigns/{id}/complete
///
/// active → completed. Terminal; set manually once the run ends.
pub async fn complete_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    ensure_transition(campaign.status()?, CampaignStatus::Completed)?;

    let completed =
        CampaignRepo::transition(&state.pool, id, CampaignStatus::Active, CampaignStatus::Completed)
            .await?
            .ok_or(AppError::Core(CoreError::Conflict(
                "Campaign was modified concurrently".into(),
            )))?;

    tracing::info!(campaign_id = id, "Campaign completed");
    Ok(Json(DataResponse { data: completed }))
}

/// POST /api/v1/campaigns/{id}/pause
///
/// active → paused.
pub async fn pause_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    ensure_transition(campaign.status()?, CampaignStatus::Paused)?;

    let paused =
        CampaignRepo::transition(&state.pool, id, CampaignStatus::Active, CampaignStatus::Paused)
            .await?
            .ok_or(AppError::Core(CoreError::Conflict(
                "Campaign was modified concurrently".into(),
            )))?;

    tracing::info!(campaign_id = id, "Campaign paused");
    Ok(Json(DataResponse { data: paused }))
}

/// POST /api/v1/campaigns/{id}/resume
///
/// paused → active.
pub async fn resume_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    ensure_transition(campaign.status()?, CampaignStatus::Active)?;

    let resumed =
        CampaignRepo::transition(&state.pool, id, CampaignStatus::Paused, CampaignStatus::Active)
            .await?
            .ok_or(AppError::Core(CoreError::Conflict(
                "Campaign was modified concurrently".into(),
            )))?;

    tracing::info!(campaign_id = id, "Campaign resumed");
    Ok(Json(DataResponse { data: resumed }))
}

/// POST /api/v1/campaigns/{id}/cancel
///
/// any non-terminal → cancelled.
pub async fn cancel_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    ensure_transition(campaign.status()?, CampaignStatus::Cancelled)?;

    let cancelled = CampaignRepo::cancel(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Campaign was modified concurrently".into(),
        )))?;

    tracing::info!(campaign_id = id, "Campaign cancelled");
    Ok(Json(DataResponse { data: cancelled }))
}
