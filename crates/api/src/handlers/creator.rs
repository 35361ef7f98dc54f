//! Handlers for creator participation: joins and content submissions
//! (PRD-11, PRD-12).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use clipcast_core::campaign::CampaignStatus;
use clipcast_core::error::CoreError;
use clipcast_core::types::DbId;
use clipcast_db::models::application::{CreateApplication, JoinCampaignRequest, JoinOutcome};
use clipcast_db::models::submission::{CreateSubmission, SubmitContentRequest};
use clipcast_db::repositories::{ApplicationRepo, CampaignRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_owner, fetch_campaign};
use crate::middleware::auth::{AuthUser, RequestContext};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/campaigns/{id}/join
///
/// Idempotent: a repeated join returns the existing application with 200
/// instead of erroring; only a first join answers 201. The campaign's
/// `creators_joined` metric is recomputed from a fresh count either way.
pub async fn join_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<JoinCampaignRequest>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("creator")?;

    let platforms: Vec<String> = input
        .platforms
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if platforms.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one platform is required to join".into(),
        )));
    }

    let campaign = fetch_campaign(&state, id).await?;
    if campaign.status()? != CampaignStatus::Active {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Campaign is not open for joining (currently '{}')",
            campaign.status
        ))));
    }

    let (application, created) = ApplicationRepo::upsert_or_fetch(
        &state.pool,
        &CreateApplication {
            campaign_id: id,
            creator_id: ctx.user_id,
            platforms,
        },
    )
    .await?;

    let creators_joined = CampaignRepo::refresh_creators_joined(&state.pool, id).await?;

    tracing::info!(
        campaign_id = id,
        creator_id = ctx.user_id,
        already_joined = !created,
        creators_joined,
        "Creator joined campaign"
    );

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(DataResponse {
            data: JoinOutcome {
                application,
                already_joined: !created,
            },
        }),
    ))
}

/// GET /api/v1/applications
///
/// The caller's join records, most recent first.
pub async fn list_my_applications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("creator")?;
    let applications = ApplicationRepo::list_by_creator(&state.pool, ctx.user_id).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// POST /api/v1/campaigns/{id}/submissions
///
/// Record a posted piece of content against a joined campaign. Inserted as
/// `pending`; approved-view metrics move only on admin review.
pub async fn submit_content(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitContentRequest>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    ctx.require_role("creator")?;

    if input.platform.trim().is_empty() || input.post_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Platform and post URL are required".into(),
        )));
    }

    let campaign = fetch_campaign(&state, id).await?;
    if campaign.status()? != CampaignStatus::Active {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Campaign is not accepting submissions (currently '{}')",
            campaign.status
        ))));
    }

    let application = ApplicationRepo::find_by_pair(&state.pool, id, ctx.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::Validation(
            "Join the campaign before submitting content".into(),
        )))?;

    let submission = SubmissionRepo::create(
        &state.pool,
        &CreateSubmission {
            campaign_id: id,
            creator_id: ctx.user_id,
            application_id: application.id,
            platform: input.platform.trim().to_string(),
            post_url: input.post_url.trim().to_string(),
            views: input.views,
            engagement: input.engagement,
            earned: input.earned,
        },
    )
    .await?;

    // Campaign metrics move only when an admin approves the submission.
    tracing::info!(
        campaign_id = id,
        creator_id = ctx.user_id,
        submission_id = submission.id,
        "Content submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/campaigns/{id}/submissions
///
/// List a campaign's submissions (owner or admin only).
pub async fn list_campaign_submissions(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::resolve(&state, &auth).await?;
    let campaign = fetch_campaign(&state, id).await?;
    ensure_owner(&ctx, &campaign)?;

    let submissions = SubmissionRepo::list_by_campaign(&state.pool, id).await?;
    Ok(Json(DataResponse { data: submissions }))
}
