pub mod admin;
pub mod campaign;
pub mod creator;
pub mod estimation;

use clipcast_core::error::CoreError;
use clipcast_core::types::DbId;
use clipcast_db::models::campaign::Campaign;
use clipcast_db::repositories::CampaignRepo;

use crate::error::AppError;
use crate::middleware::auth::RequestContext;
use crate::state::AppState;

/// Fetch a campaign or surface a typed NotFound.
pub(crate) async fn fetch_campaign(state: &AppState, id: DbId) -> Result<Campaign, AppError> {
    CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))
}

/// Require the caller to own the campaign (admins pass).
pub(crate) fn ensure_owner(ctx: &RequestContext, campaign: &Campaign) -> Result<(), AppError> {
    if ctx.is_admin() || ctx.brand_id == Some(campaign.brand_id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You do not own this campaign".into(),
        )))
    }
}
