//! Campaign application (creator join record) models (PRD-11).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use clipcast_core::types::{DbId, Timestamp};

/// A row from the `campaign_applications` table. At most one exists per
/// (campaign, creator) pair, enforced by
/// `uq_campaign_applications_campaign_creator`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignApplication {
    pub id: DbId,
    pub campaign_id: DbId,
    pub creator_id: DbId,
    pub status: String,
    pub platforms: Vec<String>,
    pub joined_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a join.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub campaign_id: DbId,
    pub creator_id: DbId,
    pub platforms: Vec<String>,
}

/// Request body for the join endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinCampaignRequest {
    pub platforms: Vec<String>,
}

/// Result of an idempotent join: the application plus whether this call
/// created it.
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcome {
    #[serde(flatten)]
    pub application: CampaignApplication,
    pub already_joined: bool,
}
