//! Content submission models (PRD-12).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use clipcast_core::types::{DbId, Timestamp};

/// A row from the `content_submissions` table: a posted piece of content
/// claimed against a campaign, pending admin review.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentSubmission {
    pub id: DbId,
    pub campaign_id: DbId,
    pub creator_id: DbId,
    pub application_id: DbId,
    pub platform: String,
    pub post_url: String,
    pub status: String,
    pub views: i64,
    pub engagement: i64,
    pub earned: f64,
    pub submitted_at: Timestamp,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new submission. Always inserted as `pending`;
/// campaign metrics move only on admin approval.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub campaign_id: DbId,
    pub creator_id: DbId,
    pub application_id: DbId,
    pub platform: String,
    pub post_url: String,
    pub views: i64,
    pub engagement: i64,
    pub earned: f64,
}

/// Request body for the submission endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitContentRequest {
    pub platform: String,
    pub post_url: String,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub engagement: i64,
    #[serde(default)]
    pub earned: f64,
}
