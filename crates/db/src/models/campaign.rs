//! Campaign row and request DTOs (PRD-04).
//!
//! The serialized shape of [`Campaign`] is the wire contract consumed by the
//! web client; the nested JSONB payloads keep their exact field names via
//! the core shape types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use clipcast_core::campaign::{CampaignStatus, ContentType};
use clipcast_core::error::CoreError;
use clipcast_core::rejection::RejectionReason;
use clipcast_core::requirements::{CampaignBrief, CampaignMetrics, CampaignRequirements};
use clipcast_core::types::{DbId, Timestamp};

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub brand_id: DbId,
    pub title: String,
    pub status: String,
    pub content_type: String,
    pub budget: f64,
    pub spent: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub brief: Json<CampaignBrief>,
    pub requirements: Json<CampaignRequirements>,
    pub total_view_target: i64,
    pub original_view_target: i64,
    pub repurposed_view_target: i64,
    pub metrics: Json<CampaignMetrics>,
    pub rejection_reason: Option<Json<RejectionReason>>,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Campaign {
    /// The row's status as the typed enum.
    pub fn status(&self) -> Result<CampaignStatus, CoreError> {
        CampaignStatus::from_str_db(&self.status)
    }

    /// The row's content type as the typed enum.
    pub fn content_type(&self) -> Result<ContentType, CoreError> {
        ContentType::from_str_db(&self.content_type)
    }
}

/// Insert payload for a new campaign. Status is always `draft` on insert,
/// regardless of the caller; submission is a separate transition.
#[derive(Debug, Clone)]
pub struct CreateCampaign {
    pub brand_id: DbId,
    pub title: String,
    pub content_type: ContentType,
    pub budget: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub brief: CampaignBrief,
    pub requirements: CampaignRequirements,
    pub total_view_target: i64,
    pub original_view_target: i64,
    pub repurposed_view_target: i64,
}

/// Patch payload for campaign updates. Only `Some` fields are applied;
/// `updated_at` is always bumped. Status never changes here unless
/// explicitly present in the patch.
#[derive(Debug, Clone, Default)]
pub struct UpdateCampaign {
    pub title: Option<String>,
    pub content_type: Option<ContentType>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub brief: Option<CampaignBrief>,
    pub requirements: Option<CampaignRequirements>,
    pub total_view_target: Option<i64>,
    pub original_view_target: Option<i64>,
    pub repurposed_view_target: Option<i64>,
    pub status: Option<CampaignStatus>,
}

/// Admin reject payload: structured reasons, or a freeform string that is
/// normalized into the structure before persisting.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectCampaignRequest {
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Legacy freeform field, accepted for older clients.
    pub reason: Option<String>,
}

impl RejectCampaignRequest {
    /// Collapse the request into the persisted tagged structure.
    pub fn into_reason(self) -> RejectionReason {
        if !self.reasons.is_empty() || !self.recommendations.is_empty() {
            return RejectionReason {
                reasons: self.reasons,
                recommendations: self.recommendations,
            };
        }
        match self.reason {
            Some(raw) => RejectionReason::from_legacy(&raw),
            None => RejectionReason::default(),
        }
    }
}
