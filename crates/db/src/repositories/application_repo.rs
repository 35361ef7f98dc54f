//! Repository for the `campaign_applications` table (PRD-11).
//!
//! Join idempotency lives here: the (campaign_id, creator_id) unique
//! constraint makes a duplicate insert a no-op, and the fetch fallback
//! returns the existing row so a repeated join is a success, not an error.

use sqlx::PgPool;

use clipcast_core::campaign::ApplicationStatus;
use clipcast_core::types::DbId;

use crate::models::application::{CampaignApplication, CreateApplication};

/// Column list for `campaign_applications` queries.
const COLUMNS: &str = "\
    id, campaign_id, creator_id, status, platforms, joined_at, created_at, updated_at";

/// Provides CRUD operations for campaign applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a join record, or fetch the existing one for this
    /// (campaign, creator) pair. Returns the application and whether this
    /// call created it.
    ///
    /// `ON CONFLICT DO NOTHING` keeps two concurrent joins from the same
    /// creator from producing two rows; the loser of the race falls
    /// through to the fetch.
    pub async fn upsert_or_fetch(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<(CampaignApplication, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO campaign_applications (campaign_id, creator_id, status, platforms) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (campaign_id, creator_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, CampaignApplication>(&query)
            .bind(input.campaign_id)
            .bind(input.creator_id)
            .bind(ApplicationStatus::Active.as_str())
            .bind(&input.platforms)
            .fetch_optional(pool)
            .await?;

        if let Some(application) = inserted {
            return Ok((application, true));
        }

        let existing = Self::find_by_pair(pool, input.campaign_id, input.creator_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok((existing, false))
    }

    /// Find the application for a (campaign, creator) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        campaign_id: DbId,
        creator_id: DbId,
    ) -> Result<Option<CampaignApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_applications \
             WHERE campaign_id = $1 AND creator_id = $2"
        );
        sqlx::query_as::<_, CampaignApplication>(&query)
            .bind(campaign_id)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// List a creator's applications, most recent first.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<CampaignApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_applications \
             WHERE creator_id = $1 ORDER BY joined_at DESC"
        );
        sqlx::query_as::<_, CampaignApplication>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    /// List a campaign's applications, oldest join first.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<CampaignApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_applications \
             WHERE campaign_id = $1 ORDER BY joined_at ASC"
        );
        sqlx::query_as::<_, CampaignApplication>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }

    /// Count the campaign's distinct joined creators (active or approved).
    pub async fn count_joined(pool: &PgPool, campaign_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM campaign_applications \
             WHERE campaign_id = $1 AND status IN ('active', 'approved')",
        )
        .bind(campaign_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
