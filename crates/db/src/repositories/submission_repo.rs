//! Repository for the `content_submissions` table (PRD-12).

use sqlx::PgPool;

use clipcast_core::campaign::SubmissionStatus;
use clipcast_core::types::DbId;

use crate::models::submission::{ContentSubmission, CreateSubmission};

/// Column list for `content_submissions` queries.
const COLUMNS: &str = "\
    id, campaign_id, creator_id, application_id, platform, post_url, status, \
    views, engagement, earned, submitted_at, reviewed_by, reviewed_at, \
    created_at, updated_at";

/// Provides CRUD operations for content submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new pending submission.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<ContentSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_submissions \
                (campaign_id, creator_id, application_id, platform, post_url, \
                 status, views, engagement, earned) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSubmission>(&query)
            .bind(input.campaign_id)
            .bind(input.creator_id)
            .bind(input.application_id)
            .bind(&input.platform)
            .bind(&input.post_url)
            .bind(SubmissionStatus::Pending.as_str())
            .bind(input.views)
            .bind(input.engagement)
            .bind(input.earned)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContentSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_submissions WHERE id = $1");
        sqlx::query_as::<_, ContentSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a campaign's submissions, newest first.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<ContentSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_submissions \
             WHERE campaign_id = $1 ORDER BY submitted_at DESC"
        );
        sqlx::query_as::<_, ContentSubmission>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }

    /// List a creator's submissions, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<ContentSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_submissions \
             WHERE creator_id = $1 ORDER BY submitted_at DESC"
        );
        sqlx::query_as::<_, ContentSubmission>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    /// Record an admin review decision on a pending submission. Returns
    /// `None` when the submission is missing or already reviewed.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        reviewer_id: DbId,
        decision: SubmissionStatus,
    ) -> Result<Option<ContentSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE content_submissions SET \
                status = $2, reviewed_by = $3, reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSubmission>(&query)
            .bind(id)
            .bind(decision.as_str())
            .bind(reviewer_id)
            .bind(SubmissionStatus::Pending.as_str())
            .fetch_optional(pool)
            .await
    }
}
