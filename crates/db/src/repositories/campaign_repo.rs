//! Repository for the `campaigns` table (PRD-04, PRD-09).
//!
//! Every lifecycle transition is a guarded conditional UPDATE (`WHERE
//! status = ...`), so a transition that lost a race returns no row instead
//! of overwriting a concurrent writer. Callers combine this with the pure
//! transition rules in `clipcast_core::campaign` to report whether the
//! failure was a missing row or an illegal state.

use sqlx::types::Json;
use sqlx::PgPool;

use clipcast_core::campaign::CampaignStatus;
use clipcast_core::rejection::RejectionReason;
use clipcast_core::requirements::CampaignMetrics;
use clipcast_core::targets::ViewTargets;
use clipcast_core::types::DbId;
use clipcast_core::wizard::partition_guidelines;

use crate::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, brand_id, title, status, content_type, budget, spent, \
    start_date, end_date, brief, requirements, \
    total_view_target, original_view_target, repurposed_view_target, \
    metrics, rejection_reason, reviewed_by, reviewed_at, \
    created_at, updated_at";

/// Statuses an application join counts toward `creators_joined`.
const JOINED_STATUSES: &str = "'active', 'approved'";

/// Provides CRUD and lifecycle operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign. Always lands in `draft`, whatever the caller's
    /// role; submission for review is a separate transition.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns \
                (brand_id, title, status, content_type, budget, spent, \
                 start_date, end_date, brief, requirements, \
                 total_view_target, original_view_target, repurposed_view_target, metrics) \
             VALUES ($1, $2, $3, $4, $5, 0, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(input.brand_id)
            .bind(&input.title)
            .bind(CampaignStatus::Draft.as_str())
            .bind(input.content_type.as_str())
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(Json(&input.brief))
            .bind(Json(&input.requirements))
            .bind(input.total_view_target)
            .bind(input.original_view_target)
            .bind(input.repurposed_view_target)
            .bind(Json(CampaignMetrics::default()))
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its ID, backfilling per-track guideline lists
    /// for rows that predate them.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(campaign.map(backfill_guidelines))
    }

    /// List a brand's campaigns, most recently created first.
    pub async fn list_by_brand(pool: &PgPool, brand_id: DbId) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns WHERE brand_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }

    /// List campaigns in a given status. Review queues order oldest-first
    /// so long-waiting campaigns surface at the top.
    pub async fn list_by_status(
        pool: &PgPool,
        status: CampaignStatus,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns WHERE status = $1 ORDER BY updated_at ASC"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await
    }

    /// Update a campaign. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always bumped. Status changes only when explicitly
    /// present in the patch.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET \
                title = COALESCE($2, title), \
                content_type = COALESCE($3, content_type), \
                budget = COALESCE($4, budget), \
                start_date = COALESCE($5, start_date), \
                end_date = COALESCE($6, end_date), \
                brief = COALESCE($7, brief), \
                requirements = COALESCE($8, requirements), \
                total_view_target = COALESCE($9, total_view_target), \
                original_view_target = COALESCE($10, original_view_target), \
                repurposed_view_target = COALESCE($11, repurposed_view_target), \
                status = COALESCE($12, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.content_type.map(|ct| ct.as_str()))
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.brief.as_ref().map(Json))
            .bind(input.requirements.as_ref().map(Json))
            .bind(input.total_view_target)
            .bind(input.original_view_target)
            .bind(input.repurposed_view_target)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    // -- Lifecycle transitions --------------------------------------------

    /// draft | rejected → pending_approval, persisting freshly computed
    /// view targets and clearing any previous rejection.
    pub async fn submit_for_approval(
        pool: &PgPool,
        id: DbId,
        targets: &ViewTargets,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET \
                status = $2, \
                total_view_target = $3, \
                original_view_target = $4, \
                repurposed_view_target = $5, \
                rejection_reason = NULL, \
                updated_at = NOW() \
             WHERE id = $1 AND status IN ($6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(CampaignStatus::PendingApproval.as_str())
            .bind(targets.total)
            .bind(targets.original)
            .bind(targets.repurposed)
            .bind(CampaignStatus::Draft.as_str())
            .bind(CampaignStatus::Rejected.as_str())
            .fetch_optional(pool)
            .await
    }

    /// pending_approval → the configured post-approval status, recording
    /// the reviewing admin.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        admin_id: DbId,
        post_status: CampaignStatus,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET \
                status = $2, reviewed_by = $3, reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(post_status.as_str())
            .bind(admin_id)
            .bind(CampaignStatus::PendingApproval.as_str())
            .fetch_optional(pool)
            .await
    }

    /// pending_approval → rejected, persisting the tagged reason structure.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        admin_id: DbId,
        reason: &RejectionReason,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET \
                status = $2, rejection_reason = $3, \
                reviewed_by = $4, reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(CampaignStatus::Rejected.as_str())
            .bind(Json(reason))
            .bind(admin_id)
            .bind(CampaignStatus::PendingApproval.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Single-status guarded transition shared by activate, pause, resume,
    /// and complete.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        from: CampaignStatus,
        to: CampaignStatus,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(to.as_str())
            .bind(from.as_str())
            .fetch_optional(pool)
            .await
    }

    /// any non-terminal → cancelled.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status NOT IN ($3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(CampaignStatus::Cancelled.as_str())
            .bind(CampaignStatus::Completed.as_str())
            .bind(CampaignStatus::Cancelled.as_str())
            .fetch_optional(pool)
            .await
    }

    // -- Metrics -----------------------------------------------------------

    /// Recompute `creators_joined` from a fresh count of joined
    /// applications. Never a blind increment, so a retried or concurrent
    /// join self-heals the counter. Returns the new count.
    pub async fn refresh_creators_joined(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET \
                metrics = jsonb_set(metrics, '{{creators_joined}}', to_jsonb(( \
                    SELECT COUNT(*) FROM campaign_applications \
                    WHERE campaign_id = $1 AND status IN ({JOINED_STATUSES}) \
                )), true), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING (metrics->>'creators_joined')::BIGINT"
        );
        let (count,): (i64,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;
        Ok(count)
    }

    /// Recompute the submission-derived counters (posts submitted/approved,
    /// views, engagement) from the submissions table.
    pub async fn refresh_submission_metrics(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaigns SET \
                metrics = metrics || jsonb_build_object( \
                    'posts_submitted', (SELECT COUNT(*) FROM content_submissions \
                        WHERE campaign_id = $1), \
                    'posts_approved', (SELECT COUNT(*) FROM content_submissions \
                        WHERE campaign_id = $1 AND status = 'approved'), \
                    'views', (SELECT COALESCE(SUM(views), 0) FROM content_submissions \
                        WHERE campaign_id = $1 AND status = 'approved'), \
                    'engagement', (SELECT COALESCE(SUM(engagement), 0) FROM content_submissions \
                        WHERE campaign_id = $1 AND status = 'approved') \
                ), \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}

/// Read-path shim for rows written before per-track guideline lists
/// existed: reconstruct them from the flat list via the midpoint split.
fn backfill_guidelines(mut campaign: Campaign) -> Campaign {
    let requirements = &mut campaign.requirements.0;
    if !requirements.has_per_track_guidelines() && !requirements.content_guidelines.is_empty() {
        if let Ok(content_type) = clipcast_core::campaign::ContentType::from_str_db(&campaign.content_type)
        {
            let (original, repurposed) =
                partition_guidelines(&requirements.content_guidelines, content_type);
            requirements.content_guidelines_original = original;
            requirements.content_guidelines_repurposed = repurposed;
            tracing::warn!(
                campaign_id = campaign.id,
                "Backfilled per-track guidelines from legacy flat list"
            );
        }
    }
    campaign
}
