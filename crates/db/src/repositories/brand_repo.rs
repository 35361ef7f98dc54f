//! Repository for the `brands` table.

use sqlx::PgPool;

use clipcast_core::types::DbId;

use crate::models::brand::Brand;

/// Column list for `brands` queries.
const COLUMNS: &str = "id, user_id, name, created_at, updated_at";

/// Provides lookups for brand accounts.
pub struct BrandRepo;

impl BrandRepo {
    /// Find a brand by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve the brand a user acts for, if any. The request-context layer
    /// calls this once per request; handlers fail fast when it is absent.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE user_id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new brand for a user.
    pub async fn create(pool: &PgPool, user_id: DbId, name: &str) -> Result<Brand, sqlx::Error> {
        let query = format!(
            "INSERT INTO brands (user_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
