//! Brand account model.

use serde::Serialize;
use sqlx::FromRow;

use clipcast_core::types::{DbId, Timestamp};

/// A row from the `brands` table. Exactly one per advertiser user; the
/// request-context layer resolves the caller's brand through `user_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
