//! Route definitions for creator join records (PRD-11).

use axum::routing::get;
use axum::Router;

use crate::handlers::creator;
use crate::state::AppState;

/// ```text
/// GET    /                          caller's applications
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(creator::list_my_applications))
}
