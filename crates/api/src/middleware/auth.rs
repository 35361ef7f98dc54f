//! JWT-based authentication extractor and per-request caller context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clipcast_core::error::CoreError;
use clipcast_core::types::DbId;
use clipcast_db::repositories::BrandRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (`"brand"`, `"creator"`, or `"admin"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// The resolved caller identity passed into every lifecycle operation.
///
/// Brand resolution happens here, once per request; handlers never reach
/// for ambient state, and there is no auto-provisioning of missing brand
/// rows -- an unresolved brand fails fast.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: DbId,
    pub role: String,
    pub brand_id: Option<DbId>,
}

impl RequestContext {
    /// Build the context for an authenticated caller, resolving their brand
    /// when they act as one.
    pub async fn resolve(state: &AppState, auth: &AuthUser) -> Result<Self, AppError> {
        let brand_id = if auth.role == "brand" {
            BrandRepo::find_by_user_id(&state.pool, auth.user_id)
                .await?
                .map(|brand| brand.id)
        } else {
            None
        };

        Ok(Self {
            user_id: auth.user_id,
            role: auth.role.clone(),
            brand_id,
        })
    }

    /// The caller's brand id, or Forbidden when none is linked.
    pub fn require_brand(&self) -> Result<DbId, AppError> {
        self.brand_id.ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No brand is linked to this account".into(),
            ))
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Require the caller to hold a role.
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "This action requires the '{role}' role"
            ))))
        }
    }
}
