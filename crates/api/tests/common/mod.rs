//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the same
//! middleware stack (CORS, request ID, timeout, panic recovery) that
//! production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use clipcast_api::auth::jwt::{generate_access_token, JwtConfig};
use clipcast_api::config::ServerConfig;
use clipcast_api::routes;
use clipcast_api::state::AppState;
use clipcast_core::campaign::ApprovalPolicy;
use clipcast_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and the default
/// (two-step) approval policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        approval_policy: ApprovalPolicy::Approved,
        jwt: test_jwt_config(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Mint a bearer token for a seeded user.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_jwt_config()).unwrap()
}

/// Insert a user row and return its id.
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO users (email, display_name, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind("Test User")
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Insert a brand user plus their brand row; returns (user_id, brand_id).
pub async fn seed_brand(pool: &PgPool) -> (DbId, DbId) {
    let user_id = seed_user(pool, "brand@example.com", "brand").await;
    let (brand_id,): (DbId,) =
        sqlx::query_as("INSERT INTO brands (user_id, name) VALUES ($1, $2) RETURNING id")
            .bind(user_id)
            .bind("Acme Drinks")
            .fetch_one(pool)
            .await
            .unwrap();
    (user_id, brand_id)
}

/// A complete wizard draft for a both-type campaign, as the client posts it.
pub fn complete_draft_json() -> serde_json::Value {
    serde_json::json!({
        "title": "Summer Launch",
        "platforms": ["TikTok", "Instagram"],
        "content_type": "both",
        "start_date": "2030-06-01",
        "end_date": "2030-07-15",
        "brief_original": "Show the product in daily use",
        "brief_repurposed": "Re-cut your best performing clips",
        "guidelines_original": ["No watermarks"],
        "guidelines_repurposed": ["Keep clips under 60s"],
        "hashtag_original": "#SummerAd",
        "hashtag_repurposed": "#SummerAd",
        "budget": "10000",
        "rate_original": "500",
        "rate_repurposed": "250",
        "allocation": { "original": 70.0, "repurposed": 30.0 },
        "payment_method": "card",
        "terms_accepted": true
    })
}

// -- Request helpers --------------------------------------------------------

pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PATCH)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
