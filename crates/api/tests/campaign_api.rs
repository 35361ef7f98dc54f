//! HTTP-level integration tests for the campaign lifecycle (PRD-04, PRD-09,
//! PRD-11).
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, complete_draft_json, get, post_json, seed_brand, seed_user,
    token_for,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_campaign_returns_draft_with_targets(pool: PgPool) {
    let (user_id, _) = seed_brand(&pool).await;
    let token = token_for(user_id, "brand");

    let response = post_json(
        build_test_app(pool),
        "/api/v1/campaigns",
        &token,
        complete_draft_json(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let campaign = &json["data"];
    assert_eq!(campaign["status"], "draft");
    // 70/30 split of 10000 at 500/250 per 1M views.
    assert_eq!(campaign["original_view_target"], 14_000_000_i64);
    assert_eq!(campaign["repurposed_view_target"], 12_000_000_i64);
    assert_eq!(campaign["total_view_target"], 26_000_000_i64);
    assert_eq!(campaign["requirements"]["payoutRate"]["original"], "500");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/campaigns",
        "",
        complete_draft_json(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creator_cannot_create_campaigns(pool: PgPool) {
    let creator_id = seed_user(&pool, "creator@example.com", "creator").await;
    let token = token_for(creator_id, "creator");

    let response = post_json(
        build_test_app(pool),
        "/api/v1/campaigns",
        &token,
        complete_draft_json(),
    )
    .await;

    // No brand is linked to the creator account.
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Drive a fresh campaign to `pending_approval`, returning its id.
async fn create_and_submit(pool: &PgPool, brand_token: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/campaigns",
        brand_token,
        complete_draft_json(),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/campaigns/{id}/submit"),
        brand_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_lifecycle_draft_to_active(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let admin = seed_user(&pool, "admin@example.com", "admin").await;
    let brand_token = token_for(brand_user, "brand");
    let admin_token = token_for(admin, "admin");

    let id = create_and_submit(&pool, &brand_token).await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/campaigns/{id}/approve"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "approved");

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/admin/campaigns/{id}/activate"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approving_a_draft_is_an_invalid_state(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let admin = seed_user(&pool, "admin@example.com", "admin").await;
    let brand_token = token_for(brand_user, "brand");
    let admin_token = token_for(admin, "admin");

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/campaigns",
        &brand_token,
        complete_draft_json(),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/campaigns/{id}/approve"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");

    // Status is untouched.
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}"),
        &brand_token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_then_resubmit_roundtrip(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let admin = seed_user(&pool, "admin@example.com", "admin").await;
    let brand_token = token_for(brand_user, "brand");
    let admin_token = token_for(admin, "admin");

    let id = create_and_submit(&pool, &brand_token).await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/campaigns/{id}/reject"),
        &admin_token,
        serde_json::json!({
            "reasons": ["budget too low"],
            "recommendations": ["raise the budget"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(json["data"]["rejection_reason"]["reasons"][0], "budget too low");

    // The brand edits and resubmits from `rejected`.
    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}/submit"),
        &brand_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending_approval");
    assert!(json["data"]["rejection_reason"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_without_reason_is_a_validation_error(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let admin = seed_user(&pool, "admin@example.com", "admin").await;
    let brand_token = token_for(brand_user, "brand");
    let admin_token = token_for(admin, "admin");

    let id = create_and_submit(&pool, &brand_token).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/admin/campaigns/{id}/reject"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Drive a campaign to `active` and return (id, brand_token, admin_token).
async fn seed_active_campaign(pool: &PgPool) -> (i64, String, String) {
    let (brand_user, _) = seed_brand(pool).await;
    let admin = seed_user(pool, "admin@example.com", "admin").await;
    let brand_token = token_for(brand_user, "brand");
    let admin_token = token_for(admin, "admin");

    let id = create_and_submit(pool, &brand_token).await;
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/campaigns/{id}/approve"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/campaigns/{id}/activate"),
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    (id, brand_token, admin_token)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn join_twice_is_idempotent(pool: PgPool) {
    let (id, brand_token, _) = seed_active_campaign(&pool).await;
    let creator = seed_user(&pool, "creator@example.com", "creator").await;
    let creator_token = token_for(creator, "creator");

    let body = serde_json::json!({ "platforms": ["TikTok"] });

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/campaigns/{id}/join"),
        &creator_token,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;
    assert_eq!(first["data"]["already_joined"], false);

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/campaigns/{id}/join"),
        &creator_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["data"]["already_joined"], true);
    assert_eq!(second["data"]["id"], first["data"]["id"]);

    // The metric is the distinct-creator count, not 2.
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}"),
        &brand_token,
    )
    .await;
    let campaign = body_json(response).await;
    assert_eq!(campaign["data"]["metrics"]["creators_joined"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn joining_without_platforms_is_rejected(pool: PgPool) {
    let (id, _, _) = seed_active_campaign(&pool).await;
    let creator = seed_user(&pool, "creator@example.com", "creator").await;
    let creator_token = token_for(creator, "creator");

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}/join"),
        &creator_token,
        serde_json::json!({ "platforms": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn joining_a_pending_campaign_conflicts(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let brand_token = token_for(brand_user, "brand");
    let id = create_and_submit(&pool, &brand_token).await;

    let creator = seed_user(&pool, "creator@example.com", "creator").await;
    let creator_token = token_for(creator, "creator");

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}/join"),
        &creator_token,
        serde_json::json!({ "platforms": ["TikTok"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estimate_endpoint_matches_expected_split(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let token = token_for(brand_user, "brand");

    let response = get(
        build_test_app(pool),
        "/api/v1/campaigns/estimate?budget=10000&rate_original=500&rate_repurposed=250\
         &content_type=both&allocation_original=70&allocation_repurposed=30",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["original_views"], 14_000_000_i64);
    assert_eq!(json["data"]["repurposed_views"], 12_000_000_i64);
    assert_eq!(json["data"]["total_views"], 26_000_000_i64);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_draft_endpoint_restores_wizard_state(pool: PgPool) {
    let (brand_user, _) = seed_brand(&pool).await;
    let token = token_for(brand_user, "brand");

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/campaigns",
        &token,
        complete_draft_json(),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/campaigns/{id}/draft"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let draft = body_json(response).await;
    assert_eq!(draft["data"]["title"], "Summer Launch");
    assert_eq!(draft["data"]["guidelines_original"][0], "No watermarks");
    assert_eq!(draft["data"]["guidelines_repurposed"][0], "Keep clips under 60s");
    // Session-scoped fields are never restored.
    assert!(draft["data"]["payment_method"].is_null());
    assert_eq!(draft["data"]["terms_accepted"], false);
}
