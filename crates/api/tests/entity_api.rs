//! HTTP-level integration tests for the user, character, battle, fitness,
//! and leaderboard endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// User CRUD and wallet lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/user",
        serde_json::json!({
            "username": "runner_42",
            "email": "runner_42@example.com",
            "wallet_address": "0xabc123",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "runner_42");
    assert_eq!(json["wallet_address"], "0xabc123");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_with_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/user",
        serde_json::json!({
            "username": "runner_42",
            "email": "not-an-email",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_returns_409(pool: PgPool) {
    common::create_user(&pool, "taken").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/user",
        serde_json::json!({
            "username": "taken",
            "email": "other@example.com",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_user_by_id(pool: PgPool) {
    let user_id = common::create_user(&pool, "lookup_me").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/user/{user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "lookup_me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/user/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_user_by_wallet_address(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/user",
        serde_json::json!({
            "username": "wallet_user",
            "email": "wallet_user@example.com",
            "wallet_address": "0xdeadbeef",
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/user/wallet/0xdeadbeef").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "wallet_user");

    // Unknown wallet addresses are a 404, not an empty body.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/user/wallet/0xunknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_user(pool: PgPool) {
    let user_id = common::create_user(&pool, "before").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/user/{user_id}"),
        serde_json::json!({"username": "after"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "after");
    // Untouched fields survive a partial update.
    assert_eq!(json["email"], "before@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wallet_address_cannot_be_cleared(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/user",
        serde_json::json!({
            "username": "linked",
            "email": "linked@example.com",
            "wallet_address": "0xlinked",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user_id = body_json(response).await["id"].as_i64().unwrap();

    // A wallet link is permanent: patching it to null leaves it in place.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/user/{user_id}"),
        serde_json::json!({"wallet_address": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["wallet_address"], "0xlinked");

    // It can still be replaced with a new address.
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/user/{user_id}"),
        serde_json::json!({"wallet_address": "0xrelinked"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["wallet_address"], "0xrelinked");
}

// ---------------------------------------------------------------------------
// Character creation and partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_character_with_defaults(pool: PgPool) {
    let user_id = common::create_user(&pool, "hero_owner").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/character",
        serde_json::json!({"user_id": user_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Athlos");
    assert_eq!(json["level"], 1);
    assert_eq!(json["xp"], 0);
    assert_eq!(json["evolution_stage"], 1);
    assert_eq!(json["strength"], 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_character_for_same_user_returns_409(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "one_hero").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/character",
        serde_json::json!({"user_id": user_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_character_by_user(pool: PgPool) {
    let (user_id, character_id) = common::create_user_with_character(&pool, "fetch_hero").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/character/{user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64().unwrap(), character_id);
    assert_eq!(json["user_id"].as_i64().unwrap(), user_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_partial_update_preserves_other_fields(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "patch_hero").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/character/{user_id}"),
        serde_json::json!({"xp": 500, "level": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["xp"], 500);
    assert_eq!(json["level"], 3);
    assert_eq!(json["name"], "Athlos");
    assert_eq!(json["strength"], 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_character_for_user_without_one_returns_404(pool: PgPool) {
    let user_id = common::create_user(&pool, "no_hero").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/character/{user_id}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Fitness sample listing with optional date filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fitness_samples_listed_and_filtered_by_date(pool: PgPool) {
    let user_id = common::create_user(&pool, "sampler").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/fitness",
        serde_json::json!({
            "user_id": user_id,
            "steps": 8000,
            "calories": 450,
            "heart_rate": 72,
            "active_minutes": 40,
            "distance": "5.20",
            "workout_type": "running",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Unfiltered list contains the sample.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/fitness/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["steps"], 8000);

    // A date far in the past matches nothing.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/fitness/{user_id}?date=2000-01-01")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_steps_rejected(pool: PgPool) {
    let user_id = common::create_user(&pool, "negative").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/fitness",
        serde_json::json!({
            "user_id": user_id,
            "steps": -100,
            "calories": 450,
            "heart_rate": 72,
            "active_minutes": 40,
            "distance": "5.20",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Simulated device sync
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sync_fitness_generates_plausible_sample(pool: PgPool) {
    let user_id = common::create_user(&pool, "synced").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/sync-fitness/{user_id}"),
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    let steps = json["steps"].as_i64().unwrap();
    assert!((6000..11000).contains(&steps), "steps out of range: {steps}");
    let calories = json["calories"].as_i64().unwrap();
    assert!((400..700).contains(&calories));
    assert!(json["workout_type"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sync_fitness_for_unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/sync-fitness/999999", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Battle mini-game CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_battle_lifecycle(pool: PgPool) {
    let user_id = common::create_user(&pool, "brawler").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/battle",
        serde_json::json!({
            "user_id": user_id,
            "enemy_name": "Shadow Goblin",
            "enemy_level": 1,
            "player_health": 100,
            "enemy_health": 80,
            "board_state": {"orbs": []},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let battle_id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "active");

    // The active battle is retrievable by user.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/battle/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64().unwrap(), battle_id);

    // Finish the battle.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/battle/{battle_id}"),
        serde_json::json!({"enemy_health": 0, "status": "won"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "won");

    // No active battle remains.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/battle/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_empty_and_ordered(pool: PgPool) {
    // Empty board returns an empty array, not an error.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Seed two entries out of order and verify rank ordering.
    let alice = common::create_user(&pool, "alice").await;
    let bob = common::create_user(&pool, "bob").await;
    sqlx::query(
        "INSERT INTO leaderboard (user_id, username, level, xp, currency_earned, rank)
         VALUES ($1, 'bob', 2, 300, 0.5, 2), ($2, 'alice', 5, 900, 2.4, 1)",
    )
    .bind(bob)
    .bind(alice)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/leaderboard?limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["username"], "alice");
    assert_eq!(entries[1]["username"], "bob");
}
