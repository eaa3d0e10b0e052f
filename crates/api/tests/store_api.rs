//! Integration tests for the store: catalog listing, purchases, stat
//! boosts with clamping, and balance checks.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use rust_decimal::Decimal;
use sqlx::PgPool;

fn decimal_field(json: &serde_json::Value, field: &str) -> Decimal {
    json[field].as_str().unwrap().parse::<Decimal>().unwrap()
}

/// Look up a seeded catalog item id by name.
async fn item_id_by_name(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let items = body_json(get(app, "/api/store/items").await).await;
    items
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == name)
        .unwrap_or_else(|| panic!("item {name} not in catalog"))["id"]
        .as_i64()
        .unwrap()
}

/// Set a character's balance (and optionally one stat) directly.
async fn set_character(pool: &PgPool, user_id: i64, body: serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/api/character/{user_id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_lists_all_seeded_items(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/store/items").await;
    assert_eq!(response.status(), StatusCode::OK);

    let items = body_json(response).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 8);

    // Two tiers per stat.
    for stat in ["strength", "stamina", "agility", "health"] {
        let count = items.iter().filter(|i| i["stat_type"] == stat).count();
        assert_eq!(count, 2, "expected two {stat} items");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_items_are_hidden(pool: PgPool) {
    sqlx::query("UPDATE store_items SET is_active = FALSE WHERE name = 'Iron Weights'")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let items = body_json(get(app, "/api/store/items").await).await;
    assert_eq!(items.as_array().unwrap().len(), 7);
}

// ---------------------------------------------------------------------------
// Purchases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchase_debits_balance_and_boosts_stat(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "shopper").await;
    set_character(&pool, user_id, serde_json::json!({"balance": "1.00", "strength": 50})).await;
    let item_id = item_id_by_name(&pool, "Iron Weights").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // +5 strength for 0.01, quantity defaults to 1.
    assert_eq!(json["purchase"]["quantity"], 1);
    assert_eq!(decimal_field(&json["purchase"], "total_cost"), Decimal::new(1, 2));
    assert_eq!(json["character"]["strength"], 55);
    assert_eq!(
        decimal_field(&json["character"], "balance"),
        Decimal::new(99, 2)
    );

    // The purchase shows up in the history.
    let app = common::build_test_app(pool);
    let history = body_json(get(app, &format!("/api/store/purchases/{user_id}")).await).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchase_with_quantity_multiplies_cost_and_boost(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "bulk_shopper").await;
    set_character(&pool, user_id, serde_json::json!({"balance": "1.00", "agility": 40})).await;
    let item_id = item_id_by_name(&pool, "Swift Gloves").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id, "quantity": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["character"]["agility"], 55);
    assert_eq!(decimal_field(&json["purchase"], "total_cost"), Decimal::new(3, 2));
    assert_eq!(
        decimal_field(&json["character"], "balance"),
        Decimal::new(97, 2)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stat_boost_clamps_at_one_hundred(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "maxed_shopper").await;
    set_character(&pool, user_id, serde_json::json!({"balance": "1.00", "health": 98})).await;
    let item_id = item_id_by_name(&pool, "Phoenix Feather").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // 98 + 10 clamps at the cap; the full price is still paid.
    assert_eq!(json["character"]["health"], 100);
    assert_eq!(
        decimal_field(&json["character"], "balance"),
        Decimal::new(98, 2)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insufficient_balance_rejects_and_mutates_nothing(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "broke_shopper").await;
    set_character(&pool, user_id, serde_json::json!({"balance": "0.005", "stamina": 50})).await;
    let item_id = item_id_by_name(&pool, "Endurance Elixir").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Balance, stat, and history are untouched.
    let app = common::build_test_app(pool.clone());
    let character = body_json(get(app, &format!("/api/character/{user_id}")).await).await;
    assert_eq!(character["stamina"], 50);
    assert_eq!(decimal_field(&character, "balance"), Decimal::new(5, 3));

    let app = common::build_test_app(pool);
    let history = body_json(get(app, &format!("/api/store/purchases/{user_id}")).await).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_quantity_is_rejected(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "zero_shopper").await;
    let item_id = item_id_by_name(&pool, "Iron Weights").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id, "quantity": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchasing_unknown_item_returns_404(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "lost_shopper").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchasing_inactive_item_is_rejected(pool: PgPool) {
    let (user_id, _) = common::create_user_with_character(&pool, "late_shopper").await;
    set_character(&pool, user_id, serde_json::json!({"balance": "1.00"})).await;

    let item_id = item_id_by_name(&pool, "Iron Weights").await;
    sqlx::query("UPDATE store_items SET is_active = FALSE WHERE id = $1")
        .bind(item_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/store/purchase",
        serde_json::json!({"user_id": user_id, "item_id": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
