//! Repository for the `store_items` and `store_purchases` tables.

use fitquest_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgExecutor;

use crate::models::store::{StoreItem, StorePurchase};

/// Column list for `store_items`.
const ITEM_COLUMNS: &str =
    "id, name, description, stat_type, stat_increase, cost, category, is_active";

/// Column list for `store_purchases`.
const PURCHASE_COLUMNS: &str = "id, user_id, item_id, quantity, total_cost, created_at";

/// Provides catalog reads and purchase-log writes.
pub struct StoreRepo;

impl StoreRepo {
    /// List the active catalog.
    pub async fn list_active_items(
        exec: impl PgExecutor<'_>,
    ) -> Result<Vec<StoreItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM store_items WHERE is_active = TRUE ORDER BY id");
        sqlx::query_as::<_, StoreItem>(&query).fetch_all(exec).await
    }

    /// Find a catalog item by ID (active or not; the purchase flow checks
    /// `is_active` itself).
    pub async fn find_item_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<StoreItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM store_items WHERE id = $1");
        sqlx::query_as::<_, StoreItem>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Append a purchase line, returning the created row.
    pub async fn create_purchase(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        item_id: DbId,
        quantity: i32,
        total_cost: Decimal,
    ) -> Result<StorePurchase, sqlx::Error> {
        let query = format!(
            "INSERT INTO store_purchases (user_id, item_id, quantity, total_cost)
             VALUES ($1, $2, $3, $4)
             RETURNING {PURCHASE_COLUMNS}"
        );
        sqlx::query_as::<_, StorePurchase>(&query)
            .bind(user_id)
            .bind(item_id)
            .bind(quantity)
            .bind(total_cost)
            .fetch_one(exec)
            .await
    }

    /// List a user's purchases, newest first.
    pub async fn list_purchases_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Vec<StorePurchase>, sqlx::Error> {
        let query = format!(
            "SELECT {PURCHASE_COLUMNS} FROM store_purchases
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, StorePurchase>(&query)
            .bind(user_id)
            .fetch_all(exec)
            .await
    }
}
