//! Store catalog and purchase models.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog row from the `store_items` table. Seeded by migration,
/// read-only at runtime.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoreItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub stat_type: String,
    pub stat_increase: i32,
    pub cost: Decimal,
    pub category: String,
    pub is_active: bool,
}

/// A purchase line from the `store_purchases` table. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StorePurchase {
    pub id: DbId,
    pub user_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub total_cost: Decimal,
    pub created_at: Timestamp,
}

/// DTO for a purchase request.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    pub user_id: DbId,
    pub item_id: DbId,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
}
