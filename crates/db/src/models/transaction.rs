//! Reward transaction entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A transaction row from the `transactions` table. Append-only reward
/// ledger for the simulated currency.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    pub tx_type: String,
    pub amount: Decimal,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub user_id: DbId,
    pub tx_type: String,
    pub amount: Decimal,
    pub description: String,
    /// Defaults to "pending" if omitted.
    pub status: Option<String>,
}
