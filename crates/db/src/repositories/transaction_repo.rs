//! Repository for the `transactions` table.

use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, tx_type, amount, description, status, created_at";

/// Provides append and list operations for the reward ledger.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Append a transaction, returning the created row.
    ///
    /// If `status` is `None`, the column default ("pending") applies.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (user_id, tx_type, amount, description, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'pending'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(input.user_id)
            .bind(&input.tx_type)
            .bind(input.amount)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_one(exec)
            .await
    }

    /// List a user's transactions, newest first.
    pub async fn list_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(exec)
            .await
    }
}
