//! Handlers for the `/transactions` resource.

use axum::extract::{Path, State};
use axum::Json;
use fitquest_core::types::DbId;
use fitquest_db::models::transaction::Transaction;
use fitquest_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/transactions/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = TransactionRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(transactions))
}
