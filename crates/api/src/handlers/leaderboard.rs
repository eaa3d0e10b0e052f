//! Handlers for the `/leaderboard` resource.

use axum::extract::{Query, State};
use axum::Json;
use fitquest_db::models::leaderboard::LeaderboardEntry;
use fitquest_db::repositories::LeaderboardRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Maximum entries to return (default 50).
    pub limit: Option<i64>,
}

/// GET /api/leaderboard?limit=N
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let limit = params.limit.unwrap_or(50).clamp(1, 100);
    let entries = LeaderboardRepo::list(&state.pool, limit).await?;
    Ok(Json(entries))
}
