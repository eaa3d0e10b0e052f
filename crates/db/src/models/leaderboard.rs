//! Leaderboard entity model.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A denormalized leaderboard row, recomputed externally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub level: i32,
    pub xp: i32,
    pub currency_earned: Decimal,
    pub rank: i32,
    pub updated_at: Timestamp,
}

/// DTO for upserting a leaderboard snapshot row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertLeaderboardEntry {
    pub user_id: DbId,
    pub username: String,
    pub level: i32,
    pub xp: i32,
    pub currency_earned: Decimal,
    pub rank: i32,
}
