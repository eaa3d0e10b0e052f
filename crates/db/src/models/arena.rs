//! Arena progress entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-user arena ladder state from the `arena_progress` table.
///
/// `battles_completed_today` is only meaningful together with
/// `last_battle_date`: the counter logically resets when the last battle
/// happened on an earlier UTC calendar day (see
/// [`fitquest_core::arena::battles_completed_today`]).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArenaProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub current_level: i32,
    pub current_series: i32,
    pub battles_completed_today: i32,
    pub last_battle_date: Option<Timestamp>,
    pub total_battles_won: i32,
}

/// DTO for creating an initial arena progress row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArenaProgress {
    pub user_id: DbId,
}

/// State written back after a resolved battle.
#[derive(Debug, Clone)]
pub struct ArenaBattleUpdate {
    pub current_level: i32,
    pub current_series: i32,
    pub battles_completed_today: i32,
    pub last_battle_date: Timestamp,
    pub total_battles_won: i32,
}
