//! Repository for the `arena_progress` table.

use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::arena::{ArenaBattleUpdate, ArenaProgress, CreateArenaProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, current_level, current_series, \
     battles_completed_today, last_battle_date, total_battles_won";

/// Provides operations on per-user arena ladder state.
pub struct ArenaProgressRepo;

impl ArenaProgressRepo {
    /// Insert an initial progress row (level 1, series 1, no battles),
    /// returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateArenaProgress,
    ) -> Result<ArenaProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO arena_progress (user_id)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArenaProgress>(&query)
            .bind(input.user_id)
            .fetch_one(exec)
            .await
    }

    /// Find a user's arena progress.
    pub async fn find_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<ArenaProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM arena_progress WHERE user_id = $1");
        sqlx::query_as::<_, ArenaProgress>(&query)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    /// Find a user's arena progress, locking the row for the rest of the
    /// enclosing transaction. Two simultaneous battle requests for the same
    /// user serialize on this lock, so the daily cap cannot be bypassed.
    pub async fn find_by_user_for_update(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<ArenaProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM arena_progress WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, ArenaProgress>(&query)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    /// Write back the state produced by a resolved battle.
    pub async fn record_battle(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        update: &ArenaBattleUpdate,
    ) -> Result<ArenaProgress, sqlx::Error> {
        let query = format!(
            "UPDATE arena_progress SET
                current_level = $2,
                current_series = $3,
                battles_completed_today = $4,
                last_battle_date = $5,
                total_battles_won = $6
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArenaProgress>(&query)
            .bind(user_id)
            .bind(update.current_level)
            .bind(update.current_series)
            .bind(update.battles_completed_today)
            .bind(update.last_battle_date)
            .bind(update.total_battles_won)
            .fetch_one(exec)
            .await
    }
}
