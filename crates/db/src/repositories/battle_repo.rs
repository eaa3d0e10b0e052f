//! Repository for the `battles` table (orb-matching mini-game).

use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::battle::{Battle, CreateBattle, UpdateBattle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, enemy_name, enemy_level, player_health, \
     enemy_health, status, board_state, created_at";

/// Provides CRUD operations for mini-game battles.
pub struct BattleRepo;

impl BattleRepo {
    /// Insert a new battle, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateBattle,
    ) -> Result<Battle, sqlx::Error> {
        let query = format!(
            "INSERT INTO battles
                (user_id, enemy_name, enemy_level, player_health, enemy_health, board_state)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Battle>(&query)
            .bind(input.user_id)
            .bind(&input.enemy_name)
            .bind(input.enemy_level)
            .bind(input.player_health)
            .bind(input.enemy_health)
            .bind(&input.board_state)
            .fetch_one(exec)
            .await
    }

    /// Find a user's most recent active battle.
    pub async fn find_active_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<Battle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM battles
             WHERE user_id = $1 AND status = 'active'
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Battle>(&query)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    /// Update battle state. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        exec: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateBattle,
    ) -> Result<Option<Battle>, sqlx::Error> {
        let query = format!(
            "UPDATE battles SET
                player_health = COALESCE($2, player_health),
                enemy_health = COALESCE($3, enemy_health),
                status = COALESCE($4, status),
                board_state = COALESCE($5, board_state)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Battle>(&query)
            .bind(id)
            .bind(input.player_health)
            .bind(input.enemy_health)
            .bind(&input.status)
            .bind(&input.board_state)
            .fetch_optional(exec)
            .await
    }
}
