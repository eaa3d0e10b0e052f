//! Repository for the `leaderboard` table.

use sqlx::PgExecutor;

use crate::models::leaderboard::{LeaderboardEntry, UpsertLeaderboardEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, username, level, xp, currency_earned, rank, updated_at";

/// Provides read and upsert operations for the leaderboard snapshot.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// List the top `limit` entries by rank.
    pub async fn list(
        exec: impl PgExecutor<'_>,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leaderboard ORDER BY rank ASC LIMIT $1");
        sqlx::query_as::<_, LeaderboardEntry>(&query)
            .bind(limit)
            .fetch_all(exec)
            .await
    }

    /// Insert or replace a user's snapshot row.
    pub async fn upsert(
        exec: impl PgExecutor<'_>,
        input: &UpsertLeaderboardEntry,
    ) -> Result<LeaderboardEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO leaderboard (user_id, username, level, xp, currency_earned, rank)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                username = EXCLUDED.username,
                level = EXCLUDED.level,
                xp = EXCLUDED.xp,
                currency_earned = EXCLUDED.currency_earned,
                rank = EXCLUDED.rank,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeaderboardEntry>(&query)
            .bind(input.user_id)
            .bind(&input.username)
            .bind(input.level)
            .bind(input.xp)
            .bind(input.currency_earned)
            .bind(input.rank)
            .fetch_one(exec)
            .await
    }
}
