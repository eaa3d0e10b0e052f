//! Repository for the `quests` table.

use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::quest::{CreateQuest, Quest, UpdateQuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, quest_type, name, description, metric, \
     target_value, current_value, xp_reward, currency_reward, completed, \
     claimed, expires_at, created_at";

/// Provides CRUD operations for quests plus the progress/claim mutations.
pub struct QuestRepo;

impl QuestRepo {
    /// Insert a new quest, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateQuest,
    ) -> Result<Quest, sqlx::Error> {
        let query = format!(
            "INSERT INTO quests
                (user_id, quest_type, name, description, metric, target_value,
                 xp_reward, currency_reward, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(input.user_id)
            .bind(&input.quest_type)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.metric)
            .bind(input.target_value)
            .bind(input.xp_reward)
            .bind(input.currency_reward)
            .bind(input.expires_at)
            .fetch_one(exec)
            .await
    }

    /// Find a quest by ID.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = $1");
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Find a quest by ID, locking the row for the rest of the enclosing
    /// transaction. Used by the claim flow.
    pub async fn find_by_id_for_update(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List all quests for a user, newest first.
    pub async fn list_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Vec<Quest>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM quests WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Quest>(&query)
            .bind(user_id)
            .fetch_all(exec)
            .await
    }

    /// List a user's unfinished quests, locking them for the enclosing
    /// transaction. Used by fitness ingestion to apply metric deltas.
    pub async fn list_unfinished_by_user_for_update(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Vec<Quest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quests
             WHERE user_id = $1 AND completed = FALSE
             ORDER BY id
             FOR UPDATE"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(user_id)
            .fetch_all(exec)
            .await
    }

    /// Update a quest. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        exec: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateQuest,
    ) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!(
            "UPDATE quests SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                target_value = COALESCE($4, target_value),
                current_value = COALESCE($5, current_value),
                completed = COALESCE($6, completed),
                claimed = COALESCE($7, claimed),
                expires_at = COALESCE($8, expires_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.target_value)
            .bind(input.current_value)
            .bind(input.completed)
            .bind(input.claimed)
            .bind(input.expires_at)
            .fetch_optional(exec)
            .await
    }

    /// Write back a progress advance computed by
    /// [`fitquest_core::quest::apply_progress`].
    pub async fn apply_progress(
        exec: impl PgExecutor<'_>,
        id: DbId,
        current_value: i32,
        completed: bool,
    ) -> Result<Quest, sqlx::Error> {
        let query = format!(
            "UPDATE quests SET current_value = $2, completed = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .bind(current_value)
            .bind(completed)
            .fetch_one(exec)
            .await
    }

    /// Mark a quest claimed. The caller has already checked the claim
    /// preconditions under a row lock.
    pub async fn mark_claimed(exec: impl PgExecutor<'_>, id: DbId) -> Result<Quest, sqlx::Error> {
        let query = format!(
            "UPDATE quests SET claimed = TRUE
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_one(exec)
            .await
    }
}
