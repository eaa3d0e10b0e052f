//! Repository for the `characters` table.

use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, level, xp, evolution_stage, \
     strength, stamina, agility, health, balance, created_at, updated_at";

/// Provides CRUD operations for characters, keyed by owning user.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// If `name` is `None`, the column default ("Athlos") applies.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (user_id, name)
             VALUES ($1, COALESCE($2, 'Athlos'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .fetch_one(exec)
            .await
    }

    /// Find the character owned by a user.
    pub async fn find_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE user_id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    /// Find the character owned by a user, locking the row for the rest of
    /// the enclosing transaction. Used by the battle, claim, and purchase
    /// flows so concurrent requests for the same user serialize.
    pub async fn find_by_user_for_update(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Character>(&query)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    /// Update a user's character. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if the user has no character.
    pub async fn update_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                level = COALESCE($3, level),
                xp = COALESCE($4, xp),
                evolution_stage = COALESCE($5, evolution_stage),
                strength = COALESCE($6, strength),
                stamina = COALESCE($7, stamina),
                agility = COALESCE($8, agility),
                health = COALESCE($9, health),
                balance = COALESCE($10, balance),
                updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.level)
            .bind(input.xp)
            .bind(input.evolution_stage)
            .bind(input.strength)
            .bind(input.stamina)
            .bind(input.agility)
            .bind(input.health)
            .bind(input.balance)
            .fetch_optional(exec)
            .await
    }
}
