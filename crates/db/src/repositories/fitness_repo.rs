//! Repository for the `fitness_samples` table.

use chrono::NaiveDate;
use fitquest_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::fitness::{CreateFitnessSample, FitnessSample};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, recorded_at, steps, calories, heart_rate, \
     active_minutes, distance, workout_type";

/// Provides insert and list operations for fitness samples.
pub struct FitnessRepo;

impl FitnessRepo {
    /// Insert a new fitness sample, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateFitnessSample,
    ) -> Result<FitnessSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO fitness_samples
                (user_id, steps, calories, heart_rate, active_minutes, distance, workout_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FitnessSample>(&query)
            .bind(input.user_id)
            .bind(input.steps)
            .bind(input.calories)
            .bind(input.heart_rate)
            .bind(input.active_minutes)
            .bind(input.distance)
            .bind(&input.workout_type)
            .fetch_one(exec)
            .await
    }

    /// List a user's samples, newest first, optionally filtered to a single
    /// UTC calendar date.
    pub async fn list_by_user(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<FitnessSample>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fitness_samples
             WHERE user_id = $1
               AND ($2::date IS NULL OR (recorded_at AT TIME ZONE 'UTC')::date = $2)
             ORDER BY recorded_at DESC"
        );
        sqlx::query_as::<_, FitnessSample>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_all(exec)
            .await
    }
}
