//! Handlers for fitness sample ingestion and retrieval.
//!
//! Ingesting a sample also advances every unfinished quest for the user,
//! selecting the delta by the quest's typed `metric` field. The insert and
//! the quest updates commit as one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use fitquest_core::error::CoreError;
use fitquest_core::quest::MetricKind;
use fitquest_core::types::DbId;
use fitquest_core::quest as quest_rules;
use fitquest_db::models::fitness::{CreateFitnessSample, FitnessSample};
use fitquest_db::repositories::{FitnessRepo, QuestRepo, UserRepo};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing fitness samples.
#[derive(Debug, Deserialize)]
pub struct FitnessQuery {
    /// Restrict results to a single UTC calendar date (`YYYY-MM-DD`).
    pub date: Option<NaiveDate>,
}

/// GET /api/fitness/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<FitnessQuery>,
) -> AppResult<Json<Vec<FitnessSample>>> {
    let samples = FitnessRepo::list_by_user(&state.pool, user_id, params.date).await?;
    Ok(Json(samples))
}

/// POST /api/fitness
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFitnessSample>,
) -> AppResult<(StatusCode, Json<FitnessSample>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let sample = ingest_sample(&state, &input).await?;
    Ok((StatusCode::CREATED, Json(sample)))
}

/// POST /api/sync-fitness/{user_id}
///
/// Simulates a smartwatch sync by generating a plausible random sample and
/// running it through the normal ingestion path.
pub async fn sync(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<FitnessSample>)> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let input = {
        use rand::Rng;
        let mut rng = rand::rng();
        CreateFitnessSample {
            user_id,
            steps: rng.random_range(6000..11000),
            calories: rng.random_range(400..700),
            heart_rate: rng.random_range(60..100),
            active_minutes: rng.random_range(30..90),
            // 3.00 to 8.00 km
            distance: Decimal::new(rng.random_range(300..800), 2),
            workout_type: Some(
                ["running", "cycling", "strength", "yoga"][rng.random_range(0..4)].to_string(),
            ),
        }
    };

    let sample = ingest_sample(&state, &input).await?;
    Ok((StatusCode::CREATED, Json(sample)))
}

/// Insert a sample and advance the user's unfinished quests atomically.
async fn ingest_sample(
    state: &AppState,
    input: &CreateFitnessSample,
) -> Result<FitnessSample, AppError> {
    let mut tx = state.pool.begin().await?;

    let sample = FitnessRepo::create(&mut *tx, input).await?;

    let quests = QuestRepo::list_unfinished_by_user_for_update(&mut *tx, input.user_id).await?;
    for quest in quests {
        let delta = match MetricKind::parse(&quest.metric) {
            Ok(MetricKind::Steps) => input.steps,
            Ok(MetricKind::Calories) => input.calories,
            Ok(MetricKind::DistanceMeters) => (input.distance * Decimal::from(1000))
                .round()
                .to_i32()
                .unwrap_or(0),
            Err(_) => {
                // A bad stored metric must not fail the whole ingest.
                tracing::warn!(quest_id = quest.id, metric = %quest.metric, "Unknown quest metric");
                continue;
            }
        };
        if delta <= 0 {
            continue;
        }

        let update = quest_rules::apply_progress(quest.current_value, quest.target_value, delta);
        if update.current_value != quest.current_value {
            QuestRepo::apply_progress(&mut *tx, quest.id, update.current_value, update.completed)
                .await?;
        }
    }

    tx.commit().await?;
    Ok(sample)
}
