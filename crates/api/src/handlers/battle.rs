//! Handlers for the `/battle` resource (orb-matching mini-game).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitquest_core::error::CoreError;
use fitquest_core::types::DbId;
use fitquest_db::models::battle::{Battle, CreateBattle, UpdateBattle};
use fitquest_db::repositories::BattleRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/battle
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBattle>,
) -> AppResult<(StatusCode, Json<Battle>)> {
    let battle = BattleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(battle)))
}

/// GET /api/battle/{user_id}
///
/// Returns the user's most recent active battle.
pub async fn get_active_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Battle>> {
    let battle = BattleRepo::find_active_by_user(&state.pool, user_id)
        .await?
        .ok_or(AppError::NotFound("No active battle found".to_string()))?;
    Ok(Json(battle))
}

/// PATCH /api/battle/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBattle>,
) -> AppResult<Json<Battle>> {
    let battle = BattleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Battle",
            id,
        }))?;
    Ok(Json(battle))
}
