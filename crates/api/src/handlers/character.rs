//! Handlers for the `/character` resource. Characters are keyed by their
//! owning user, one per user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitquest_core::error::CoreError;
use fitquest_core::types::DbId;
use fitquest_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use fitquest_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/character
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/character/{user_id}
pub async fn get_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: user_id,
        }))?;
    Ok(Json(character))
}

/// PATCH /api/character/{user_id}
pub async fn update_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::update_by_user(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: user_id,
        }))?;
    Ok(Json(character))
}
