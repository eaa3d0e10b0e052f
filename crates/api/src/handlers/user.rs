//! Handlers for the `/user` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitquest_core::error::CoreError;
use fitquest_core::types::DbId;
use fitquest_db::models::user::{CreateUser, UpdateUser, User};
use fitquest_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/user
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// GET /api/user/wallet/{address}
pub async fn get_by_wallet(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_wallet(&state.pool, &address)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with wallet address {address}")))?;
    Ok(Json(user))
}

/// PATCH /api/user/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}
