//! Handlers for the arena battle progression engine.
//!
//! `POST /api/arena/battle` is the heart of the arena: it enforces the
//! two-battles-per-day cap, resolves the deterministic XP comparison
//! against the fixed enemy roster, advances the ladder (wrapping 7 -> 1
//! into a new series), and applies victory rewards to the character. The
//! progress write and the character write commit together; the progress
//! row is locked for the duration so same-user requests serialize.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use fitquest_core::arena;
use fitquest_core::error::CoreError;
use fitquest_core::types::DbId;
use fitquest_db::models::arena::{ArenaBattleUpdate, ArenaProgress, CreateArenaProgress};
use fitquest_db::models::character::UpdateCharacter;
use fitquest_db::repositories::{ArenaProgressRepo, CharacterRepo, UserRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/arena/battle`.
#[derive(Debug, Deserialize)]
pub struct ArenaBattleRequest {
    pub user_id: DbId,
}

/// Victory rewards included in the battle response.
#[derive(Debug, Serialize)]
pub struct RewardsPayload {
    pub xp: i32,
    pub currency: Decimal,
}

/// Response body for `POST /api/arena/battle`.
#[derive(Debug, Serialize)]
pub struct ArenaBattleResponse {
    /// "victory" or "defeat".
    pub result: &'static str,
    pub enemy: String,
    pub player_xp: i32,
    pub enemy_xp: i32,
    /// `None` on defeat.
    pub rewards: Option<RewardsPayload>,
}

/// GET /api/arena/progress/{user_id}
///
/// Creates an initial progress row (level 1, series 1) on first access.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ArenaProgress>> {
    if let Some(progress) = ArenaProgressRepo::find_by_user(&state.pool, user_id).await? {
        return Ok(Json(progress));
    }

    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let progress = ArenaProgressRepo::create(&state.pool, &CreateArenaProgress { user_id }).await?;
    Ok(Json(progress))
}

/// POST /api/arena/battle
pub async fn battle(
    State(state): State<AppState>,
    Json(req): Json<ArenaBattleRequest>,
) -> AppResult<Json<ArenaBattleResponse>> {
    let mut tx = state.pool.begin().await?;

    let character = CharacterRepo::find_by_user_for_update(&mut *tx, req.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: req.user_id,
        }))?;
    let progress = ArenaProgressRepo::find_by_user_for_update(&mut *tx, req.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ArenaProgress",
            id: req.user_id,
        }))?;

    let now = Utc::now();
    let completed_today = arena::battles_completed_today(
        progress.battles_completed_today,
        progress.last_battle_date,
        now,
    );
    // Rejected before any write; the transaction rolls back untouched.
    arena::check_daily_limit(completed_today)?;

    let enemy = arena::enemy_for_level(progress.current_level)?;
    let outcome = arena::resolve_battle(
        character.xp,
        progress.current_level,
        progress.current_series,
    )?;

    let total_battles_won = if outcome.victory {
        progress.total_battles_won + 1
    } else {
        progress.total_battles_won
    };
    ArenaProgressRepo::record_battle(
        &mut *tx,
        req.user_id,
        &ArenaBattleUpdate {
            current_level: outcome.next_level,
            current_series: outcome.next_series,
            battles_completed_today: completed_today + 1,
            last_battle_date: now,
            total_battles_won,
        },
    )
    .await?;

    if let Some(rewards) = outcome.rewards {
        CharacterRepo::update_by_user(
            &mut *tx,
            req.user_id,
            &UpdateCharacter {
                xp: Some(character.xp + rewards.xp),
                balance: Some(character.balance + rewards.currency),
                ..Default::default()
            },
        )
        .await?;
    }

    tx.commit().await?;

    Ok(Json(ArenaBattleResponse {
        result: if outcome.victory { "victory" } else { "defeat" },
        enemy: enemy.name.to_string(),
        player_xp: character.xp,
        enemy_xp: enemy.xp_threshold,
        rewards: outcome.rewards.map(|r| RewardsPayload {
            xp: r.xp,
            currency: r.currency,
        }),
    }))
}
