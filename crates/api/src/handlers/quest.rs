//! Handlers for the `/quests` resource and the claim flow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitquest_core::error::CoreError;
use fitquest_core::types::DbId;
use fitquest_core::{progression, quest as quest_rules};
use fitquest_db::models::character::UpdateCharacter;
use fitquest_db::models::quest::{CreateQuest, Quest, UpdateQuest};
use fitquest_db::models::transaction::CreateTransaction;
use fitquest_db::repositories::{CharacterRepo, QuestRepo, TransactionRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/quests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQuest>,
) -> AppResult<(StatusCode, Json<Quest>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    quest_rules::MetricKind::parse(&input.metric)?;
    let quest = QuestRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(quest)))
}

/// GET /api/quests/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Quest>>> {
    let quests = QuestRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(quests))
}

/// PATCH /api/quests/{id}
///
/// A patch touching `current_value` or `target_value` is checked against
/// the other bound first, so an out-of-range pair is a 400 rather than a
/// constraint violation from the database.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuest>,
) -> AppResult<Json<Quest>> {
    if input.current_value.is_some() || input.target_value.is_some() {
        let quest = QuestRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Quest", id }))?;
        quest_rules::validate_progress_bounds(
            input.current_value.unwrap_or(quest.current_value),
            input.target_value.unwrap_or(quest.target_value),
        )?;
    }

    let quest = QuestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quest", id }))?;
    Ok(Json(quest))
}

/// POST /api/quest/{id}/claim
///
/// Grants the quest's rewards as one atomic unit: marks the quest claimed,
/// appends a completed `quest_reward` transaction, credits the currency
/// reward, and adds the XP reward to the character (recomputing level and
/// evolution stage). Preconditions are checked under a row lock so a
/// duplicate claim attempt is rejected without granting anything twice.
pub async fn claim(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Quest>> {
    let mut tx = state.pool.begin().await?;

    let quest = QuestRepo::find_by_id_for_update(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quest", id }))?;
    quest_rules::validate_claim(quest.completed, quest.claimed)?;

    let claimed = QuestRepo::mark_claimed(&mut *tx, id).await?;

    TransactionRepo::create(
        &mut *tx,
        &CreateTransaction {
            user_id: quest.user_id,
            tx_type: "quest_reward".to_string(),
            amount: quest.currency_reward,
            description: format!("{} Quest Completion", quest.name),
            status: Some("completed".to_string()),
        },
    )
    .await?;

    if let Some(character) = CharacterRepo::find_by_user_for_update(&mut *tx, quest.user_id).await?
    {
        let new_xp = character.xp + quest.xp_reward;
        let new_level = progression::level_for_xp(new_xp);
        CharacterRepo::update_by_user(
            &mut *tx,
            quest.user_id,
            &UpdateCharacter {
                xp: Some(new_xp),
                level: Some(new_level),
                evolution_stage: Some(progression::evolution_stage_for_level(new_level)),
                balance: Some(character.balance + quest.currency_reward),
                ..Default::default()
            },
        )
        .await?;
    }

    tx.commit().await?;
    Ok(Json(claimed))
}
