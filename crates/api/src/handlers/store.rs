//! Handlers for the store catalog and purchase flow.

use axum::extract::{Path, State};
use axum::Json;
use fitquest_core::error::CoreError;
use fitquest_core::stats::{self, StatKind};
use fitquest_core::store as store_rules;
use fitquest_core::types::DbId;
use fitquest_db::models::character::{Character, UpdateCharacter};
use fitquest_db::models::store::{PurchaseRequest, StoreItem, StorePurchase};
use fitquest_db::repositories::{CharacterRepo, StoreRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for a successful purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub purchase: StorePurchase,
    pub character: Character,
}

/// GET /api/store/items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<StoreItem>>> {
    let items = StoreRepo::list_active_items(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/store/purchases/{user_id}
pub async fn list_purchases(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<StorePurchase>>> {
    let purchases = StoreRepo::list_purchases_by_user(&state.pool, user_id).await?;
    Ok(Json(purchases))
}

/// POST /api/store/purchase
///
/// Records the purchase line, debits the balance, and boosts the stat
/// (clamped at 100) as one atomic unit. On any rejection -- missing item
/// or character, inactive item, insufficient balance -- nothing is written.
pub async fn purchase(
    State(state): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> AppResult<Json<PurchaseResponse>> {
    let quantity = req.quantity.unwrap_or(1);
    store_rules::validate_quantity(quantity)?;

    let mut tx = state.pool.begin().await?;

    let item = StoreRepo::find_item_by_id(&mut *tx, req.item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoreItem",
            id: req.item_id,
        }))?;
    if !item.is_active {
        return Err(CoreError::Validation("Item is not available".to_string()).into());
    }

    let character = CharacterRepo::find_by_user_for_update(&mut *tx, req.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: req.user_id,
        }))?;

    let total = store_rules::total_cost(item.cost, quantity);
    store_rules::validate_balance(character.balance, total)?;

    let purchase =
        StoreRepo::create_purchase(&mut *tx, req.user_id, item.id, quantity, total).await?;

    let mut update = UpdateCharacter {
        balance: Some(character.balance - total),
        ..Default::default()
    };
    match StatKind::parse(&item.stat_type)? {
        StatKind::Strength => {
            update.strength = Some(stats::apply_boost(character.strength, item.stat_increase, quantity));
        }
        StatKind::Stamina => {
            update.stamina = Some(stats::apply_boost(character.stamina, item.stat_increase, quantity));
        }
        StatKind::Agility => {
            update.agility = Some(stats::apply_boost(character.agility, item.stat_increase, quantity));
        }
        StatKind::Health => {
            update.health = Some(stats::apply_boost(character.health, item.stat_increase, quantity));
        }
    }

    let character = CharacterRepo::update_by_user(&mut *tx, req.user_id, &update)
        .await?
        .ok_or_else(|| AppError::InternalError("Character vanished during purchase".to_string()))?;

    tx.commit().await?;
    Ok(Json(PurchaseResponse {
        purchase,
        character,
    }))
}
