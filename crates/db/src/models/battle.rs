//! Battle mini-game entity model and DTOs.
//!
//! These rows back the orb-matching battle board shown in the client; the
//! arena ladder lives in [`crate::models::arena`].

use fitquest_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A battle row from the `battles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Battle {
    pub id: DbId,
    pub user_id: DbId,
    pub enemy_name: String,
    pub enemy_level: i32,
    pub player_health: i32,
    pub enemy_health: i32,
    pub status: String,
    pub board_state: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for starting a battle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBattle {
    pub user_id: DbId,
    pub enemy_name: String,
    pub enemy_level: i32,
    pub player_health: i32,
    pub enemy_health: i32,
    pub board_state: serde_json::Value,
}

/// DTO for updating battle state as the mini-game plays out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBattle {
    pub player_health: Option<i32>,
    pub enemy_health: Option<i32>,
    pub status: Option<String>,
    pub board_state: Option<serde_json::Value>,
}
