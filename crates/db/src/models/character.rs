//! Character entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table. One per user.
///
/// Stats are capped at 100 (enforced in code and by CHECK constraints).
/// `balance` is the simulated currency balance, not an on-chain value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub level: i32,
    pub xp: i32,
    pub evolution_stage: i32,
    pub strength: i32,
    pub stamina: i32,
    pub agility: i32,
    pub health: i32,
    pub balance: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub user_id: DbId,
    /// Defaults to "Athlos" if omitted.
    pub name: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub xp: Option<i32>,
    pub evolution_stage: Option<i32>,
    pub strength: Option<i32>,
    pub stamina: Option<i32>,
    pub agility: Option<i32>,
    pub health: Option<i32>,
    pub balance: Option<Decimal>,
}
