//! Quest entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A quest row from the `quests` table.
///
/// `metric` is an explicit code (`steps`, `calories`, `distance_meters`)
/// that selects which fitness metric drives progress; see
/// [`fitquest_core::quest::MetricKind`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quest {
    pub id: DbId,
    pub user_id: DbId,
    pub quest_type: String,
    pub name: String,
    pub description: String,
    pub metric: String,
    pub target_value: i32,
    pub current_value: i32,
    pub xp_reward: i32,
    pub currency_reward: Decimal,
    pub completed: bool,
    pub claimed: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new quest.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuest {
    pub user_id: DbId,
    pub quest_type: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub metric: String,
    #[validate(range(min = 1))]
    pub target_value: i32,
    pub xp_reward: i32,
    pub currency_reward: Decimal,
    pub expires_at: Option<Timestamp>,
}

/// DTO for updating an existing quest. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<i32>,
    pub current_value: Option<i32>,
    pub completed: Option<bool>,
    pub claimed: Option<bool>,
    pub expires_at: Option<Timestamp>,
}
