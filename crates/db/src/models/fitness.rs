//! Fitness sample entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A fitness sample row from the `fitness_samples` table.
///
/// `distance` is in kilometers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FitnessSample {
    pub id: DbId,
    pub user_id: DbId,
    pub recorded_at: Timestamp,
    pub steps: i32,
    pub calories: i32,
    pub heart_rate: i32,
    pub active_minutes: i32,
    pub distance: Decimal,
    pub workout_type: Option<String>,
}

/// DTO for ingesting a fitness sample.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFitnessSample {
    pub user_id: DbId,
    #[validate(range(min = 0))]
    pub steps: i32,
    #[validate(range(min = 0))]
    pub calories: i32,
    #[validate(range(min = 0))]
    pub heart_rate: i32,
    #[validate(range(min = 0))]
    pub active_minutes: i32,
    pub distance: Decimal,
    pub workout_type: Option<String>,
}
