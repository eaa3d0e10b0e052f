//! User entity model and DTOs.

use fitquest_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub wallet_address: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub wallet_address: Option<String>,
}

/// DTO for updating an existing user. All fields are optional.
///
/// Omitted (or `null`) fields are left untouched by the COALESCE-based
/// update. This means `wallet_address` can be set or replaced but never
/// cleared back to NULL over the API; a wallet link is permanent once
/// established.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub wallet_address: Option<String>,
}
