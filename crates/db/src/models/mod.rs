//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod arena;
pub mod battle;
pub mod character;
pub mod fitness;
pub mod leaderboard;
pub mod quest;
pub mod store;
pub mod transaction;
pub mod user;
