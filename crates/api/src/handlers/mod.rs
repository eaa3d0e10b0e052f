//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the repositories in `fitquest_db`, apply the pure
//! rules from `fitquest_core`, and map errors via [`crate::error::AppError`].
//! The arena battle, quest claim, store purchase, and fitness ingestion
//! flows wrap their multi-record writes in a single transaction.

pub mod arena;
pub mod battle;
pub mod character;
pub mod fitness;
pub mod leaderboard;
pub mod quest;
pub mod store;
pub mod transaction;
pub mod user;
