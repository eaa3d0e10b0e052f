//! Pure domain logic for the FitQuest backend.
//!
//! Everything in this crate is synchronous and side-effect free: the arena
//! battle resolver, quest progress and claim rules, character progression
//! math, and stat boost arithmetic. The `db` and `api` crates apply these
//! rules to persisted state.

pub mod arena;
pub mod error;
pub mod progression;
pub mod quest;
pub mod stats;
pub mod store;
pub mod types;
