//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `impl PgExecutor<'_>` as the first argument so they work
//! against either a pool reference or an open transaction; the arena
//! battle, quest claim, and store purchase flows run their multi-record
//! writes inside a single transaction.

pub mod arena_repo;
pub mod battle_repo;
pub mod character_repo;
pub mod fitness_repo;
pub mod leaderboard_repo;
pub mod quest_repo;
pub mod store_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use arena_repo::ArenaProgressRepo;
pub use battle_repo::BattleRepo;
pub use character_repo::CharacterRepo;
pub use fitness_repo::FitnessRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use quest_repo::QuestRepo;
pub use store_repo::StoreRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
