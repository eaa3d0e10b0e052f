pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                              create (POST)
/// /user/{id}                         get, update (GET, PATCH)
/// /user/wallet/{address}             lookup by wallet address (GET)
///
/// /character                         create (POST)
/// /character/{user_id}               get, update by owner (GET, PATCH)
///
/// /quests                            create (POST)
/// /quests/{user_id}                  list for user (GET)
/// /quests/{id}                       update (PATCH)
/// /quest/{id}/claim                  claim completed quest reward (POST)
///
/// /fitness                           ingest a sample (POST)
/// /fitness/{user_id}                 list samples (?date=YYYY-MM-DD) (GET)
/// /sync-fitness/{user_id}            simulate a device sync (POST)
///
/// /transactions/{user_id}            list transactions (GET)
/// /leaderboard                       ranked entries (?limit=N) (GET)
///
/// /battle                            create mini-game battle (POST)
/// /battle/{user_id}                  latest active battle (GET)
/// /battle/{id}                       update battle state (PATCH)
///
/// /arena/progress/{user_id}          ladder progress, created on first access (GET)
/// /arena/battle                      fight the current ladder enemy (POST)
///
/// /store/items                       active catalog (GET)
/// /store/purchase                    buy an item, apply stat boost (POST)
/// /store/purchases/{user_id}         purchase history (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Users and wallet lookup.
        .route("/user", post(handlers::user::create))
        .route(
            "/user/{id}",
            get(handlers::user::get_by_id).patch(handlers::user::update),
        )
        .route("/user/wallet/{address}", get(handlers::user::get_by_wallet))
        // Character sheet, keyed by owner.
        .route("/character", post(handlers::character::create))
        .route(
            "/character/{user_id}",
            get(handlers::character::get_by_user).patch(handlers::character::update_by_user),
        )
        // Quest ledger. GET takes a user id, PATCH a quest id.
        .route("/quests", post(handlers::quest::create))
        .route(
            "/quests/{id}",
            get(handlers::quest::list_for_user).patch(handlers::quest::update),
        )
        .route("/quest/{id}/claim", post(handlers::quest::claim))
        // Fitness samples and the simulated device sync.
        .route("/fitness", post(handlers::fitness::create))
        .route("/fitness/{user_id}", get(handlers::fitness::list_for_user))
        .route("/sync-fitness/{user_id}", post(handlers::fitness::sync))
        // Wallet history and rankings.
        .route(
            "/transactions/{user_id}",
            get(handlers::transaction::list_for_user),
        )
        .route("/leaderboard", get(handlers::leaderboard::list))
        // Orb-matching mini-game battles. GET takes a user id, PATCH a battle id.
        .route("/battle", post(handlers::battle::create))
        .route(
            "/battle/{id}",
            get(handlers::battle::get_active_for_user).patch(handlers::battle::update),
        )
        // Arena ladder.
        .route(
            "/arena/progress/{user_id}",
            get(handlers::arena::get_progress),
        )
        .route("/arena/battle", post(handlers::arena::battle))
        // Store catalog and purchases.
        .route("/store/items", get(handlers::store::list_items))
        .route("/store/purchase", post(handlers::store::purchase))
        .route(
            "/store/purchases/{user_id}",
            get(handlers::store::list_purchases),
        )
}
