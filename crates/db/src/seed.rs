//! Development seed data.
//!
//! Inserts a demo account with a character, quests covering all three
//! metric kinds, a fitness sample, reward transactions, leaderboard rows,
//! and arena progress. Store items are seeded by migration, not here.
//!
//! Idempotent: if the demo user already exists the seed is skipped.

use rust_decimal::Decimal;

use crate::models::arena::CreateArenaProgress;
use crate::models::character::{CreateCharacter, UpdateCharacter};
use crate::models::leaderboard::UpsertLeaderboardEntry;
use crate::models::fitness::CreateFitnessSample;
use crate::models::quest::{CreateQuest, UpdateQuest};
use crate::models::transaction::CreateTransaction;
use crate::models::user::CreateUser;
use crate::repositories::{
    ArenaProgressRepo, CharacterRepo, FitnessRepo, LeaderboardRepo, QuestRepo, TransactionRepo,
    UserRepo,
};
use crate::DbPool;

const DEMO_WALLET: &str = "0x742d35Cc6670C5C2DFeF62A47D8Bd3E7Af2";

/// Populate the database with demo data. Returns without writing anything
/// if the demo user is already present.
pub async fn run(pool: &DbPool) -> Result<(), sqlx::Error> {
    if UserRepo::find_by_wallet(pool, DEMO_WALLET).await?.is_some() {
        tracing::info!("Seed data already present, skipping");
        return Ok(());
    }

    let alex = UserRepo::create(
        pool,
        &CreateUser {
            username: "AlexWarrior".into(),
            email: "alex@fitquest.com".into(),
            wallet_address: Some(DEMO_WALLET.into()),
        },
    )
    .await?;

    let rivals = [
        ("FitLegend47", "legend@fitquest.com", "0x123d35Cc6670C5C2DFeF62A47D8Bd3E7Af3"),
        ("WarriorRex", "rex@fitquest.com", "0x456d35Cc6670C5C2DFeF62A47D8Bd3E7Af4"),
        ("FitQueen99", "queen@fitquest.com", "0x789d35Cc6670C5C2DFeF62A47D8Bd3E7Af5"),
    ];
    let mut rival_ids = Vec::new();
    for (username, email, wallet) in rivals {
        let user = UserRepo::create(
            pool,
            &CreateUser {
                username: username.into(),
                email: email.into(),
                wallet_address: Some(wallet.into()),
            },
        )
        .await?;
        rival_ids.push(user.id);
    }
    tracing::info!(count = 1 + rival_ids.len(), "Seeded users");

    // Demo character: level 15 warrior with a small bankroll.
    CharacterRepo::create(
        pool,
        &CreateCharacter {
            user_id: alex.id,
            name: Some("Athlos".into()),
        },
    )
    .await?;
    CharacterRepo::update_by_user(
        pool,
        alex.id,
        &UpdateCharacter {
            level: Some(15),
            xp: Some(2847),
            evolution_stage: Some(2),
            balance: Some(Decimal::new(247, 2)),
            ..Default::default()
        },
    )
    .await?;

    // Quests: one completed-but-unclaimed, one in progress, one weekly.
    let steps_quest = QuestRepo::create(
        pool,
        &CreateQuest {
            user_id: alex.id,
            quest_type: "daily".into(),
            name: "10,000 Steps Journey".into(),
            description: "Walk 10,000 steps to unlock the Forest Path".into(),
            metric: "steps".into(),
            target_value: 10000,
            xp_reward: 50,
            currency_reward: Decimal::new(1, 2),
            expires_at: None,
        },
    )
    .await?;
    QuestRepo::update(
        pool,
        steps_quest.id,
        &UpdateQuest {
            current_value: Some(10000),
            completed: Some(true),
            ..Default::default()
        },
    )
    .await?;

    let calories_quest = QuestRepo::create(
        pool,
        &CreateQuest {
            user_id: alex.id,
            quest_type: "daily".into(),
            name: "Calorie Crusher".into(),
            description: "Burn 500 calories to defeat the Couch Potato King".into(),
            metric: "calories".into(),
            target_value: 500,
            xp_reward: 75,
            currency_reward: Decimal::new(15, 3),
            expires_at: None,
        },
    )
    .await?;
    QuestRepo::update(
        pool,
        calories_quest.id,
        &UpdateQuest {
            current_value: Some(487),
            ..Default::default()
        },
    )
    .await?;

    let marathon_quest = QuestRepo::create(
        pool,
        &CreateQuest {
            user_id: alex.id,
            quest_type: "weekly".into(),
            name: "Marathon Master".into(),
            description: "Run 25km total this week".into(),
            metric: "distance_meters".into(),
            target_value: 25000,
            xp_reward: 300,
            currency_reward: Decimal::new(5, 2),
            expires_at: None,
        },
    )
    .await?;
    QuestRepo::update(
        pool,
        marathon_quest.id,
        &UpdateQuest {
            current_value: Some(18500),
            ..Default::default()
        },
    )
    .await?;
    tracing::info!("Seeded quests");

    FitnessRepo::create(
        pool,
        &CreateFitnessSample {
            user_id: alex.id,
            steps: 8432,
            calories: 487,
            heart_rate: 85,
            active_minutes: 65,
            distance: Decimal::new(62, 1),
            workout_type: Some("running".into()),
        },
    )
    .await?;

    TransactionRepo::create(
        pool,
        &CreateTransaction {
            user_id: alex.id,
            tx_type: "quest_reward".into(),
            amount: Decimal::new(1, 2),
            description: "10,000 Steps Quest Completion".into(),
            status: Some("completed".into()),
        },
    )
    .await?;
    TransactionRepo::create(
        pool,
        &CreateTransaction {
            user_id: alex.id,
            tx_type: "challenge_reward".into(),
            amount: Decimal::new(5, 2),
            description: "Weekly Challenge - Strength Seeker".into(),
            status: Some("completed".into()),
        },
    )
    .await?;

    let standings = [
        (rival_ids[0], "FitLegend47", 42, 94750, Decimal::new(1245, 2), 1),
        (rival_ids[1], "WarriorRex", 38, 87234, Decimal::new(1012, 2), 2),
        (rival_ids[2], "FitQueen99", 35, 79891, Decimal::new(877, 2), 3),
        (alex.id, "AlexWarrior", 15, 2847, Decimal::new(247, 2), 47),
    ];
    for (user_id, username, level, xp, earned, rank) in standings {
        LeaderboardRepo::upsert(
            pool,
            &UpsertLeaderboardEntry {
                user_id,
                username: username.into(),
                level,
                xp,
                currency_earned: earned,
                rank,
            },
        )
        .await?;
    }
    tracing::info!("Seeded leaderboard");

    ArenaProgressRepo::create(pool, &CreateArenaProgress { user_id: alex.id }).await?;
    ArenaProgressRepo::create(pool, &CreateArenaProgress { user_id: rival_ids[0] }).await?;
    tracing::info!("Seeded arena progress");

    Ok(())
}
