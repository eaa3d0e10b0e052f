//! Arena battle progression engine.
//!
//! The arena is a fixed ladder of seven enemies. A battle is resolved by a
//! single deterministic comparison of the character's XP against the
//! enemy's XP threshold; there is no randomness. Winning advances the
//! ladder, and beating the seventh enemy wraps back to the first and starts
//! a new series (prestige loop). Battles are capped at two per UTC calendar
//! day.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::types::Timestamp;

/// A fixed roster entry. `xp_threshold` values are strictly increasing
/// across the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub name: &'static str,
    pub health: i32,
    pub xp_threshold: i32,
}

/// The seven arena enemies, indexed by `current_level - 1`.
pub const ENEMY_ROSTER: [Enemy; 7] = [
    Enemy { name: "Shadow Goblin", health: 80, xp_threshold: 15 },
    Enemy { name: "Stone Orc", health: 120, xp_threshold: 25 },
    Enemy { name: "Fire Demon", health: 160, xp_threshold: 35 },
    Enemy { name: "Ice Giant", health: 200, xp_threshold: 45 },
    Enemy { name: "Dark Knight", health: 240, xp_threshold: 55 },
    Enemy { name: "Ancient Dragon", health: 280, xp_threshold: 65 },
    Enemy { name: "Void Lord", health: 320, xp_threshold: 75 },
];

/// Highest arena level; winning at this level wraps to 1 and starts a new
/// series.
pub const ARENA_MAX_LEVEL: i32 = 7;

/// Maximum battles per UTC calendar day.
pub const DAILY_BATTLE_LIMIT: i32 = 2;

/// Rewards granted on victory, computed from the pre-battle arena level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRewards {
    pub xp: i32,
    pub currency: Decimal,
}

/// The resolved outcome of one arena battle.
///
/// `next_level` and `next_series` already reflect the ladder advance (or
/// the 7 -> 1 wrap). On defeat they equal the pre-battle values and
/// `rewards` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub victory: bool,
    pub next_level: i32,
    pub next_series: i32,
    pub rewards: Option<BattleRewards>,
}

/// Look up the roster entry for an arena level (1-7).
pub fn enemy_for_level(level: i32) -> Result<&'static Enemy, CoreError> {
    if !(1..=ARENA_MAX_LEVEL).contains(&level) {
        return Err(CoreError::Validation(format!(
            "Arena level {level} out of range 1-{ARENA_MAX_LEVEL}"
        )));
    }
    Ok(&ENEMY_ROSTER[(level - 1) as usize])
}

/// Resolve a battle at `current_level` for a character with `character_xp`.
///
/// Victory iff the character's XP is strictly greater than the enemy's
/// threshold; equal values are a defeat. Rewards scale with the pre-battle
/// level: `20 + level * 5` XP and `0.01 + level * 0.005` currency.
pub fn resolve_battle(
    character_xp: i32,
    current_level: i32,
    current_series: i32,
) -> Result<BattleOutcome, CoreError> {
    let enemy = enemy_for_level(current_level)?;

    if character_xp <= enemy.xp_threshold {
        return Ok(BattleOutcome {
            victory: false,
            next_level: current_level,
            next_series: current_series,
            rewards: None,
        });
    }

    let (next_level, next_series) = if current_level < ARENA_MAX_LEVEL {
        (current_level + 1, current_series)
    } else {
        (1, current_series + 1)
    };

    Ok(BattleOutcome {
        victory: true,
        next_level,
        next_series,
        rewards: Some(BattleRewards {
            xp: 20 + current_level * 5,
            // 0.01 + level * 0.005, expressed in thousandths.
            currency: Decimal::new(10 + current_level as i64 * 5, 3),
        }),
    })
}

/// Effective battles-completed-today counter, applying the calendar-day
/// reset: the stored counter only counts if the last battle happened on the
/// same UTC date as `now`.
pub fn battles_completed_today(
    recorded: i32,
    last_battle: Option<Timestamp>,
    now: Timestamp,
) -> i32 {
    match last_battle {
        Some(last) if last.date_naive() == now.date_naive() => recorded,
        _ => 0,
    }
}

/// Reject a battle attempt once the daily cap is reached.
pub fn check_daily_limit(completed_today: i32) -> Result<(), CoreError> {
    if completed_today >= DAILY_BATTLE_LIMIT {
        return Err(CoreError::Validation(
            "Maximum battles per day reached".to_string(),
        ));
    }
    Ok(())
}
