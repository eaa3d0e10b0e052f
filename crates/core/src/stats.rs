//! Character stat kinds and boost arithmetic.

use crate::error::CoreError;

/// Hard cap on every character stat.
pub const STAT_MAX: i32 = 100;

/// The four boostable character stats. String codes match the
/// `store_items.stat_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Strength,
    Stamina,
    Agility,
    Health,
}

impl StatKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Strength => "strength",
            StatKind::Stamina => "stamina",
            StatKind::Agility => "agility",
            StatKind::Health => "health",
        }
    }

    pub fn parse(code: &str) -> Result<Self, CoreError> {
        match code {
            "strength" => Ok(StatKind::Strength),
            "stamina" => Ok(StatKind::Stamina),
            "agility" => Ok(StatKind::Agility),
            "health" => Ok(StatKind::Health),
            other => Err(CoreError::Validation(format!(
                "Invalid stat type '{other}'. Must be one of: strength, stamina, agility, health"
            ))),
        }
    }
}

/// Apply a purchased boost to a stat, clamping at [`STAT_MAX`] regardless
/// of quantity.
pub fn apply_boost(current: i32, increase: i32, quantity: i32) -> i32 {
    (current + increase * quantity).min(STAT_MAX)
}
