//! Character level and evolution stage math.

/// XP required per character level.
pub const XP_PER_LEVEL: i32 = 200;

/// Evolution stages: 1=Novice, 2=Warrior, 3=Champion, 4=Legend.
pub const MAX_EVOLUTION_STAGE: i32 = 4;

/// Character level derived from total XP: `floor(xp / 200) + 1`.
pub fn level_for_xp(xp: i32) -> i32 {
    xp / XP_PER_LEVEL + 1
}

/// Evolution stage derived from level: `min(4, floor(level / 10) + 1)`.
/// Display-only tier.
pub fn evolution_stage_for_level(level: i32) -> i32 {
    (level / 10 + 1).min(MAX_EVOLUTION_STAGE)
}
