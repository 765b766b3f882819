//! Combat stat blocks
//!
//! Base stats are the per-kind constants an enemy is built from; combat
//! stats are the live numbers it fights with.

use serde::{Deserialize, Serialize};

use crate::progression::ScalingProfile;

/// Per-kind base stats, before level and floor are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i32,
    pub strength: i32,
    pub defense: i32,
    pub speed: i32,
    pub intelligence: i32,
}

impl BaseStats {
    /// Documented baseline for enemies without a kind of their own
    pub const GENERIC: BaseStats = BaseStats {
        hp: 10,
        strength: 2,
        defense: 1,
        speed: 5,
        intelligence: 3,
    };
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Live combat numbers for one enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: i32,
    pub max_hp: i32,
    pub strength: i32,
    pub defense: i32,
    pub speed: i32,
    pub intelligence: i32,
}

/// Caller-supplied starting values. Only feeds the seed; scaling replaces
/// every seeded value at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatOverrides {
    pub hp: Option<i32>,
    pub strength: Option<i32>,
    pub defense: Option<i32>,
    pub speed: Option<i32>,
    pub intelligence: Option<i32>,
}

/// Level-based starting values, computed before floor/difficulty scaling.
/// Saturates at the `i32` range for very high levels.
pub fn seed_stats(base: &BaseStats, level: u32, overrides: &StatOverrides) -> CombatStats {
    let level = i64::from(level);
    let times_level = |stat: i32| saturate(i64::from(stat).saturating_mul(level));
    let plus_level = |stat: i32| saturate(i64::from(stat).saturating_add(level));

    let hp = overrides
        .hp
        .unwrap_or_else(|| times_level(base.hp).max(base.hp.saturating_mul(10)));

    CombatStats {
        hp,
        max_hp: hp,
        strength: overrides.strength.unwrap_or_else(|| times_level(base.strength)),
        defense: overrides.defense.unwrap_or_else(|| times_level(base.defense)),
        speed: overrides.speed.unwrap_or_else(|| plus_level(base.speed)),
        intelligence: overrides.intelligence.unwrap_or_else(|| plus_level(base.intelligence)),
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Final stats for an enemy: every base stat scaled independently,
/// with max HP equal to the scaled HP.
pub fn scale_stats(base: &BaseStats, level: u32, profile: &ScalingProfile) -> CombatStats {
    let hp = profile.scale_stat(base.hp, level);

    CombatStats {
        hp,
        max_hp: hp,
        strength: profile.scale_stat(base.strength, level),
        defense: profile.scale_stat(base.defense, level),
        speed: profile.scale_stat(base.speed, level),
        intelligence: profile.scale_stat(base.intelligence, level),
    }
}
