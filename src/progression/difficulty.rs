//! Difficulty settings and floor-based scaling
//!
//! Provides the global difficulty table and the integer stat scaler that
//! every enemy runs through once, when it is spawned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Hardcore,
}

/// How the fractional part of a scaled stat is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Truncate toward zero
    Down,
    /// Nearest integer, ties to even
    Nearest,
    /// Any remainder bumps the stat by one
    Up,
}

/// Returned by the strict `FromStr` parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, normal, hard or hardcore)")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Hardcore,
    ];

    /// Lenient lookup used for saved settings: case-insensitive,
    /// anything unrecognized is treated as Normal.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Enemy stat multiplier, in percent
    pub fn multiplier(&self) -> i64 {
        match self {
            Difficulty::Easy => 75,
            Difficulty::Normal => 100,
            Difficulty::Hard => 125,
            Difficulty::Hardcore => 150,
        }
    }

    pub fn rounding(&self) -> Rounding {
        match self {
            Difficulty::Easy => Rounding::Down,
            Difficulty::Normal => Rounding::Nearest,
            Difficulty::Hard | Difficulty::Hardcore => Rounding::Up,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Hardcore => "Hardcore",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

// =============================================================================
// World Context
// =============================================================================

/// Where and how hard the fight is. Passed in by the caller when an enemy is
/// spawned; nothing in the combat core reads global settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorldContext {
    pub difficulty: Difficulty,
    /// Tower floor (0 = ground floor)
    pub floor: u32,
}

impl WorldContext {
    pub fn new(difficulty: Difficulty, floor: u32) -> Self {
        Self { difficulty, floor }
    }

    /// Snapshot of the scaling parameters, frozen onto an actor at spawn
    pub fn profile(&self) -> ScalingProfile {
        ScalingProfile {
            difficulty_mult: self.difficulty.multiplier(),
            rounding: self.difficulty.rounding(),
            floor: self.floor,
        }
    }
}

// =============================================================================
// Stat Scaling
// =============================================================================

/// Both multipliers are percentages, so the combined divisor is 100 * 100
const SCALE_DIVISOR: i64 = 10_000;

/// Difficulty and depth parameters captured when an enemy is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingProfile {
    /// Difficulty multiplier in percent
    pub difficulty_mult: i64,
    pub rounding: Rounding,
    pub floor: u32,
}

impl ScalingProfile {
    /// Floor multiplier in percent: +10% per floor
    pub fn floor_mult(&self) -> i64 {
        100 + i64::from(self.floor) * 10
    }

    /// Scale a single base stat for an enemy of `level`.
    ///
    /// `(base + level) * floor% * difficulty% / 10000`, resolved with the
    /// profile's rounding mode and never below 1.
    pub fn scale_stat(&self, base_stat: i32, level: u32) -> i32 {
        let raw = (i64::from(base_stat) + i64::from(level))
            * self.floor_mult()
            * self.difficulty_mult;
        let quotient = raw.div_euclid(SCALE_DIVISOR);
        let remainder = raw.rem_euclid(SCALE_DIVISOR);

        let rounded = match self.rounding {
            Rounding::Down => quotient,
            Rounding::Up => quotient + i64::from(remainder != 0),
            Rounding::Nearest => {
                let twice = remainder * 2;
                if twice > SCALE_DIVISOR || (twice == SCALE_DIVISOR && quotient % 2 != 0) {
                    quotient + 1
                } else {
                    quotient
                }
            }
        };

        rounded.clamp(1, i64::from(i32::MAX)) as i32
    }
}
