//! Progression systems

pub mod difficulty;

pub use difficulty::{Difficulty, ParseDifficultyError, Rounding, ScalingProfile, WorldContext};
