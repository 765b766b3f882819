//! Towerfall - combat core for a turn-based tower climb
//!
//! Scales enemies to the floor and difficulty they are met on, and
//! resolves their turns: weighted ability choice, misses, potions,
//! stagger and burned gear.

pub mod combat;
pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod progression;
pub mod ui;

// Re-export commonly used types
pub use combat::{ActionOutcome, CombatActor, Dice, Target};
pub use entities::{spawn_enemy, EnemyBuilder, EnemyKind, Player};
pub use progression::{Difficulty, WorldContext};
