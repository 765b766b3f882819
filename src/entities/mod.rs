//! Entity creation and management

pub mod enemies;
pub mod player;

pub use enemies::{spawn_enemy, EnemyBuilder, EnemyDef, EnemyKind};
pub use player::Player;
