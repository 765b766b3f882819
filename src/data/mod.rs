//! Data loading and external game content
//!
//! Enemy templates can be tuned from an external RON file without
//! touching the combat code.

pub mod enemies;
pub mod loader;

pub use enemies::{default_enemy_templates, EnemyTemplate, EnemyTemplates};
pub use loader::{DataError, DataManager, DEFAULT_ENEMIES_PATH};
