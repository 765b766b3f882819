//! RON data loader
//!
//! Loads enemy templates from an external RON file, with fallback to the
//! hardcoded defaults.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::enemies::{default_enemy_templates, EnemyTemplates};

/// Default location of the enemy data file
pub const DEFAULT_ENEMIES_PATH: &str = "assets/data/enemies.ron";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize templates: {0}")]
    Serialize(#[from] ron::Error),
    #[error("duplicate template for {0:?}")]
    Duplicate(crate::entities::EnemyKind),
}

/// Manages external game data
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    /// Enemy templates
    pub enemies: EnemyTemplates,
}

impl DataManager {
    /// Load from `path`, falling back to the built-in templates on any error
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_enemies(path) {
            Ok(enemies) => {
                log::info!("Loaded {} enemy templates from {:?}", enemies.templates.len(), path);
                Self { enemies }
            }
            Err(e) => {
                log::warn!("{}. Using default enemy templates.", e);
                Self::defaults()
            }
        }
    }

    pub fn defaults() -> Self {
        Self {
            enemies: default_enemy_templates(),
        }
    }
}

/// Parse a RON string of enemy templates
pub fn parse_enemies(content: &str, path: &Path) -> Result<EnemyTemplates, DataError> {
    let templates: EnemyTemplates = ron::from_str(content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for template in &templates.templates {
        if !seen.insert(template.kind) {
            return Err(DataError::Duplicate(template.kind));
        }
    }
    Ok(templates)
}

/// Load enemy templates from a RON file
pub fn load_enemies(path: &Path) -> Result<EnemyTemplates, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_enemies(&content, path)
}

/// Render templates as pretty RON
pub fn enemies_to_ron(templates: &EnemyTemplates) -> Result<String, DataError> {
    Ok(ron::ser::to_string_pretty(templates, ron::ser::PrettyConfig::default())?)
}

/// Write the default templates to `path`, creating parent directories
pub fn export_default_enemies(path: &Path) -> Result<(), DataError> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = enemies_to_ron(&default_enemy_templates())?;
    fs::write(path, content).map_err(io_err)?;
    log::info!("Exported default enemy templates to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EnemyKind;

    #[test]
    fn test_ron_reparses() {
        let ron_text = enemies_to_ron(&default_enemy_templates()).expect("serialize");
        let parsed = parse_enemies(&ron_text, Path::new("inline")).expect("parse");
        assert_eq!(parsed, default_enemy_templates());
    }

    #[test]
    fn test_parse_minimal_file() {
        let content = r#"(
            templates: [
                (
                    kind: Warrior,
                    name: "Shade",
                    real_name: "Fallen Warrior",
                    base: (hp: 60, strength: 22, defense: 8, speed: 1, intelligence: 10),
                ),
            ],
        )"#;
        let parsed = parse_enemies(content, Path::new("inline")).expect("parse");
        let warrior = parsed.find(EnemyKind::Warrior).expect("warrior");
        assert_eq!(warrior.base.hp, 60);
        assert_eq!(warrior.description, None);
    }

    #[test]
    fn test_duplicate_kinds_rejected() {
        let content = r#"(
            templates: [
                (kind: Mage, name: "a", real_name: "a", base: (hp: 1, strength: 1, defense: 1, speed: 1, intelligence: 1)),
                (kind: Mage, name: "b", real_name: "b", base: (hp: 1, strength: 1, defense: 1, speed: 1, intelligence: 1)),
            ],
        )"#;
        let err = parse_enemies(content, Path::new("inline")).unwrap_err();
        assert!(matches!(err, DataError::Duplicate(EnemyKind::Mage)));
    }

    #[test]
    fn test_bad_ron_is_parse_error() {
        let err = parse_enemies("(templates: [", Path::new("broken.ron")).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let manager = DataManager::new("definitely/not/here/enemies.ron");
        assert_eq!(manager.enemies, default_enemy_templates());
    }

    #[test]
    fn test_export_then_load() {
        let path = std::env::temp_dir().join("towerfall-test").join("enemies.ron");
        export_default_enemies(&path).expect("export");
        let loaded = load_enemies(&path).expect("load");
        assert_eq!(loaded.templates.len(), 4);
        let _ = fs::remove_file(&path);
    }
}
