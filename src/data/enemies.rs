//! Enemy templates for data-driven enemy creation
//!
//! Templates carry the tunable parts of each enemy kind (names and base
//! stats). They are loaded from RON files and used to spawn enemies.

use serde::{Deserialize, Serialize};

use crate::combat::{BaseStats, CombatActor};
use crate::entities::{EnemyBuilder, EnemyKind};
use crate::progression::WorldContext;

/// A template for creating enemies from external data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Which turn policy the enemy uses
    pub kind: EnemyKind,
    /// Name shown before the reveal
    pub name: String,
    /// Name shown after the reveal
    pub real_name: String,
    /// Base stats
    pub base: BaseStats,
    /// Optional description/lore
    #[serde(default)]
    pub description: Option<String>,
}

impl EnemyTemplate {
    pub fn from_kind(kind: EnemyKind) -> Self {
        let def = kind.def();
        Self {
            kind,
            name: def.display_name.to_string(),
            real_name: def.real_name.to_string(),
            base: def.base,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// A builder pre-loaded with this template's names and stats
    pub fn builder(&self) -> EnemyBuilder {
        EnemyBuilder::new(self.kind)
            .names(self.name.clone(), self.real_name.clone())
            .base_stats(self.base)
    }
}

/// Collection of enemy templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplates {
    pub templates: Vec<EnemyTemplate>,
}

impl EnemyTemplates {
    /// Find the template for a kind
    pub fn find(&self, kind: EnemyKind) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    /// Spawn from the loaded template, or the built-in definition if the
    /// data has none for this kind
    pub fn spawn(&self, kind: EnemyKind, level: i32, world: &WorldContext) -> CombatActor {
        match self.find(kind) {
            Some(template) => template.builder().level(level).spawn(world),
            None => EnemyBuilder::new(kind).level(level).spawn(world),
        }
    }
}

/// Create default enemy templates (hardcoded fallback)
pub fn default_enemy_templates() -> EnemyTemplates {
    EnemyTemplates {
        templates: vec![
            EnemyTemplate::from_kind(EnemyKind::Generic)
                .with_description("Whatever crawled up the stairs this time."),
            EnemyTemplate::from_kind(EnemyKind::Human)
                .with_description("A climber who stayed too long. Still carries potions."),
            EnemyTemplate::from_kind(EnemyKind::Warrior)
                .with_description("Charges headlong; a solid hit leaves you reeling."),
            EnemyTemplate::from_kind(EnemyKind::Mage)
                .with_description("Its fire eats through packs as easily as flesh."),
        ],
    }
}
