//! Enemy entity creation
//!
//! Defines the tower's enemy kinds and the builder that turns a kind, a
//! level and the current world context into a scaled [`CombatActor`].

use serde::{Deserialize, Serialize};

use crate::combat::{BaseStats, CombatActor, StatOverrides};
use crate::progression::WorldContext;

/// Enemy kinds. Each kind has its own base stats and turn policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Generic,
    Human,
    Warrior,
    Mage,
}

/// Enemy definition with base stats and naming
#[derive(Debug, Clone, Copy)]
pub struct EnemyDef {
    pub kind: EnemyKind,
    /// Name shown before the reveal
    pub display_name: &'static str,
    /// Name shown after the reveal
    pub real_name: &'static str,
    pub corrupted: bool,
    pub base: BaseStats,
}

// =============================================================================
// Tower Enemies
// =============================================================================

pub const GENERIC: EnemyDef = EnemyDef {
    kind: EnemyKind::Generic,
    display_name: "Enemy",
    real_name: "Enemy",
    corrupted: false,
    base: BaseStats::GENERIC,
};

pub const CORRUPTED_HUMAN: EnemyDef = EnemyDef {
    kind: EnemyKind::Human,
    display_name: "???",
    real_name: "Corrupted Human",
    corrupted: true,
    base: BaseStats { hp: 50, strength: 10, defense: 5, speed: 5, intelligence: 100 },
};

pub const CORRUPTED_WARRIOR: EnemyDef = EnemyDef {
    kind: EnemyKind::Warrior,
    display_name: "Warrior",
    real_name: "Corrupted Warrior",
    corrupted: true,
    base: BaseStats { hp: 45, strength: 20, defense: 10, speed: 0, intelligence: 50 },
};

pub const CORRUPTED_MAGE: EnemyDef = EnemyDef {
    kind: EnemyKind::Mage,
    display_name: "Mage",
    real_name: "Corrupted Mage",
    corrupted: true,
    base: BaseStats { hp: 25, strength: 5, defense: 2, speed: 4, intelligence: 20 },
};

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Generic,
        EnemyKind::Human,
        EnemyKind::Warrior,
        EnemyKind::Mage,
    ];

    pub fn def(&self) -> &'static EnemyDef {
        match self {
            EnemyKind::Generic => &GENERIC,
            EnemyKind::Human => &CORRUPTED_HUMAN,
            EnemyKind::Warrior => &CORRUPTED_WARRIOR,
            EnemyKind::Mage => &CORRUPTED_MAGE,
        }
    }

    pub fn base_stats(&self) -> BaseStats {
        self.def().base
    }

    /// Short identifier used in data files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            EnemyKind::Generic => "generic",
            EnemyKind::Human => "human",
            EnemyKind::Warrior => "warrior",
            EnemyKind::Mage => "mage",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id().eq_ignore_ascii_case(id))
    }
}

// =============================================================================
// Spawning
// =============================================================================

/// Configures a single enemy before it is scaled into existence
#[derive(Debug, Clone)]
pub struct EnemyBuilder {
    kind: EnemyKind,
    level: i32,
    display_name: String,
    real_name: String,
    base: BaseStats,
    overrides: StatOverrides,
    weapon: Option<String>,
    loot_table: String,
}

impl EnemyBuilder {
    pub fn new(kind: EnemyKind) -> Self {
        let def = kind.def();
        Self {
            kind,
            level: 1,
            display_name: def.display_name.to_string(),
            real_name: def.real_name.to_string(),
            base: def.base,
            overrides: StatOverrides::default(),
            weapon: None,
            loot_table: "none".to_string(),
        }
    }

    /// A generic enemy goes by the same name before and after the reveal
    pub fn generic(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(EnemyKind::Generic).names(name.clone(), name)
    }

    /// Levels below 1 are raised to 1
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn names(mut self, display_name: impl Into<String>, real_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self.real_name = real_name.into();
        self
    }

    pub fn base_stats(mut self, base: BaseStats) -> Self {
        self.base = base;
        self
    }

    pub fn overrides(mut self, overrides: StatOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn weapon(mut self, weapon: impl Into<String>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn loot_table(mut self, key: impl Into<String>) -> Self {
        self.loot_table = key.into();
        self
    }

    /// Scale the enemy for `world` and hand it over. The world context is
    /// read once here and never again.
    pub fn spawn(self, world: &WorldContext) -> CombatActor {
        let level = self.level.max(1) as u32;
        let mut actor = CombatActor::new(
            self.kind,
            self.display_name,
            self.real_name,
            level,
            &self.base,
            &self.overrides,
            world.profile(),
        );
        actor.corrupted = self.kind.def().corrupted;
        actor.weapon = self.weapon;
        actor.loot_table = self.loot_table;

        log::debug!(
            "Spawned {} (level {}, floor {}, {}) with {:?}",
            actor.real_name,
            actor.level,
            world.floor,
            world.difficulty,
            actor.stats
        );
        actor
    }
}

/// Spawn an enemy of `kind` with default names and no overrides
pub fn spawn_enemy(kind: EnemyKind, level: i32, world: &WorldContext) -> CombatActor {
    EnemyBuilder::new(kind).level(level).spawn(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::Difficulty;

    #[test]
    fn test_human_ground_floor_normal() {
        let world = WorldContext::new(Difficulty::Normal, 0);
        let human = spawn_enemy(EnemyKind::Human, 1, &world);
        assert_eq!(human.stats.max_hp, 51);
        assert_eq!(human.stats.hp, 51);
        assert!(human.corrupted);
        assert_eq!(human.name, "???");
        assert_eq!(human.real_name, "Corrupted Human");
    }

    #[test]
    fn test_level_is_clamped() {
        let world = WorldContext::default();
        let enemy = EnemyBuilder::generic("Rat").level(-4).spawn(&world);
        assert_eq!(enemy.level, 1);
        let zero = spawn_enemy(EnemyKind::Warrior, 0, &world);
        assert_eq!(zero.level, 1);
    }

    #[test]
    fn test_generic_defaults() {
        let world = WorldContext::default();
        let rat = EnemyBuilder::generic("Rat")
            .level(2)
            .weapon("Teeth")
            .loot_table("vermin")
            .spawn(&world);
        assert!(!rat.corrupted);
        assert_eq!(rat.name, "Rat");
        assert_eq!(rat.real_name, "Rat");
        assert_eq!(rat.weapon.as_deref(), Some("Teeth"));
        assert_eq!(rat.loot_table, "vermin");
        // (10 + 2) * 100 * 100 / 10000
        assert_eq!(rat.stats.max_hp, 12);
    }

    #[test]
    fn test_overrides_do_not_survive_scaling() {
        let world = WorldContext::default();
        let enemy = EnemyBuilder::new(EnemyKind::Mage)
            .overrides(StatOverrides { hp: Some(999), ..Default::default() })
            .spawn(&world);
        assert_eq!(enemy.stats.max_hp, 26);
    }

    #[test]
    fn test_warrior_hardcore_deep_floor() {
        let world = WorldContext::new(Difficulty::Hardcore, 5);
        let warrior = spawn_enemy(EnemyKind::Warrior, 3, &world);
        // (45 + 3) * 150 * 150 = 1_080_000 -> 108 exactly
        assert_eq!(warrior.stats.max_hp, 108);
        // (0 + 3) * 150 * 150 = 67_500 -> 6.75 -> up -> 7
        assert_eq!(warrior.stats.speed, 7);
    }

    #[test]
    fn test_very_high_level_spawns() {
        let human = spawn_enemy(EnemyKind::Human, 50_000_000, &WorldContext::default());
        // (50 + 50_000_000) * 100 * 100 / 10000
        assert_eq!(human.stats.max_hp, 50_000_050);

        let world = WorldContext::new(Difficulty::Hardcore, 100);
        let top = spawn_enemy(EnemyKind::Warrior, i32::MAX, &world);
        assert_eq!(top.stats.max_hp, i32::MAX);
    }

    #[test]
    fn test_kind_ids() {
        for kind in EnemyKind::ALL {
            assert_eq!(EnemyKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(EnemyKind::from_id("MAGE"), Some(EnemyKind::Mage));
        assert_eq!(EnemyKind::from_id("dragon"), None);
    }
}
