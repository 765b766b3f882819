//! Enemy combat state
//!
//! A [`CombatActor`] is one enemy in one encounter. Its stats are scaled
//! once when it is spawned; after that only status ticks, potions, battle
//! cries and incoming damage change it.

use serde::{Deserialize, Serialize};

use super::abilities;
use super::damage::AttackFormula;
use super::dice::Dice;
use super::outcome::{ActionOutcome, Reveal};
use super::policy;
use super::stats::{scale_stats, seed_stats, BaseStats, CombatStats, StatOverrides};
use super::status::{StatusEffects, StatusTickResult, STAGGER};
use super::target::Target;
use crate::entities::EnemyKind;
use crate::progression::ScalingProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatActor {
    /// Name currently shown to the player
    pub name: String,
    /// Name shown once the enemy is revealed
    pub real_name: String,
    pub kind: EnemyKind,
    pub corrupted: bool,
    /// Opaque weapon reference
    pub weapon: Option<String>,
    /// Opaque loot table key
    pub loot_table: String,
    pub level: u32,
    pub base: BaseStats,
    pub stats: CombatStats,
    pub status: StatusEffects,
    scaling: ScalingProfile,
}

impl CombatActor {
    /// Build and scale an actor. Prefer [`crate::entities::EnemyBuilder`].
    pub fn new(
        kind: EnemyKind,
        name: String,
        real_name: String,
        level: u32,
        base: &BaseStats,
        overrides: &StatOverrides,
        scaling: ScalingProfile,
    ) -> Self {
        let level = level.max(1);
        let seeded = seed_stats(base, level, overrides);
        let stats = scale_stats(base, level, &scaling);
        log::trace!("{}: seeded {:?}, scaled {:?}", real_name, seeded, stats);

        Self {
            name,
            real_name,
            kind,
            corrupted: false,
            weapon: None,
            loot_table: "none".to_string(),
            level,
            base: *base,
            stats,
            status: StatusEffects::new(),
            scaling,
        }
    }

    /// Difficulty and floor parameters frozen at spawn
    pub fn scaling(&self) -> &ScalingProfile {
        &self.scaling
    }

    pub fn hp(&self) -> i32 {
        self.stats.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.stats.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    pub fn apply_status(&mut self, name: &str, duration: i32) {
        self.status.apply(name, duration);
    }

    pub fn has_status(&self, name: &str) -> bool {
        self.status.has(name)
    }

    /// Call once per turn, before [`CombatActor::choose_action`]
    pub fn tick_status_effects(&mut self) -> StatusTickResult {
        let result = self.status.tick();
        for name in &result.expired {
            log::debug!("{} is no longer affected by {}", self.name, name);
        }
        result
    }

    pub fn basic_attack(
        &self,
        target: &mut impl Target,
        dice: &mut impl Dice,
        formula: &impl AttackFormula,
    ) -> ActionOutcome {
        abilities::basic_attack(self, target, dice, formula)
    }

    /// Take this enemy's turn against `target`.
    ///
    /// A staggered enemy loses the turn; the stagger itself is only removed
    /// by [`CombatActor::tick_status_effects`].
    pub fn choose_action(
        &mut self,
        target: &mut impl Target,
        dice: &mut impl Dice,
        formula: &impl AttackFormula,
    ) -> ActionOutcome {
        if self.has_status(STAGGER) {
            log::debug!("{} is staggered and loses the turn", self.name);
            return ActionOutcome::Staggered;
        }

        let outcome = match self.kind {
            EnemyKind::Generic => self.basic_attack(target, dice, formula),
            EnemyKind::Human => policy::human_turn(self, target, dice, formula),
            EnemyKind::Warrior => policy::warrior_turn(self, target, dice, formula),
            EnemyKind::Mage => policy::mage_turn(target, dice),
        };
        log::debug!("{} -> {:?}", self.name, outcome);
        outcome
    }

    /// Drop the disguise: the display name becomes the real name
    pub fn reveal_identity(&mut self) -> Reveal {
        self.name = self.real_name.clone();
        Reveal {
            name: self.real_name.clone(),
            corrupted: self.corrupted,
        }
    }
}

/// Lets the player's side of an encounter hit back
impl Target for CombatActor {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> i32 {
        self.stats.hp
    }

    fn defense(&self) -> i32 {
        self.stats.defense
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats.hp -= amount;
    }

    fn apply_status(&mut self, name: &str, duration: i32) {
        self.status.apply(name, duration);
    }

    fn has_status(&self, name: &str) -> bool {
        self.status.has(name)
    }

    fn item_count(&self) -> usize {
        0
    }

    fn destroy_item(&mut self, _index: usize) -> Option<String> {
        None
    }
}
