//! Structured results of combat actions
//!
//! Combat functions never print. They return these values and the caller
//! decides how to narrate them.

use serde::{Deserialize, Serialize};

use super::status::StatusEffect;

/// Every action an enemy can take on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    BasicAttack,
    HeavyCharge,
    Fireball,
    EnergyBall,
    UseItem,
    BattleCry,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::BasicAttack => "Attack",
            Action::HeavyCharge => "Heavy Charge",
            Action::Fireball => "Fireball",
            Action::EnergyBall => "Energy Ball",
            Action::UseItem => "Use Item",
            Action::BattleCry => "Battle Cry",
        }
    }
}

/// Potions a corrupted human carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Potion {
    Health,
    Strength,
    Defense,
}

impl Potion {
    pub const ALL: [Potion; 3] = [Potion::Health, Potion::Strength, Potion::Defense];

    pub fn name(&self) -> &'static str {
        match self {
            Potion::Health => "Health Potion",
            Potion::Strength => "Strength Potion",
            Potion::Defense => "Defense Potion",
        }
    }

    /// HP restored or stat points gained
    pub fn amount(&self) -> i32 {
        match self {
            Potion::Health => 25,
            Potion::Strength | Potion::Defense => 5,
        }
    }
}

/// A landed hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub action: Action,
    /// Damage before defense; equals `damage` for spells
    pub raw_damage: i32,
    /// HP actually removed from the target
    pub damage: i32,
    /// Target defense was positive and reduced the hit
    pub mitigated: bool,
    /// Target HP after the hit; may be negative
    pub target_hp: i32,
    /// Status applied to the target as a follow-up
    pub inflicted: Option<StatusEffect>,
    /// Name of an inventory item destroyed by the hit
    pub burned_item: Option<String>,
}

/// What happened when an enemy took its turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Staggered; the turn was lost
    Staggered,
    Missed { action: Action },
    Hit(Strike),
    UsedPotion {
        potion: Potion,
        /// The acting enemy's HP after drinking
        hp: i32,
        strength: i32,
        defense: i32,
    },
    BattleCry { strength: i32 },
}

impl ActionOutcome {
    /// HP the target lost
    pub fn damage_dealt(&self) -> i32 {
        match self {
            ActionOutcome::Hit(strike) => strike.damage,
            _ => 0,
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            ActionOutcome::Staggered => None,
            ActionOutcome::Missed { action } => Some(*action),
            ActionOutcome::Hit(strike) => Some(strike.action),
            ActionOutcome::UsedPotion { .. } => Some(Action::UseItem),
            ActionOutcome::BattleCry { .. } => Some(Action::BattleCry),
        }
    }
}

/// Result of lifting an enemy's disguise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub name: String,
    pub corrupted: bool,
}
