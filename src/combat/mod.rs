//! Combat system

pub mod abilities;
pub mod actor;
pub mod damage;
pub mod dice;
pub mod outcome;
pub mod policy;
pub mod stats;
pub mod status;
pub mod target;

pub use actor::CombatActor;
pub use damage::{mitigate, AttackFormula, StandardAttack};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use outcome::{Action, ActionOutcome, Potion, Reveal, Strike};
pub use stats::{scale_stats, seed_stats, BaseStats, CombatStats, StatOverrides};
pub use status::{StatusEffect, StatusEffects, StatusTickResult, STAGGER};
pub use target::Target;
