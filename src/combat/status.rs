//! Status effects system
//!
//! Timed, named effects (stagger and friends) that count down once per turn.

use serde::{Deserialize, Serialize};

/// Skips the affected combatant's next action
pub const STAGGER: &str = "stagger";

/// A single timed effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub name: String,
    /// Turns remaining
    pub duration: i32,
}

/// Active effects on one combatant, at most one entry per name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

/// Result of ticking status effects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTickResult {
    /// Names of effects that ran out this tick, in application order
    pub expired: Vec<String>,
}

impl StatusTickResult {
    pub fn effects_expired(&self) -> bool {
        !self.expired.is_empty()
    }
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, or overwrite the duration of an existing one
    pub fn apply(&mut self, name: &str, duration: i32) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.name == name) {
            existing.duration = duration;
        } else {
            self.effects.push(StatusEffect {
                name: name.to_string(),
                duration,
            });
        }
    }

    /// Check if an effect is active
    pub fn has(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }

    /// Remaining duration of an effect
    pub fn duration(&self, name: &str) -> Option<i32> {
        self.effects.iter().find(|e| e.name == name).map(|e| e.duration)
    }

    /// Count every effect down by one turn and drop the ones that hit zero
    pub fn tick(&mut self) -> StatusTickResult {
        let mut result = StatusTickResult::default();

        for effect in &mut self.effects {
            effect.duration -= 1;
            if effect.duration <= 0 {
                result.expired.push(effect.name.clone());
            }
        }
        self.effects.retain(|e| e.duration > 0);

        result
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
