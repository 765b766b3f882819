//! Damage calculation
//!
//! The raw attack formula is supplied by the game; this module owns only
//! the defense mitigation applied on top of it.

/// Raw attack value from an attacker's strength plus an ability bonus
pub trait AttackFormula {
    fn calculate_attack(&self, strength: i32, bonus: i32) -> i32;
}

impl<F> AttackFormula for F
where
    F: Fn(i32, i32) -> i32,
{
    fn calculate_attack(&self, strength: i32, bonus: i32) -> i32 {
        self(strength, bonus)
    }
}

/// Plain `strength + bonus`, used by the bundled encounter runner
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAttack;

impl AttackFormula for StandardAttack {
    fn calculate_attack(&self, strength: i32, bonus: i32) -> i32 {
        strength + bonus
    }
}

/// Damage left after the defender's flat defense. Always at least 1.
pub fn mitigate(raw_damage: i32, defense: i32) -> i32 {
    (raw_damage - defense).max(1)
}
