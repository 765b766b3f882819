//! What an enemy can act upon
//!
//! The player model lives outside the combat core; enemies only need this
//! narrow view of it.

/// A combatant on the receiving end of an enemy's action
pub trait Target {
    fn name(&self) -> &str;

    fn hp(&self) -> i32;

    fn defense(&self) -> i32;

    /// Subtract HP. Not clamped: overkill leaves HP negative.
    fn take_damage(&mut self, amount: i32);

    fn apply_status(&mut self, name: &str, duration: i32);

    fn has_status(&self, name: &str) -> bool;

    /// Number of items that could be destroyed
    fn item_count(&self) -> usize;

    /// Destroy the item at `index`, returning its name
    fn destroy_item(&mut self, index: usize) -> Option<String>;
}
