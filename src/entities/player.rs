//! Player stand-in
//!
//! The real player model (levelling, equipment, menus) belongs to the game.
//! This is the minimal combatant the encounter runner and tests fight with.

use serde::{Deserialize, Serialize};

use crate::combat::{StatusEffects, StatusTickResult, Target};
use crate::items::item::templates;
use crate::items::Inventory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub strength: i32,
    pub defense: i32,
    pub status: StatusEffects,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(name: impl Into<String>, max_hp: i32, strength: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            strength,
            defense,
            status: StatusEffects::new(),
            inventory: Inventory::new(),
        }
    }

    /// A fresh adventurer with a small starting kit
    pub fn adventurer(name: impl Into<String>) -> Self {
        let mut player = Self::new(name, 100, 12, 4);
        player.inventory.add_item(templates::health_potion(1));
        player.inventory.add_item(templates::health_potion(2));
        player.inventory.add_item(templates::mana_potion(3));
        player.inventory.add_item(templates::rusty_dagger(4));
        player.inventory.add_item(templates::leather_cap(5));
        player
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn tick_status_effects(&mut self) -> StatusTickResult {
        self.status.tick()
    }
}

impl Target for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> i32 {
        self.hp
    }

    fn defense(&self) -> i32 {
        self.defense
    }

    fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    fn apply_status(&mut self, name: &str, duration: i32) {
        self.status.apply(name, duration);
    }

    fn has_status(&self, name: &str) -> bool {
        self.status.has(name)
    }

    fn item_count(&self) -> usize {
        self.inventory.count()
    }

    fn destroy_item(&mut self, index: usize) -> Option<String> {
        self.inventory.remove_at(index).map(|item| item.name)
    }
}
