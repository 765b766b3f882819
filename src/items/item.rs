//! Item definitions
//!
//! Items are opaque to combat: enemies only ever see a name, and the mage
//! can burn one.

use serde::{Deserialize, Serialize};

/// Unique identifier for item instances
pub type ItemId = u64;

/// Item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Misc,
}

/// A carried item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

/// Common starting items
pub mod templates {
    use super::*;

    pub fn health_potion(id: ItemId) -> Item {
        Item::new(id, "Health Potion", ItemCategory::Consumable)
    }

    pub fn mana_potion(id: ItemId) -> Item {
        Item::new(id, "Mana Potion", ItemCategory::Consumable)
    }

    pub fn rusty_dagger(id: ItemId) -> Item {
        Item::new(id, "Rusty Dagger", ItemCategory::Weapon)
    }

    pub fn leather_cap(id: ItemId) -> Item {
        Item::new(id, "Leather Cap", ItemCategory::Armor)
    }
}
