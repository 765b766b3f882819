//! Inventory system
//!
//! An ordered bag of items. Order is stable so index-based removal picks the
//! same item every time for the same roll.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Player inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create a new inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item to inventory
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item by position
    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Get item by position
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::templates;

    #[test]
    fn test_add_and_remove() {
        let mut inventory = Inventory::new();
        inventory.add_item(templates::health_potion(1));
        inventory.add_item(templates::rusty_dagger(2));
        inventory.add_item(templates::mana_potion(3));

        let removed = inventory.remove_at(1);
        assert_eq!(removed.map(|i| i.name), Some("Rusty Dagger".to_string()));
        assert_eq!(inventory.count(), 2);
        assert_eq!(inventory.get(1).map(|i| i.id), Some(3));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut inventory = Inventory::new();
        assert!(inventory.remove_at(0).is_none());
        inventory.add_item(templates::health_potion(1));
        assert!(inventory.remove_at(1).is_none());
        assert!(inventory.remove_at(0).is_some());
        assert!(inventory.is_empty());
    }
}
