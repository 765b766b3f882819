//! Item system

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::{Item, ItemCategory, ItemId};
