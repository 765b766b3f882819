//! Game module - encounter flow around the combat core

mod turn;

pub use turn::{enemy_turn, Encounter, TurnReport, Victor};
