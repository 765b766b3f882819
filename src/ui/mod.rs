//! User interface - console narration of combat

pub mod narration;

pub use narration::{
    narrate_outcome, narrate_player_turn, narrate_reveal, narrate_turn, Line, Pacing, Tone,
};
