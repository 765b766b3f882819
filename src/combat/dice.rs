//! Random rolls for combat
//!
//! Every chance-based decision in a fight goes through [`Dice`], so a fight
//! can be driven by a seeded RNG in play or by a fixed script in tests.

use rand::Rng;

/// Source of combat randomness
pub trait Dice {
    /// Uniform float in [0, 1)
    fn roll(&mut self) -> f64;

    /// True with probability `chance`
    fn chance(&mut self, chance: f64) -> bool {
        self.roll() < chance
    }

    /// Uniform integer in `low..=high`
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = f64::from(high - low + 1);
        let offset = (self.roll() * span).floor() as i32;
        low + offset.min(high - low)
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        ((self.roll() * len as f64).floor() as usize).min(len - 1)
    }
}

/// Adapter that draws rolls from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of rolls, wrapping around when it runs out.
/// An empty script always rolls 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// Number of rolls consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999_999)
    }
}
