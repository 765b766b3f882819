//! Combat narration
//!
//! Turns structured combat results into the colored console lines the
//! player reads, and paces them out.

use std::fmt;
use std::time::Duration;

use crossterm::style::{style, Color, Stylize};

use crate::combat::{Action, ActionOutcome, Potion, Reveal, Strike};
use crate::game::TurnReport;

/// Display color of a narration line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Misses and the reveal
    Warning,
    /// Side notes like defense reduction
    Muted,
    Danger,
    Corrupt,
    Calm,
}

impl Tone {
    fn color(&self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Warning => Some(Color::Yellow),
            Tone::Muted => Some(Color::DarkGrey),
            Tone::Danger => Some(Color::Red),
            Tone::Corrupt => Some(Color::Magenta),
            Tone::Calm => Some(Color::Green),
        }
    }
}

/// One line of narration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone.color() {
            Some(color) => write!(f, "{}", style(&self.text).with(color)),
            None => f.write_str(&self.text),
        }
    }
}

/// Describe one enemy action against `target`
pub fn narrate_outcome(actor: &str, target: &str, outcome: &ActionOutcome) -> Vec<Line> {
    match outcome {
        ActionOutcome::Staggered => vec![Line::new(
            Tone::Plain,
            format!("{} is staggered and misses their turn!", actor),
        )],
        ActionOutcome::Missed { action } => {
            vec![Line::new(Tone::Warning, miss_text(actor, target, *action))]
        }
        ActionOutcome::Hit(strike) => narrate_strike(actor, target, strike),
        ActionOutcome::UsedPotion { potion, .. } => {
            let amount = potion.amount();
            let text = match potion {
                Potion::Health => {
                    format!("{} used Health Potion and restored {} HP!", actor, amount)
                }
                Potion::Strength => {
                    format!("{} used Strength Potion and increased strength by {}", actor, amount)
                }
                Potion::Defense => {
                    format!("{} used Defense Potion and increased defense by {}", actor, amount)
                }
            };
            vec![Line::new(Tone::Plain, text)]
        }
        ActionOutcome::BattleCry { .. } => vec![Line::new(
            Tone::Plain,
            format!("{} roars into the air, increasing their natural strength by +1", actor),
        )],
    }
}

fn miss_text(actor: &str, target: &str, action: Action) -> String {
    match action {
        Action::HeavyCharge => format!("{} charges at {} but misses!", actor, target),
        Action::Fireball | Action::EnergyBall => {
            format!("{} casts {}, but it misses!", actor, action.name())
        }
        _ => format!("{} swings at {} but misses!", actor, target),
    }
}

fn narrate_strike(actor: &str, target: &str, strike: &Strike) -> Vec<Line> {
    let mut lines = Vec::new();

    let headline = match strike.action {
        Action::HeavyCharge => {
            format!("{} charges at {} dealing {} damage!", actor, target, strike.damage)
        }
        Action::Fireball | Action::EnergyBall => format!(
            "{} casts {} at {} for {} damage!",
            actor,
            strike.action.name(),
            target,
            strike.damage
        ),
        _ => format!("{} attacks {} for {} damage!", actor, target, strike.damage),
    };
    lines.push(Line::new(Tone::Plain, headline));

    if strike.mitigated {
        lines.push(Line::new(
            Tone::Muted,
            format!("(Reduced from {} by defense)", strike.raw_damage),
        ));
    }
    lines.push(Line::new(
        Tone::Plain,
        format!("{} remaining HP: {}", target, strike.target_hp),
    ));

    if let Some(effect) = &strike.inflicted {
        lines.push(Line::new(Tone::Warning, format!("{} is hit by {}!", target, effect.name)));
    }
    if let Some(item) = &strike.burned_item {
        lines.push(Line::new(Tone::Danger, format!("{} was burned and is now unusable!", item)));
    }
    lines
}

fn narrate_expiry(report: &TurnReport) -> impl Iterator<Item = Line> + '_ {
    report.expired.iter().map(|name| {
        Line::new(
            Tone::Plain,
            format!("{} is no longer affected by {}.", report.actor, name),
        )
    })
}

/// Status expiry and action for a whole enemy turn
pub fn narrate_turn(report: &TurnReport, target: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = narrate_expiry(report).collect();
    lines.extend(narrate_outcome(&report.actor, target, &report.outcome));
    lines
}

/// The player's action, then whatever wore off after it
pub fn narrate_player_turn(report: &TurnReport, target: &str) -> Vec<Line> {
    let mut lines = narrate_outcome(&report.actor, target, &report.outcome);
    lines.extend(narrate_expiry(report));
    lines
}

pub fn narrate_reveal(reveal: &Reveal) -> Vec<Line> {
    let mut lines = vec![Line::new(
        Tone::Warning,
        format!("The veil lifts... it's a {}!", reveal.name),
    )];
    if reveal.corrupted {
        lines.push(Line::new(
            Tone::Danger,
            "A dark aura surrounds it... This enemy is CORRUPTED!",
        ));
        lines.push(Line::new(
            Tone::Corrupt,
            "The corruption has twisted its form and powers, making it far more dangerous than before!",
        ));
    } else {
        lines.push(Line::new(
            Tone::Calm,
            "This enemy appears to be normal, free of corruption.",
        ));
    }
    lines
}

/// Pause between narration beats. Zero disables pacing.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self { delay: Duration::ZERO }
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
