//! Towerfall - Entry Point
//!
//! Runs a single encounter on the console: one enemy, scaled for the
//! chosen floor and difficulty, against a starting adventurer.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use towerfall::combat::{RngDice, StandardAttack};
use towerfall::data::{DataManager, DEFAULT_ENEMIES_PATH};
use towerfall::entities::{EnemyKind, Player};
use towerfall::game::{Encounter, Victor};
use towerfall::progression::{Difficulty, WorldContext};
use towerfall::ui::{narrate_player_turn, narrate_reveal, narrate_turn, Line, Pacing};

#[derive(Debug, Parser)]
#[command(name = "towerfall", version, about = "Fight one floor of the tower")]
struct Args {
    /// Enemy kind: generic, human, warrior or mage
    #[arg(short, long, default_value = "human", value_parser = parse_kind)]
    enemy: EnemyKind,

    /// Enemy level (values below 1 are raised to 1)
    #[arg(short, long, default_value_t = 1)]
    level: i32,

    /// Tower floor, 0 is the ground floor
    #[arg(short, long, default_value_t = 0)]
    floor: u32,

    /// easy, normal, hard or hardcore
    #[arg(short, long, default_value = "normal")]
    difficulty: Difficulty,

    /// Seed for reproducible fights
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of rounds before the fight is called off
    #[arg(long, default_value_t = 50)]
    rounds: u32,

    /// Enemy template file (RON)
    #[arg(long, default_value = DEFAULT_ENEMIES_PATH)]
    data: PathBuf,

    /// Write the default enemy templates to --data and exit
    #[arg(long)]
    export_data: bool,

    /// Skip the pauses between messages
    #[arg(long)]
    fast: bool,

    /// Print one JSON turn report per line instead of narration
    #[arg(long)]
    json: bool,
}

fn parse_kind(s: &str) -> Result<EnemyKind, String> {
    EnemyKind::from_id(s).ok_or_else(|| format!("unknown enemy kind '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    log::info!("Starting Towerfall v{}", env!("CARGO_PKG_VERSION"));

    if args.export_data {
        towerfall::data::loader::export_default_enemies(&args.data)
            .with_context(|| format!("exporting templates to {:?}", args.data))?;
        println!("Wrote default enemy templates to {}", args.data.display());
        return Ok(());
    }

    let result = run_encounter(&args);
    if let Err(ref e) = result {
        log::error!("Encounter ended with error: {}", e);
    }
    log::info!("Towerfall shut down cleanly");
    result
}

/// Log to a file so log lines don't interleave with the narration
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("towerfall.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(env_logger::Target::Stderr);
        }
    }
    builder.init();
}

fn run_encounter(args: &Args) -> Result<()> {
    let world = WorldContext::new(args.difficulty, args.floor);
    let data = DataManager::new(&args.data);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut dice = RngDice::new(rng);
    let formula = StandardAttack;
    let pacing = if args.fast || args.json {
        Pacing::instant()
    } else {
        Pacing::new(Duration::from_secs(1))
    };

    let enemy = data.enemies.spawn(args.enemy, args.level, &world);
    log::info!(
        "Encounter: {} level {} on floor {} ({})",
        enemy.real_name,
        enemy.level,
        world.floor,
        world.difficulty
    );

    let mut player = Player::adventurer("Hero");
    let mut encounter = Encounter::new(enemy);

    if !args.json {
        say(&[Line::plain(format!(
            "A {} blocks the stairs. (HP {}/{})",
            encounter.enemy.name,
            encounter.enemy.hp(),
            encounter.enemy.max_hp()
        ))]);
    }

    while encounter.round() < args.rounds {
        if encounter.round() == 0 {
            if let Some(reveal) = encounter.reveal() {
                if !args.json {
                    say(&narrate_reveal(&reveal));
                    pacing.pause();
                }
            }
        }

        // Player side
        let report = encounter.player_turn(&mut player, &formula);
        if args.json {
            println!("{}", serde_json::to_string(&report).context("encoding turn report")?);
        } else {
            say(&narrate_player_turn(&report, &encounter.enemy.name));
            pacing.pause();
        }
        if encounter.victor(&player).is_some() {
            break;
        }

        // Enemy side
        let report = encounter.enemy_turn(&mut player, &mut dice, &formula);
        if args.json {
            println!("{}", serde_json::to_string(&report).context("encoding turn report")?);
        } else {
            say(&narrate_turn(&report, &player.name));
            pacing.pause();
        }
        if encounter.victor(&player).is_some() {
            break;
        }
    }

    let verdict = match encounter.victor(&player) {
        Some(Victor::Player) => format!("{} is defeated!", encounter.enemy.name),
        Some(Victor::Enemy) => format!("{} has fallen on floor {}.", player.name, world.floor),
        None => format!("Both sides withdraw after {} rounds.", encounter.round()),
    };
    log::info!("{}", verdict);
    if !args.json {
        say(&[Line::plain(verdict)]);
    }
    Ok(())
}

fn say(lines: &[Line]) {
    for line in lines {
        println!("{}", line);
        println!();
    }
}
