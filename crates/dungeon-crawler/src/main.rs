//! Dungeon crawler command line driver
//!
//! Commands:
//! - `check <level>` - validate a level file and print it
//! - `play <level> --moves <keys>` - replay a key sequence turn by turn
//! - `grow <level> [--times N]` - double the dungeon and print it

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use dc_core::action::Input;
use dc_core::{GameState, SymbolTable};

#[derive(Parser)]
#[command(name = "dungeon-crawler")]
#[command(about = "Load, replay and grow dungeon crawler levels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON symbol table overriding the default glyphs and keys
    #[arg(short, long, global = true)]
    symbols: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a level file
    Check {
        level: PathBuf,
    },
    /// Replay a sequence of keys against a level
    Play {
        level: PathBuf,
        /// Keys to replay, one per turn
        #[arg(short, long)]
        moves: String,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Double the dungeon's dimensions
    Grow {
        level: PathBuf,
        #[arg(short, long, default_value_t = 1)]
        times: u32,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let symbols = match &cli.symbols {
        Some(path) => SymbolTable::load(path)
            .with_context(|| format!("loading symbol table {}", path.display()))?,
        None => SymbolTable::default(),
    };

    match cli.command {
        Commands::Check { level } => {
            let state = load(&level, &symbols)?;
            println!(
                "{}x{} level, player at ({}, {})",
                state.map.rows(),
                state.map.cols(),
                state.player.row,
                state.player.col
            );
            print!("{}", state.render(&symbols));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Play { level, moves, json } => {
            let mut state = load(&level, &symbols)?;
            let caught = play(&mut state, &moves, &symbols);
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", state.render(&symbols));
                println!("treasure: {}, turns: {}", state.player.treasure, state.turns);
            }
            Ok(if caught {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Grow { level, times } => {
            let mut state = load(&level, &symbols)?;
            for _ in 0..times {
                state.grow().context("growing dungeon")?;
            }
            info!(
                "grew {} to {}x{}",
                level.display(),
                state.map.rows(),
                state.map.cols()
            );
            print!("{}", state.render(&symbols));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path, symbols: &SymbolTable) -> Result<GameState> {
    GameState::load(path, symbols).with_context(|| format!("loading level {}", path.display()))
}

/// Replay keys until they run out, the player leaves the room, a monster
/// catches the player or the quit key is read. Returns whether the player was caught.
fn play(state: &mut GameState, moves: &str, symbols: &SymbolTable) -> bool {
    for key in moves.chars().filter(|c| !c.is_whitespace()) {
        let direction = match Input::parse(key, symbols) {
            Input::Quit => {
                debug!("quit key read after {} turns", state.turns);
                break;
            }
            Input::Move(direction) => direction,
        };
        let outcome = state.take_turn(direction);
        println!(
            "turn {}: {} -> {}{}",
            state.turns,
            direction,
            outcome.status,
            if outcome.caught { " (caught)" } else { "" }
        );
        if outcome.caught {
            return true;
        }
        if outcome.status.ends_room() {
            break;
        }
    }
    false
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
