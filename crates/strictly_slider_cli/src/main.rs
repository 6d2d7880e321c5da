//! Strictly Slider - terminal front end
//!
//! Generates shuffled boards and plays them through the session driver.

#![warn(missing_docs)]

mod cli;
mod play;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_slider::{BoardSize, Puzzle, PuzzleConfig, create_puzzle_with};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for boards and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            size,
            seed,
            shuffle_moves,
            json,
            config,
        } => {
            let mut config = load_config(config.as_deref(), size)?;
            if shuffle_moves.is_some() {
                config = config.with_shuffle_moves(shuffle_moves);
            }
            run_generate(&config, seed, json)
        }
        Command::Play { size, config, seed } => {
            let config = load_config(config.as_deref(), size)?;
            let puzzle = shuffled(&config, seed)?;
            play::run(puzzle, &config).await
        }
    }
}

/// Reads the config file (if any) and applies the size override.
#[instrument]
fn load_config(path: Option<&Path>, size: Option<usize>) -> Result<PuzzleConfig> {
    let config = match path {
        Some(path) => PuzzleConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            debug!("No config file given, using defaults");
            PuzzleConfig::default()
        }
    };

    match size {
        Some(size) => Ok(config.with_board_size(BoardSize::new(size)?)),
        None => Ok(config),
    }
}

/// Shuffles a board, seeded when a seed is given.
fn shuffled(config: &PuzzleConfig, seed: Option<u64>) -> Result<Puzzle> {
    let size = config.board_size().get();
    let moves = config.effective_shuffle_moves();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(size, moves, ?seed, "Shuffling puzzle");
    Ok(create_puzzle_with(size, moves, &mut rng)?)
}

/// Print a shuffled board as a grid or as JSON.
fn run_generate(config: &PuzzleConfig, seed: Option<u64>, json: bool) -> Result<()> {
    let puzzle = shuffled(config, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        println!("{puzzle}");
    }
    Ok(())
}
