//! Command-line interface for strictly_slider.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Slider - sliding-tile puzzle engine
#[derive(Parser, Debug)]
#[command(name = "strictly_slider")]
#[command(about = "Generate and play sliding-tile puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a freshly shuffled puzzle
    Generate {
        /// Board edge length (3 through 6); overrides the config file
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Number of random slides in the shuffle walk
        #[arg(long)]
        shuffle_moves: Option<usize>,

        /// Emit the puzzle as JSON instead of a grid
        #[arg(long)]
        json: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a puzzle in the terminal
    Play {
        /// Board edge length (3 through 6); overrides the config file
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}
