//! Command-line interface for the terminal game.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use strictly_tictactoe::Difficulty;

/// Play tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with undo and a three-level computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with startup preferences
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Computer strength: easy, medium or hard (implies vs-ai)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,
}

/// Game mode as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans at one keyboard
    TwoPlayer,
    /// Human (X) against the computer (O)
    VsAi,
}
