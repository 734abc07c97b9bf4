//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - two-player tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (optional)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Disable mouse capture
        #[arg(long)]
        no_mouse: bool,
    },

    /// Replay a sequence of moves and print the resulting position
    Replay {
        /// Cells to play in order, 0-8 row-major (e.g. `0,1,3,4,6`)
        #[arg(value_delimiter = ',', num_args = 0..)]
        cells: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            log_file: None,
            no_mouse: false,
        }
    }
}
