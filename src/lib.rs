//! Rewind - two-player tic-tac-toe with time travel.
//!
//! # Architecture
//!
//! - **Game**: rules and session state live in [`rewind_tictactoe`]
//! - **TUI**: ratatui front end with keyboard and mouse input
//! - **Replay**: headless replay of a move sequence
//! - **Config**: optional TOML settings file
//!
//! # Example
//!
//! ```
//! use rewind::{SortOrder, replay};
//!
//! let (session, rejected) = replay(&[0, 1, 3, 4, 6], None, SortOrder::Ascending)?;
//! assert!(rejected.is_empty());
//! assert_eq!(session.status().to_string(), "Winner: X");
//! # Ok::<(), rewind::ReplayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;

pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{RejectedMove, ReplayError, ReplayReport, replay};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, JumpError, MoveEntry, MoveRejection, Outcome, Player, Position, Session, Snapshot,
    SortOrder, Square, Status,
};
