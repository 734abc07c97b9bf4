//! Rewind tic-tac-toe - pure game logic with time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation and move placement
//! - **Session**: move history, current-move pointer and list order
//! - **Moves**: status line and move list derived from a session
//! - **Invariants**: properties every session upholds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Outcome, Position, Session};
//!
//! let mut session = Session::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::MiddleLeft,
//!             Position::Center, Position::BottomLeft] {
//!     session.play(pos).unwrap();
//! }
//! assert!(matches!(session.outcome(), Outcome::Won { .. }));
//!
//! // Time travel back to move 2 and branch.
//! session.jump_to(2).unwrap();
//! session.play(Position::BottomRight).unwrap();
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod moves;
mod position;
mod session;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{JumpError, MoveRejection};
pub use moves::{MoveEntry, Status, sort_toggle_label};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, apply_move, evaluate};
pub use session::{Session, SortOrder};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
