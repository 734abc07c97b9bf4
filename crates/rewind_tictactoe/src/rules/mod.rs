//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board and
//! placing marks. Rules never touch session state; the session asks
//! them whether a move is legal and what the outcome is.

pub mod draw;
pub mod outcome;
pub mod placement;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use placement::apply_move;
pub use win::{LINES, Line, winning_line};
