//! Rejections produced by the rules engine and the session.

use super::position::Position;
use derive_more::{Display, Error};

/// Why a move was declined.
///
/// A rejection leaves every board and the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move #{} is outside the history (length {})", step, len)]
pub struct JumpError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
