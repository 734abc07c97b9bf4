//! History snapshots.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A board paired with the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) location: Option<Position>,
}

impl Snapshot {
    /// The game-start snapshot: empty board, no location.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// A snapshot reached by playing at `location`.
    pub fn after_move(board: Board, location: Position) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this snapshot, `None` for game start.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// The player whose mark sits at [`Snapshot::location`].
    pub fn mover(&self) -> Option<Player> {
        self.location.and_then(|pos| self.board.get(pos).player())
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
