//! History shape: a game-start root, in-range pointer, one location per move.

use super::Invariant;
use crate::{Board, Session};

/// Invariant: history starts at an empty board and the pointer is valid.
///
/// Snapshot 0 is the empty board with no location. Every later snapshot
/// records the cell that produced it. The pointer indexes a snapshot.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        let Some((root, moves)) = history.split_first() else {
            return false;
        };

        root.board() == &Board::new()
            && root.location().is_none()
            && moves.iter().all(|snapshot| snapshot.location().is_some())
            && session.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History starts at an empty board and the pointer is in range"
    }
}
