//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Session, Square};

/// Invariant: every snapshot extends its predecessor by one mark.
///
/// The new mark sits at the snapshot's location, that cell was empty
/// before, and every other cell is unchanged.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        session.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(location) = after.location() else {
                return false;
            };
            let Some(player) = after.board().get(location).player() else {
                return false;
            };

            before.board().get(location) == Square::Empty
                && &before.board().with_mark(location, player) == after.board()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous board"
    }
}
