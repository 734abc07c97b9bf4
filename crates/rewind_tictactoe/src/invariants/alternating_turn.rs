//! Alternating turn invariant: X places on odd snapshots, O on even.

use super::Invariant;
use crate::{Player, Session};

/// Invariant: the mark reaching snapshot `n` belongs to the player to
/// move at step `n - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| snapshot.mover() == Some(Player::for_step(step - 1)))
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
