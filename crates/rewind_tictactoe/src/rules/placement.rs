//! Rules-checked mark placement.

use super::outcome::evaluate;
use crate::{Board, MoveRejection, Player, Position};
use tracing::{instrument, trace};

/// Places `player`'s mark at `pos`, producing a new board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveRejection::GameOver`] if the board is already won or drawn.
/// - [`MoveRejection::SquareOccupied`] if `pos` is taken.
#[instrument(level = "debug", skip_all, fields(position = ?pos, player = %player))]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveRejection> {
    if evaluate(board).is_decided() {
        return Err(MoveRejection::GameOver);
    }

    if !board.is_empty(pos) {
        return Err(MoveRejection::SquareOccupied(pos));
    }

    trace!("Placing mark");
    Ok(board.with_mark(pos, player))
}
