//! Headless replay of a move sequence.

use derive_more::{Display, Error, From};
use rewind_tictactoe::{JumpError, MoveRejection, Outcome, Position, Session, SortOrder};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Replay failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {} is not on the board (expected 0-8)", _0)]
    #[from(ignore)]
    InvalidCell(#[error(not(source))] usize),

    /// The requested jump target does not exist.
    #[display("{}", _0)]
    Jump(JumpError),
}

/// A move the rules declined during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position of the move in the input list.
    pub input_index: usize,
    /// The cell that was requested.
    pub cell: usize,
    /// Why it was declined.
    pub reason: String,
}

/// Everything a replay shows: board, status, move list and rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Board rows as `X`, `O` and `.`.
    pub board: Vec<String>,
    /// Status line.
    pub status: String,
    /// Rules evaluation of the viewed board.
    pub outcome: Outcome,
    /// Index of the viewed snapshot.
    pub current_move: usize,
    /// Number of snapshots in history.
    pub history_len: usize,
    /// Move list labels in display order.
    pub moves: Vec<String>,
    /// Moves the rules declined.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Builds a report from a session.
    pub fn from_session(session: &Session, rejected: Vec<RejectedMove>) -> Self {
        Self {
            board: session
                .current_board()
                .display()
                .lines()
                .map(str::to_string)
                .collect(),
            status: session.status().to_string(),
            outcome: session.outcome(),
            current_move: session.current_move(),
            history_len: session.history().len(),
            moves: session
                .move_entries()
                .iter()
                .map(ToString::to_string)
                .collect(),
            rejected,
        }
    }

    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");
        for row in &self.board {
            out.push_str(row);
            out.push('\n');
        }
        out.push('\n');
        for (index, label) in self.moves.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, label));
        }
        for rejected in &self.rejected {
            out.push_str(&format!(
                "skipped #{} (cell {}): {}\n",
                rejected.input_index, rejected.cell, rejected.reason
            ));
        }
        out
    }
}

/// Plays `cells` on a fresh session, then optionally jumps.
///
/// Moves the rules decline are recorded and skipped.
///
/// # Errors
///
/// [`ReplayError::InvalidCell`] for an index outside 0-8, checked before
/// any move is played. [`ReplayError::Jump`] for a jump past history.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    sort_order: SortOrder,
) -> Result<(Session, Vec<RejectedMove>), ReplayError> {
    let positions = cells
        .iter()
        .map(|&cell| Position::from_index(cell).ok_or(ReplayError::InvalidCell(cell)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = Session::with_sort_order(sort_order);
    let mut rejected = Vec::new();

    for (input_index, pos) in positions.into_iter().enumerate() {
        if let Err(rejection) = session.play(pos) {
            warn!(input_index, %rejection, "Skipping rejected move");
            rejected.push(rejected_move(input_index, pos, rejection));
        }
    }

    if let Some(step) = jump {
        session.jump_to(step)?;
    }

    debug!(
        current_move = session.current_move(),
        rejected = rejected.len(),
        "Replay complete"
    );
    Ok((session, rejected))
}

fn rejected_move(input_index: usize, pos: Position, rejection: MoveRejection) -> RejectedMove {
    RejectedMove {
        input_index,
        cell: pos.to_index(),
        reason: rejection.to_string(),
    }
}
