//! Session state: move history, current-move pointer and list order.
//!
//! A session is a small state machine over `(history, current_move)`.
//! It is in progress, won or drawn depending on how the rules evaluate
//! the board at the pointer. Decided sessions still allow time travel
//! through [`Session::jump_to`] but decline [`Session::play`].

use crate::invariants::debug_assert_invariants;
use crate::rules::{self, Outcome};
use crate::{Board, JumpError, MoveRejection, Player, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Order in which the move list is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One local game between two players sharing a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl Session {
    /// Creates a session at game start with an ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a session at game start with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_move: 0,
            sort_order,
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// When viewing an earlier snapshot, every later snapshot is discarded
    /// before the new one is appended.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejection`] from the rules; the session is unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveRejection> {
        let board = rules::apply_move(self.current_board(), pos, self.to_move())
            .inspect_err(|rejection| debug!(%rejection, "Move rejected"))?;

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting later history");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(Snapshot::after_move(board, pos));
        self.current_move = self.history.len() - 1;

        let outcome = self.outcome();
        info!(
            step = self.current_move,
            position = %pos,
            %outcome,
            "Move played"
        );

        debug_assert_invariants(self);
        Ok(())
    }

    /// Moves the pointer to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is not a recorded snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            let err = JumpError {
                step,
                len: self.history.len(),
            };
            debug!(%err, "Jump rejected");
            return Err(err);
        }
        self.current_move = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Flips the move-list order and returns the new order.
    #[instrument(skip(self), fields(sort_order = %self.sort_order))]
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
        self.sort_order
    }

    /// All snapshots from game start to the latest move.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// True when the pointer is on the latest snapshot.
    pub fn is_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The snapshot being viewed.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// The board being viewed.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Player to move at the pointer: X on even steps, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_move)
    }

    /// Rules evaluation of the board being viewed.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
