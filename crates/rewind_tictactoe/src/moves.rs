//! Presentation-ready derivations of a session: status line and move list.
//!
//! Front ends render these directly; nothing here is cached, every value
//! is recomputed from the session on each call.

use crate::rules::Outcome;
use crate::{Player, Position, Session, SortOrder};
use serde::Serialize;
use tracing::instrument;

/// Status line for the board being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A player has completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full with no line.
    #[display("Draw!")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    step: usize,
    location: Option<Position>,
    is_current: bool,
}

impl MoveEntry {
    /// History index this entry refers to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Cell played to reach this step.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// True when this entry is the snapshot being viewed.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Whether selecting the entry should jump to it.
    ///
    /// The current move is shown as plain text; game start always stays a
    /// jump target.
    pub fn is_jump_target(&self) -> bool {
        !self.is_current || self.step == 0
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(pos) => {
                let (row, col) = pos.coordinates();
                if self.is_jump_target() {
                    write!(f, "Go to move #{} ({}, {})", self.step, row, col)
                } else {
                    write!(f, "You are at move #{} ({}, {})", self.step, row, col)
                }
            }
            None => write!(f, "Go to game start"),
        }
    }
}

impl Session {
    /// Status line for the board being viewed.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Won { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.to_move()),
        }
    }

    /// The move list in display order.
    #[instrument(level = "trace", skip(self))]
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let entries = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                location: snapshot.location(),
                is_current: step == self.current_move(),
            });

        match self.sort_order() {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

/// Label for the button that flips the move-list order.
pub fn sort_toggle_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "Sort Descending",
        SortOrder::Descending => "Sort Ascending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(session: &Session) -> Vec<String> {
        session
            .move_entries()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_game_start_entry() {
        let session = Session::new();
        let entries = session.move_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_current());
        assert!(entries[0].is_jump_target());
        assert_eq!(entries[0].to_string(), "Go to game start");
    }

    #[test]
    fn test_labels_and_current_entry() {
        let mut session = Session::new();
        session.play(Position::Center).unwrap();
        session.play(Position::MiddleRight).unwrap();

        assert_eq!(
            labels(&session),
            vec![
                "Go to game start",
                "Go to move #1 (2, 2)",
                "You are at move #2 (2, 3)",
            ]
        );

        session.jump_to(1).unwrap();
        assert_eq!(
            labels(&session),
            vec![
                "Go to game start",
                "You are at move #1 (2, 2)",
                "Go to move #2 (2, 3)",
            ]
        );
    }

    #[test]
    fn test_descending_order() {
        let mut session = Session::new();
        session.play(Position::TopLeft).unwrap();
        session.toggle_sort_order();

        let steps: Vec<_> = session.move_entries().iter().map(MoveEntry::step).collect();
        assert_eq!(steps, vec![1, 0]);
    }

    #[test]
    fn test_status_lines() {
        let mut session = Session::new();
        assert_eq!(session.status().to_string(), "Next player: X");
        session.play(Position::TopLeft).unwrap();
        assert_eq!(session.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(sort_toggle_label(SortOrder::Ascending), "Sort Descending");
        assert_eq!(sort_toggle_label(SortOrder::Descending), "Sort Ascending");
    }
}
