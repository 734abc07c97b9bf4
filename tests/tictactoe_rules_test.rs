//! Rules engine tests over every possible board.

use rewind::{Board, MoveRejection, Outcome, Player, Position, Square};
use rewind_tictactoe::{LINES, apply_move, evaluate};

/// Every assignment of {empty, X, O} to the nine cells.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_evaluate_agrees_with_lines_and_fullness() {
    for board in all_boards() {
        let completed: Vec<_> = LINES
            .iter()
            .filter(|line| {
                let first = board.get(line[0]);
                first != Square::Empty && line.iter().all(|pos| board.get(*pos) == first)
            })
            .collect();
        let full = board.occupied_count() == 9;

        match evaluate(&board) {
            Outcome::Won { player, line } => {
                assert_eq!(Some(&&line), completed.first(), "{}", board.display());
                assert!(line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)));
            }
            Outcome::Draw => {
                assert!(completed.is_empty());
                assert!(full);
            }
            Outcome::InProgress => {
                assert!(completed.is_empty());
                assert!(!full);
            }
        }
    }
}

#[test]
fn test_apply_move_never_mutates_and_rejects_illegal() {
    for board in all_boards().step_by(7) {
        let decided = evaluate(&board) != Outcome::InProgress;
        for pos in Position::ALL {
            let before = board;
            let result = apply_move(&board, pos, Player::X);
            assert_eq!(board, before);

            match result {
                Ok(next) => {
                    assert!(!decided);
                    assert!(board.is_empty(pos));
                    assert_eq!(next.get(pos), Square::Occupied(Player::X));
                    assert_eq!(next.occupied_count(), board.occupied_count() + 1);
                }
                Err(MoveRejection::GameOver) => assert!(decided),
                Err(MoveRejection::SquareOccupied(p)) => {
                    assert!(!decided);
                    assert_eq!(p, pos);
                    assert!(!board.is_empty(pos));
                }
            }
        }
    }
}
