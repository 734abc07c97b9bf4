//! Render tests for the terminal UI.

use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    style::{Color, Modifier},
};
use rewind::tui::{App, ClickAction, HitAreaRegistry, KeyIntent, draw};
use rewind::{Position, SortOrder};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

/// Draws one frame and stores its hit areas in the app.
fn draw_frame(app: &mut App) -> (Buffer, HitAreaRegistry) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut hits = HitAreaRegistry::new();
    terminal
        .draw(|f| {
            hits = draw(f, app);
        })
        .unwrap();
    app.set_hit_areas(hits.clone());
    (terminal.backend().buffer().clone(), hits)
}

/// Draws one frame and returns the screen text.
fn render(app: &mut App) -> (Vec<String>, HitAreaRegistry) {
    let (buffer, hits) = draw_frame(app);
    let rows = buffer
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect();
    (rows, hits)
}

/// Background colour at the centre of a board cell.
fn cell_bg(buffer: &Buffer, hits: &HitAreaRegistry, pos: Position) -> Color {
    buffer[center_of(hits, ClickAction::PlayCell(pos))].bg
}

fn screen_contains(rows: &[String], text: &str) -> bool {
    rows.iter().any(|row| row.contains(text))
}

fn center_of(hits: &HitAreaRegistry, action: ClickAction) -> (u16, u16) {
    let area = hits
        .areas()
        .iter()
        .find(|area| area.action == action)
        .expect("hit area registered");
    (
        area.rect.x + area.rect.width / 2,
        area.rect.y + area.rect.height / 2,
    )
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(SortOrder::Ascending);
    let (rows, hits) = render(&mut app);

    assert!(screen_contains(&rows, "Next player: X"));
    assert!(screen_contains(&rows, "Sort Descending"));
    assert!(screen_contains(&rows, "Go to game start"));

    for pos in Position::ALL {
        assert!(hits.areas().iter().any(|a| a.action == ClickAction::PlayCell(pos)));
    }
    assert!(hits.areas().iter().any(|a| a.action == ClickAction::ToggleSort));
    assert!(hits.areas().iter().any(|a| a.action == ClickAction::JumpTo(0)));
}

#[test]
fn test_click_cell_plays() {
    let mut app = App::new(SortOrder::Ascending);
    let (_, hits) = render(&mut app);

    let (x, y) = center_of(&hits, ClickAction::PlayCell(Position::TopRight));
    app.handle_click(x, y);

    assert_eq!(app.session().history().len(), 2);
    let (rows, _) = render(&mut app);
    assert!(screen_contains(&rows, "Next player: O"));
    assert!(screen_contains(&rows, "You are at move #1 (1, 3)"));
}

#[test]
fn test_current_move_is_not_clickable() {
    let mut app = App::new(SortOrder::Ascending);
    app.handle_intent(KeyIntent::PlayCell(Position::Center));
    let (_, hits) = render(&mut app);

    assert!(hits.areas().iter().any(|a| a.action == ClickAction::JumpTo(0)));
    assert!(!hits.areas().iter().any(|a| a.action == ClickAction::JumpTo(1)));
}

#[test]
fn test_click_history_entry_jumps() {
    let mut app = App::new(SortOrder::Ascending);
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        app.handle_intent(KeyIntent::PlayCell(pos));
    }
    let (_, hits) = render(&mut app);

    let (x, y) = center_of(&hits, ClickAction::JumpTo(1));
    app.handle_click(x, y);

    assert_eq!(app.session().current_move(), 1);
    assert_eq!(app.session().history().len(), 4);
    let (rows, _) = render(&mut app);
    assert!(screen_contains(&rows, "You are at move #1 (1, 1)"));
    assert!(screen_contains(&rows, "Next player: O"));
}

#[test]
fn test_click_toggle_reverses_list() {
    let mut app = App::new(SortOrder::Ascending);
    app.handle_intent(KeyIntent::PlayCell(Position::TopLeft));
    let (_, hits) = render(&mut app);

    let (x, y) = center_of(&hits, ClickAction::ToggleSort);
    app.handle_click(x, y);
    let (rows, _) = render(&mut app);

    assert_eq!(app.session().sort_order(), SortOrder::Descending);
    assert!(screen_contains(&rows, "Sort Ascending"));
    let current = rows.iter().position(|r| r.contains("You are at move #1")).unwrap();
    let start = rows.iter().position(|r| r.contains("Go to game start")).unwrap();
    assert!(current < start);
}

#[test]
fn test_winner_shown() {
    let mut app = App::new(SortOrder::Ascending);
    for index in [0, 1, 3, 4, 6] {
        app.handle_intent(KeyIntent::PlayCell(Position::from_index(index).unwrap()));
    }
    let (rows, hits) = render(&mut app);
    assert!(screen_contains(&rows, "Winner: X"));

    // Clicking an empty cell after the win changes nothing.
    let (x, y) = center_of(&hits, ClickAction::PlayCell(Position::BottomRight));
    app.handle_click(x, y);
    assert_eq!(app.session().history().len(), 6);
}

#[test]
fn test_cursor_highlighted() {
    let mut app = App::new(SortOrder::Ascending);
    let (buffer, hits) = draw_frame(&mut app);

    assert_eq!(cell_bg(&buffer, &hits, Position::Center), Color::White);
    assert_eq!(cell_bg(&buffer, &hits, Position::TopLeft), Color::Reset);
}

#[test]
fn test_winning_line_highlighted_after_keyboard_win() {
    let mut app = App::new(SortOrder::Ascending);
    for index in [0, 1, 3, 4, 6] {
        app.handle_intent(KeyIntent::PlayCell(Position::from_index(index).unwrap()));
    }
    assert_eq!(app.cursor(), Position::BottomLeft);
    let (buffer, hits) = draw_frame(&mut app);

    for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
        assert_eq!(cell_bg(&buffer, &hits, pos), Color::Green, "{pos}");
    }
    for pos in [Position::TopCenter, Position::Center, Position::BottomRight] {
        assert_ne!(cell_bg(&buffer, &hits, pos), Color::Green, "{pos}");
    }
    let cursor_cell = &buffer[center_of(&hits, ClickAction::PlayCell(Position::BottomLeft))];
    assert!(cursor_cell.modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_winning_line_highlighted_after_mouse_win() {
    let mut app = App::new(SortOrder::Ascending);
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ] {
        let (_, hits) = draw_frame(&mut app);
        let (x, y) = center_of(&hits, ClickAction::PlayCell(pos));
        app.handle_click(x, y);
    }
    let (buffer, hits) = draw_frame(&mut app);

    assert!(app.session().outcome().is_decided());
    for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
        assert_eq!(cell_bg(&buffer, &hits, pos), Color::Green, "{pos}");
    }
    // The untouched keyboard cursor still shows on the centre cell.
    assert_eq!(cell_bg(&buffer, &hits, Position::Center), Color::White);
}

#[test]
fn test_descending_list_numbered_by_row() {
    let mut app = App::new(SortOrder::Descending);
    app.handle_intent(KeyIntent::PlayCell(Position::TopLeft));
    app.handle_intent(KeyIntent::PlayCell(Position::Center));
    let (rows, _) = render(&mut app);

    assert!(screen_contains(&rows, "1. You are at move #2 (2, 2)"));
    assert!(screen_contains(&rows, "2. Go to move #1 (1, 1)"));
    assert!(screen_contains(&rows, "3. Go to game start"));
}
