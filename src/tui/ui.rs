//! Stateless UI rendering for the game.
//!
//! [`draw`] renders one frame from the app state and returns the hit
//! areas of every clickable widget in it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{MoveEntry, Player, Position, Square, Status, sort_toggle_label};

use super::app::{App, Focus};
use super::hit_area::{ClickAction, HitAreaRegistry};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const LEFT_PANE_WIDTH: u16 = BOARD_WIDTH + 4;

/// Renders the whole screen and returns its hit areas.
pub fn draw(frame: &mut Frame, app: &App) -> HitAreaRegistry {
    let mut hits = HitAreaRegistry::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Game
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LEFT_PANE_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    draw_game(frame, body[0], app, &mut hits);
    draw_history(frame, body[1], app, &mut hits);

    let help = Paragraph::new("Click/1-9/Enter: play | Tab: moves | [ ]: step | S: sort | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(BOARD_HEIGHT + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let status = app.session().status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[0]);

    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    draw_board(frame, center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT), app, hits);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);

    for row in 0..3 {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, row, hits);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, hits: &mut HitAreaRegistry) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
            hits.register(cols[col * 2], ClickAction::PlayCell(pos));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let session = app.session();
    let square = session.current_board().get(pos);
    let winning = session
        .outcome()
        .line()
        .is_some_and(|line| line.contains(&pos));

    let (symbol, mut style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let cursor = app.focus() == Focus::Board && pos == app.cursor();
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
        if cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
    } else if cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![Line::from(""), Line::from(symbol)];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let toggle = Paragraph::new(sort_toggle_label(app.session().sort_order()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[0]);
    hits.register(chunks[0], ClickAction::ToggleSort);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Moves))
        .title("Moves");
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let entries = app.session().move_entries();
    let visible = usize::from(inner.height);
    if visible == 0 {
        return;
    }
    let offset = (app.selected() + 1).saturating_sub(visible);

    for (row, (index, entry)) in entries.iter().enumerate().skip(offset).take(visible).enumerate() {
        let rect = Rect {
            x: inner.x,
            y: inner.y + row as u16,
            width: inner.width,
            height: 1,
        };
        let selected = app.focus() == Focus::Moves && index == app.selected();
        frame.render_widget(Paragraph::new(entry_line(index + 1, entry, selected)), rect);

        if entry.is_jump_target() {
            hits.register(rect, ClickAction::JumpTo(entry.step()));
        }
    }
}

/// `number` is the row's position in the list as shown.
fn entry_line(number: usize, entry: &MoveEntry, selected: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let style = if entry.is_jump_target() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::raw(marker),
        Span::raw(format!("{number}. ")),
        Span::styled(entry.to_string(), style),
    ])
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); usize::from(area.height)];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
