//! Application state and event handling.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use rewind_tictactoe::{MoveEntry, Position, Session, SortOrder};
use tracing::{debug, instrument};

use super::hit_area::{ClickAction, HitAreaRegistry};
use super::input::{KeyIntent, key_intent, move_cursor};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game session plus the UI-only state around it: board cursor,
/// focused pane, selected move-list row and the hit areas of the last
/// rendered frame.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hit_areas: HitAreaRegistry,
    should_quit: bool,
}

impl App {
    /// Creates a new application at game start.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self::with_session(Session::with_sort_order(sort_order))
    }

    /// Wraps an existing session.
    pub fn with_session(session: Session) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// Gets the game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the hit areas of the frame just drawn.
    pub fn set_hit_areas(&mut self, hit_areas: HitAreaRegistry) {
        self.hit_areas = hit_areas;
    }

    /// Handles one terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_intent(key_intent(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Hit-tests a click against the last frame.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, x: u16, y: u16) {
        match self.hit_areas.hit_test(x, y) {
            Some(action) => self.apply(action),
            None => debug!("Click outside hit areas"),
        }
    }

    /// Applies a key intent.
    #[instrument(skip(self))]
    pub fn handle_intent(&mut self, intent: KeyIntent) {
        match intent {
            KeyIntent::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyIntent::PlayCell(pos) => {
                self.cursor = pos;
                self.apply(ClickAction::PlayCell(pos));
            }
            KeyIntent::Activate => match self.focus {
                Focus::Board => self.apply(ClickAction::PlayCell(self.cursor)),
                Focus::Moves => {
                    if let Some(entry) = self.selected_entry()
                        && entry.is_jump_target()
                    {
                        self.apply(ClickAction::JumpTo(entry.step()));
                    }
                }
            },
            KeyIntent::Navigate(code) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Moves => self.move_selection(code),
            },
            KeyIntent::SwitchFocus => self.focus = self.focus.toggle(),
            KeyIntent::ToggleSort => self.apply(ClickAction::ToggleSort),
            KeyIntent::StepBack => {
                if let Some(step) = self.session.current_move().checked_sub(1) {
                    self.apply(ClickAction::JumpTo(step));
                }
            }
            KeyIntent::StepForward => {
                self.apply(ClickAction::JumpTo(self.session.current_move() + 1));
            }
            KeyIntent::Ignore => {}
        }
    }

    /// Runs one session transition.
    ///
    /// Rejected moves and jumps leave the session unchanged; the session
    /// logs the reason.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: ClickAction) {
        match action {
            ClickAction::PlayCell(pos) => {
                if self.session.play(pos).is_ok() {
                    self.select_current();
                }
            }
            ClickAction::JumpTo(step) => {
                if self.session.jump_to(step).is_ok() {
                    self.select_current();
                }
            }
            ClickAction::ToggleSort => {
                self.session.toggle_sort_order();
                self.select_current();
            }
        }
    }

    fn selected_entry(&self) -> Option<MoveEntry> {
        self.session.move_entries().get(self.selected).copied()
    }

    fn move_selection(&mut self, code: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        let last = self.session.history().len() - 1;
        self.selected = match code {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Points the move-list selection at the current move.
    fn select_current(&mut self) {
        let current = self.session.current_move();
        self.selected = self
            .session
            .move_entries()
            .iter()
            .position(|entry| entry.step() == current)
            .unwrap_or(0);
    }
}
