//! Terminal UI for rewind.

mod app;
mod hit_area;
mod input;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
pub use input::{KeyIntent, key_intent, move_cursor};
pub use terminal::{TerminalGuard, leave_tui_mode};
pub use ui::draw;

use anyhow::Result;
use crossterm::event;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::Settings;

/// Runs the TUI until the player quits.
///
/// The terminal is restored before returning, on success or failure.
#[instrument(skip(settings), fields(mouse = settings.mouse()))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting rewind TUI");

    let guard = TerminalGuard::enter(*settings.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*settings.sort_order());
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.session().history().len() - 1,
        outcome = %app.session().outcome(),
        "Session ended"
    );
    res
}

/// Draw, wait for one event, apply it, repeat.
///
/// Every handled event is followed by an explicit redraw at the top of
/// the loop.
fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            let hits = draw(f, app);
            app.set_hit_areas(hits);
        })?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
