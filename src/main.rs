//! Rewind - terminal tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, ReplayReport, Settings};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play { log_file, no_mouse } => run_play(settings, log_file, no_mouse),
        Command::Replay { cells, jump, json } => run_replay(&settings, &cells, jump, json),
    }
}

/// Run the interactive game
fn run_play(
    settings: Settings,
    log_file: Option<std::path::PathBuf>,
    no_mouse: bool,
) -> Result<()> {
    let settings = match log_file {
        Some(path) => settings.with_log_file(path),
        None => settings,
    };
    let settings = if no_mouse {
        settings.with_mouse(false)
    } else {
        settings
    };

    rewind::init_file_logging(settings.log_file(), settings.log_filter())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    info!(?settings, "Settings resolved");

    rewind::tui::run_tui(&settings)
}

/// Replay moves and print the result
fn run_replay(settings: &Settings, cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    rewind::init_stderr_logging(settings.log_filter());

    let (session, rejected) = rewind::replay(cells, jump, *settings.sort_order())?;
    let report = ReplayReport::from_session(&session, rejected);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
