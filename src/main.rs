//! Mermaid Prompt - terminal form for building Mermaid diagram prompts
//!
//! Pick a diagram type and level of detail, describe the scenario, add
//! notes, and copy the generated prompt to the clipboard.

mod app;
mod clipboard;
mod config;
mod platform;
mod prompt;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clipboard::SystemClipboard;
use config::TuiConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "mermaid-prompt.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Config is read before logging so it can supply the filter
    let config_result = TuiConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    init_logging(&config);
    match &config_result {
        Ok(_) => tracing::info!(path = ?TuiConfig::config_path(), "Configuration loaded"),
        Err(err) => tracing::warn!("Ignoring unreadable configuration: {err:#}"),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, Arc::new(SystemClipboard));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("Exiting");
    Ok(())
}

/// Log to a file in the data directory, since the UI owns the terminal.
/// Falls back to stderr when the file cannot be opened.
fn init_logging(config: &TuiConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = TuiConfig::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    tracing::info!("Prompt form mounted");

    loop {
        let size = terminal.size()?;
        app.set_screen_size(size.width, size.height);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Pick up finished clipboard writes
        app.drain_copy_outcomes();

        // Let spawned copy tasks make progress between polls
        tokio::task::yield_now().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
