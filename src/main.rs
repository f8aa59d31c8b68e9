//! Trivia Form TUI - add questions to a trivia backend from the terminal
//!
//! A Ratatui form that loads the backend's categories and submits new
//! questions over its JSON HTTP API.

mod api;
mod app;
mod config;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = TuiConfig::load()?;
    let api = config.api_client()?;
    tracing::info!(base_url = api.base_url(), "Using trivia API");

    let mut app = App::new(Arc::new(api), config.error_display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.mount();
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send logs to a file; the terminal belongs to the UI while it runs
fn init_logging() -> Result<()> {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "trivia_form_tui=info".into()),
    );

    match config::log_path() {
        Some(path) => {
            let file = config::open_log_file(&path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        // No home directory to log into
        None => registry.init(),
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished requests before drawing
        app.drain_actions();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short poll keeps request results flowing while idle
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key);
                    }
                }
            }
        }

        // Let spawned requests make progress on the runtime
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
