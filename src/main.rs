//! Empleados TUI - Terminal User Interface for HR record entry
//!
//! A Ratatui-based form for capturing employee records with live
//! validation, field help text and transient notifications.

mod app;
mod config;
mod state;
mod tooltips;
mod ui;
mod validation;

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
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "empleados_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let tui_config = TuiConfig::load().unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(tui_config, Instant::now());
    let result = run_app(&mut terminal, &mut app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();

        // Expire toasts before drawing
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Faster polling while the entrance animation runs or toasts are
        // live (16ms = ~60fps), normal polling (100ms) otherwise
        let poll_duration = if app.needs_fast_poll(now) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key, Instant::now());
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on the next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
