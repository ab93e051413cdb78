//! Terminal User Interface (TUI) module
//!
//! Provides the interactive terminal interface for managing short links

use std::io;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod action;
pub mod app;
pub mod constants;
pub mod event_handler;
pub mod link_modal;
pub mod ui;

use app::App;
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub fn run_tui() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events; a poll miss becomes one tick for animations and
        // in-flight submits
        if event::poll(TICK_RATE)? {
            let should_exit = event_handler::handle_event(app, event::read()?)?;
            if should_exit {
                return Ok(());
            }
        } else {
            app.on_tick();
        }
    }
}
