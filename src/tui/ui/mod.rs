// UI submodules
mod common;
mod main_screen;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use main_screen::draw_main_screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::App;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_main_screen(frame, app, main_chunks[1]);
    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);

    // The modal draws over everything; the whole frame is its backdrop.
    let area = frame.area();
    app.modal.render(frame, &app.modal_props, area);
}
