//! TUI constants
//!
//! Central place for UI sizing, timing and colors so magic numbers do not
//! spread across the drawing code.

use std::time::Duration;

/// URL display truncation length in the link table
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// Event poll timeout; a miss produces one animation/progress tick
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Simulated latency between a modal submit and the store applying it,
/// so the loading state is observable in the demo app
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(600);

/// Popup size configuration
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// Width percentage (0-100)
    pub width: u16,
    /// Height percentage (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-popup size configuration
pub mod popup {
    use super::PopupSize;

    /// The create/edit/delete link modal
    pub const LINK_MODAL: PopupSize = PopupSize::new(62, 70);
}

/// Color theme
pub mod colors {
    use ratatui::style::Color;

    /// Primary accent
    pub const PRIMARY: Color = Color::Cyan;
    /// Success / create accent
    pub const SUCCESS: Color = Color::Green;
    /// Warning / edit accent
    pub const WARNING: Color = Color::Yellow;
    /// Error / delete accent
    pub const ERROR: Color = Color::Red;
    /// Secondary text
    pub const MUTED: Color = Color::DarkGray;
    /// Active field background
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// Active field foreground
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
