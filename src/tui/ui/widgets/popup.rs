//! Centered popup container
//!
//! Renders the shadow, backdrop clear, double border and themed title that
//! every overlay in linkboard shares, and hands the inner area back to the
//! caller.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::tui::constants::PopupSize;

pub struct Popup<'a> {
    title: &'a str,
    title_color: Color,
    border_color: Color,
    size: PopupSize,
    margin: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            size,
            margin: Margin::new(2, 1),
        }
    }

    /// Set title and border color together
    pub fn theme_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self.border_color = color;
        self
    }

    /// The rect this popup occupies inside `area`.
    ///
    /// Exposed separately so callers can hit-test mouse events against the
    /// dialog frame without rendering.
    pub fn outer(&self, area: Rect) -> Rect {
        centered_rect(self.size.width, self.size.height, area)
    }

    /// Render shadow, clear, border and title; returns the inner area.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = self.outer(area);

        // Shadow effect
        let shadow = Block::default().style(Style::default().bg(Color::Black));
        frame.render_widget(shadow, popup_area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.title_color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.border_color));
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// Create a rectangle centered in `r`, sized by percentages
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_contained() {
        let outer = Rect::new(0, 0, 80, 24);
        let inner = centered_rect(62, 70, outer);

        assert!(inner.x > 0);
        assert!(inner.y > 0);
        assert!(inner.right() < outer.right());
        assert!(inner.bottom() < outer.bottom());
    }

    #[test]
    fn test_centered_rect_full_size() {
        let outer = Rect::new(0, 0, 80, 24);
        let inner = centered_rect(100, 100, outer);
        assert_eq!(inner, outer);
    }

    #[test]
    fn test_popup_outer_matches_centered_rect() {
        let popup = Popup::new("Test", PopupSize::new(62, 70));
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(popup.outer(area), centered_rect(62, 70, area));
    }
}
