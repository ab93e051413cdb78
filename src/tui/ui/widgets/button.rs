//! Form buttons
//!
//! Bordered push buttons for the modal's Cancel/Submit row. The loading
//! variant replaces the plain label with a spinner-prefixed one driven by
//! the event loop's tick.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse};

use crate::tui::constants::colors;

pub struct Button<'a> {
    label: &'a str,
    theme: Color,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            theme: Color::White,
            disabled: false,
        }
    }

    pub fn theme(mut self, color: Color) -> Self {
        self.theme = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else {
            Style::default().fg(self.theme).bold()
        }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.style())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(self.label)
            .style(self.style())
            .alignment(ratatui::layout::Alignment::Center)
            .block(self.block());
        frame.render_widget(button, area);
    }

    /// Render with a spinner ahead of the label
    pub fn render_loading(&self, frame: &mut Frame, area: Rect, state: &mut ThrobberState) {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.is_empty() {
            return;
        }

        // Center "<spinner> <label>" inside the button
        let width = (self.label.len() as u16 + 2).min(inner.width);
        let spin_area = Rect {
            x: inner.x + (inner.width - width) / 2,
            y: inner.y,
            width,
            height: 1,
        };

        let throbber = Throbber::default()
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(WhichUse::Spin)
            .label(self.label)
            .throbber_style(self.style())
            .style(self.style());

        frame.render_stateful_widget(throbber, spin_area, state);
    }
}
