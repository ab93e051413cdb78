//! Modal rendering
//!
//! Draws nothing while closed. While open: the themed popup container, the
//! two fields with their enablement presentation, the delete-mode warning,
//! and the Cancel/Submit button row. Records the rects the mouse handler
//! hit-tests against.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::constants::{colors, popup};
use crate::tui::ui::widgets::{Button, InputField, Popup};

use super::{FormField, HitAreas, LinkModal, ModalMode, ModalProps};

impl LinkModal {
    pub fn render(&mut self, frame: &mut Frame, props: &ModalProps, area: Rect) {
        self.sync(props);
        if !props.open {
            self.areas = None;
            return;
        }

        let container =
            Popup::new(props.mode.title(), popup::LINK_MODAL).theme_color(props.mode.theme_color());
        let dialog = container.outer(area);
        let inner = container.render(frame, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // slug + violation line
                Constraint::Length(4), // url + violation line
                Constraint::Length(1), // delete warning
                Constraint::Length(3), // buttons
            ])
            .split(inner);

        let violation_for = |field: FormField| {
            self.violation
                .as_ref()
                .filter(|v| v.field == field)
                .map(|v| v.message.as_str())
        };

        let readonly = props.mode == ModalMode::Delete;

        InputField::new("Slug", &props.form.slug)
            .required()
            .placeholder("my-link")
            .active(self.focus == Some(FormField::Slug) && !props.loading)
            .disabled(!FormField::Slug.is_editable(props.mode) || props.loading)
            .readonly(readonly)
            .error(violation_for(FormField::Slug))
            .render(frame, chunks[0]);

        InputField::new("Destination URL", &props.form.url)
            .required()
            .placeholder("https://google.com")
            .active(self.focus == Some(FormField::Url) && !props.loading)
            .disabled(!FormField::Url.is_editable(props.mode) || props.loading)
            .readonly(readonly)
            .error(violation_for(FormField::Url))
            .render(frame, chunks[1]);

        if props.mode == ModalMode::Delete {
            let warning = Paragraph::new(Line::from(Span::styled(
                "This action cannot be undone!",
                Style::default().fg(colors::ERROR).bold(),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(warning, chunks[2]);
        }

        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);

        Button::new("Cancel")
            .disabled(props.loading)
            .render(frame, button_row[0]);

        let submit = Button::new(props.mode.submit_label())
            .theme(props.mode.theme_color())
            .disabled(props.loading);
        if props.loading {
            submit.render_loading(frame, button_row[1], &mut self.throbber);
        } else {
            submit.render(frame, button_row[1]);
        }

        // hit-test against the input box itself, not its violation line
        let field_rect = |chunk: Rect| Rect {
            height: chunk.height.min(3),
            ..chunk
        };
        self.areas = Some(HitAreas {
            overlay: area,
            dialog,
            slug: field_rect(chunks[0]),
            url: field_rect(chunks[1]),
            cancel: button_row[0],
            submit: button_row[1],
        });
    }
}
