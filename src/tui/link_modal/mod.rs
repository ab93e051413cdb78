//! The link modal component
//!
//! A controlled modal for managing one slug -> destination URL mapping in
//! three modes: create, edit, delete. The parent owns every prop
//! ([`ModalProps`]); the component renders from them and relays events back
//! as [`ModalAction`](crate::tui::action::ModalAction) values. It keeps no
//! state of its own beyond transient UI bookkeeping: the focused field, the
//! rects of the last render (for mouse hit-testing), the spinner animation,
//! a pending constraint violation, and the `(open, mode)` pair it last saw.

mod events;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;
use throbber_widgets_tui::ThrobberState;

use crate::tui::constants::colors;

/// Modal mode, selecting copy, theme and field enablement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Create,
    Edit,
    Delete,
}

impl ModalMode {
    /// Dialog title
    pub fn title(self) -> &'static str {
        match self {
            ModalMode::Create => "Create New Link",
            ModalMode::Edit => "Edit Link",
            ModalMode::Delete => "Are you sure you want to delete this link?",
        }
    }

    /// Submit button label
    pub fn submit_label(self) -> &'static str {
        match self {
            ModalMode::Create => "Create Link",
            ModalMode::Edit => "Save Changes",
            ModalMode::Delete => "Delete Link",
        }
    }

    /// Title, border and submit button accent
    pub fn theme_color(self) -> Color {
        match self {
            ModalMode::Create => colors::SUCCESS,
            ModalMode::Edit => colors::WARNING,
            ModalMode::Delete => colors::ERROR,
        }
    }
}

/// The controlled form record. Owned by the parent; the modal never mutates
/// it, it emits a full merged copy on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkFormData {
    pub slug: String,
    pub url: String,
}

impl LinkFormData {
    pub fn new<S: Into<String>, U: Into<String>>(slug: S, url: U) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
        }
    }

    /// Merge one changed field into a copy of the record
    fn with_field(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Slug => next.slug = value,
            FormField::Url => next.url = value,
        }
        next
    }
}

/// Everything the parent passes down each frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalProps {
    /// Closed modals render nothing and consume no events
    pub open: bool,
    pub mode: ModalMode,
    pub form: LinkFormData,
    /// Disables every interactive control and shows the spinner
    pub loading: bool,
}

/// The two form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Slug,
    Url,
}

impl FormField {
    const ALL: [Self; 2] = [Self::Slug, Self::Url];

    /// The enablement matrix: which field accepts edits in which mode
    pub fn is_editable(self, mode: ModalMode) -> bool {
        match (self, mode) {
            (FormField::Slug, ModalMode::Create) => true,
            (FormField::Slug, ModalMode::Edit) => false,
            (FormField::Slug, ModalMode::Delete) => false,
            (FormField::Url, ModalMode::Create) => true,
            (FormField::Url, ModalMode::Edit) => true,
            (FormField::Url, ModalMode::Delete) => false,
        }
    }

    /// Next field that can take focus in `mode`; stays put if none other can
    pub fn next(self, mode: ModalMode) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        for step in 1..=Self::ALL.len() {
            let candidate = Self::ALL[(idx + step) % Self::ALL.len()];
            if candidate.is_editable(mode) {
                return candidate;
            }
        }
        self
    }

    /// Previous focusable field in `mode`
    pub fn prev(self, mode: ModalMode) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        for step in 1..=Self::ALL.len() {
            let candidate = Self::ALL[(idx + Self::ALL.len() - step) % Self::ALL.len()];
            if candidate.is_editable(mode) {
                return candidate;
            }
        }
        self
    }
}

/// Which field receives focus when the modal opens or switches mode:
/// create starts at the slug, edit at the URL (the slug is fixed), delete
/// focuses nothing (no field is editable).
fn initial_focus(mode: ModalMode) -> Option<FormField> {
    match mode {
        ModalMode::Create => Some(FormField::Slug),
        ModalMode::Edit => Some(FormField::Url),
        ModalMode::Delete => None,
    }
}

/// A blocked submission: the field at fault and the message shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: FormField,
    pub message: String,
}

/// Rects recorded by the last render, for mouse hit-testing
#[derive(Debug, Clone, Copy)]
struct HitAreas {
    overlay: Rect,
    dialog: Rect,
    slug: Rect,
    url: Rect,
    cancel: Rect,
    submit: Rect,
}

pub struct LinkModal {
    focus: Option<FormField>,
    violation: Option<ConstraintViolation>,
    areas: Option<HitAreas>,
    throbber: ThrobberState,
    last_seen: Option<(bool, ModalMode)>,
}

impl LinkModal {
    pub fn new() -> Self {
        Self {
            focus: None,
            violation: None,
            areas: None,
            throbber: ThrobberState::default(),
            last_seen: None,
        }
    }

    /// Apply open/mode transitions from the props.
    ///
    /// Runs at the top of render and of both event handlers, and acts only
    /// when `(open, mode)` differs from the last observed pair, so it is
    /// idempotent per transition: opening (or switching mode while open)
    /// sets the initial focus, closing drops focus and the recorded rects.
    pub fn sync(&mut self, props: &ModalProps) {
        let snapshot = (props.open, props.mode);
        if self.last_seen == Some(snapshot) {
            return;
        }
        self.last_seen = Some(snapshot);
        self.violation = None;

        if props.open {
            self.focus = initial_focus(props.mode);
            tracing::debug!(mode = ?props.mode, "link modal opened");
        } else {
            self.focus = None;
            self.areas = None;
            tracing::debug!("link modal closed");
        }
    }

    /// The field currently holding focus, if any
    pub fn focused_field(&self) -> Option<FormField> {
        self.focus
    }

    /// Message of the constraint violation blocking the last submit attempt
    pub fn validation_message(&self) -> Option<&str> {
        self.violation.as_ref().map(|v| v.message.as_str())
    }

    /// Advance the loading spinner one frame
    pub fn on_tick(&mut self) {
        self.throbber.calc_next();
    }
}

impl Default for LinkModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enablement_matrix() {
        assert!(FormField::Slug.is_editable(ModalMode::Create));
        assert!(FormField::Url.is_editable(ModalMode::Create));

        assert!(!FormField::Slug.is_editable(ModalMode::Edit));
        assert!(FormField::Url.is_editable(ModalMode::Edit));

        assert!(!FormField::Slug.is_editable(ModalMode::Delete));
        assert!(!FormField::Url.is_editable(ModalMode::Delete));
    }

    #[test]
    fn test_mode_copy_tables() {
        assert_eq!(ModalMode::Create.title(), "Create New Link");
        assert_eq!(ModalMode::Edit.title(), "Edit Link");
        assert_eq!(
            ModalMode::Delete.title(),
            "Are you sure you want to delete this link?"
        );

        assert_eq!(ModalMode::Create.submit_label(), "Create Link");
        assert_eq!(ModalMode::Edit.submit_label(), "Save Changes");
        assert_eq!(ModalMode::Delete.submit_label(), "Delete Link");
    }

    #[test]
    fn test_initial_focus_per_mode() {
        assert_eq!(initial_focus(ModalMode::Create), Some(FormField::Slug));
        assert_eq!(initial_focus(ModalMode::Edit), Some(FormField::Url));
        assert_eq!(initial_focus(ModalMode::Delete), None);
    }

    #[test]
    fn test_focus_cycle_respects_mode() {
        // Create: both fields cycle
        assert_eq!(FormField::Slug.next(ModalMode::Create), FormField::Url);
        assert_eq!(FormField::Url.next(ModalMode::Create), FormField::Slug);
        assert_eq!(FormField::Url.prev(ModalMode::Create), FormField::Slug);

        // Edit: the slug is disabled, focus stays on the URL
        assert_eq!(FormField::Url.next(ModalMode::Edit), FormField::Url);
        assert_eq!(FormField::Url.prev(ModalMode::Edit), FormField::Url);
    }

    #[test]
    fn test_form_data_merge() {
        let form = LinkFormData::new("docs", "https://example.com");

        let next = form.with_field(FormField::Url, "https://example.org".to_string());
        assert_eq!(next.slug, "docs");
        assert_eq!(next.url, "https://example.org");
        // the original record is untouched
        assert_eq!(form.url, "https://example.com");
    }

    #[test]
    fn test_sync_transitions() {
        let mut modal = LinkModal::new();

        let mut props = ModalProps {
            open: true,
            mode: ModalMode::Create,
            ..Default::default()
        };
        modal.sync(&props);
        assert_eq!(modal.focused_field(), Some(FormField::Slug));

        // idempotent while nothing changes
        modal.sync(&props);
        assert_eq!(modal.focused_field(), Some(FormField::Slug));

        // mode change while open refocuses
        props.mode = ModalMode::Edit;
        modal.sync(&props);
        assert_eq!(modal.focused_field(), Some(FormField::Url));

        // closing drops focus
        props.open = false;
        modal.sync(&props);
        assert_eq!(modal.focused_field(), None);
    }
}
