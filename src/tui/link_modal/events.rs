//! Modal event handling
//!
//! Keyboard and mouse events go in, [`ModalAction`]s come out. A closed
//! modal consumes nothing; while `loading` every control is inert.

use ratatui::crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::action::ModalAction;
use crate::utils::validate_url;

use super::{ConstraintViolation, FormField, LinkModal, ModalMode, ModalProps, initial_focus};

/// A single edit to the focused field
enum FieldEdit {
    Insert(char),
    Backspace,
}

impl LinkModal {
    /// Handle a key press while the modal is mounted.
    ///
    /// Esc closes (unless loading), Enter submits, Tab/Shift-Tab move focus
    /// across the fields editable in the current mode, and printable keys
    /// edit the focused field. Delete mode answers to the `y`/`n` confirm
    /// keys instead of text input.
    pub fn handle_key(&mut self, props: &ModalProps, key: KeyCode) -> ModalAction {
        self.sync(props);
        if !props.open {
            return ModalAction::Noop;
        }

        match key {
            KeyCode::Esc => self.close_guarded(props),
            KeyCode::Enter => {
                if props.loading {
                    ModalAction::Noop
                } else {
                    self.try_submit(props)
                }
            }
            KeyCode::Tab => {
                self.move_focus(props, false);
                ModalAction::Noop
            }
            KeyCode::BackTab => {
                self.move_focus(props, true);
                ModalAction::Noop
            }
            KeyCode::Backspace => self.edit_field(props, FieldEdit::Backspace),
            KeyCode::Char(c) => {
                if props.mode == ModalMode::Delete {
                    match c {
                        'y' | 'Y' if !props.loading => self.try_submit(props),
                        'n' | 'N' if !props.loading => ModalAction::Close,
                        _ => ModalAction::Noop,
                    }
                } else {
                    self.edit_field(props, FieldEdit::Insert(c))
                }
            }
            _ => ModalAction::Noop,
        }
    }

    /// Handle a mouse event while the modal is mounted.
    ///
    /// Left-clicks hit-test against the rects of the last render: the
    /// buttons act, a click on an editable field focuses it, anything else
    /// inside the dialog is swallowed, and a click on the backdrop closes
    /// the modal (unless loading).
    pub fn handle_mouse(&mut self, props: &ModalProps, mouse: MouseEvent) -> ModalAction {
        self.sync(props);
        if !props.open {
            return ModalAction::Noop;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return ModalAction::Noop;
        }
        let Some(areas) = self.areas else {
            return ModalAction::Noop;
        };

        let pos = Position::new(mouse.column, mouse.row);

        if areas.cancel.contains(pos) {
            return self.close_guarded(props);
        }
        if areas.submit.contains(pos) {
            return if props.loading {
                ModalAction::Noop
            } else {
                self.try_submit(props)
            };
        }
        if areas.slug.contains(pos) {
            if !props.loading && FormField::Slug.is_editable(props.mode) {
                self.focus = Some(FormField::Slug);
            }
            return ModalAction::Noop;
        }
        if areas.url.contains(pos) {
            if !props.loading && FormField::Url.is_editable(props.mode) {
                self.focus = Some(FormField::Url);
            }
            return ModalAction::Noop;
        }
        if areas.dialog.contains(pos) {
            // clicks inside the dialog never reach the backdrop
            return ModalAction::Noop;
        }
        if areas.overlay.contains(pos) {
            return self.close_guarded(props);
        }

        ModalAction::Noop
    }

    fn close_guarded(&self, props: &ModalProps) -> ModalAction {
        if props.loading {
            ModalAction::Noop
        } else {
            ModalAction::Close
        }
    }

    fn move_focus(&mut self, props: &ModalProps, backwards: bool) {
        if props.loading {
            return;
        }
        match self.focus {
            Some(current) => {
                self.focus = Some(if backwards {
                    current.prev(props.mode)
                } else {
                    current.next(props.mode)
                });
            }
            None => self.focus = initial_focus(props.mode),
        }
    }

    /// Apply one edit to the focused field and relay the merged record.
    ///
    /// Two guards layer here: delete mode is read-only outright, and a
    /// field that is not editable in the current mode never produces a
    /// change event even if it somehow held focus.
    fn edit_field(&mut self, props: &ModalProps, edit: FieldEdit) -> ModalAction {
        if props.loading || props.mode == ModalMode::Delete {
            return ModalAction::Noop;
        }
        let Some(field) = self.focus else {
            return ModalAction::Noop;
        };
        if !field.is_editable(props.mode) {
            return ModalAction::Noop;
        }

        let mut value = match field {
            FormField::Slug => props.form.slug.clone(),
            FormField::Url => props.form.url.clone(),
        };
        match edit {
            FieldEdit::Insert(c) => value.push(c),
            FieldEdit::Backspace => {
                if value.pop().is_none() {
                    return ModalAction::Noop;
                }
            }
        }

        self.violation = None;
        ModalAction::FormDataChange(props.form.with_field(field, value))
    }

    /// Submit the form if it passes the constraint checks.
    ///
    /// The terminal analog of native browser constraint validation: both
    /// fields required, the destination must be an http(s) URL. A violation
    /// blocks the submit, focuses the offending field when it can take
    /// focus, and surfaces the message under the field. No slug-format or
    /// business validation happens here.
    fn try_submit(&mut self, props: &ModalProps) -> ModalAction {
        match check_constraints(props) {
            Ok(()) => {
                self.violation = None;
                ModalAction::Submit
            }
            Err(violation) => {
                if violation.field.is_editable(props.mode) {
                    self.focus = Some(violation.field);
                }
                self.violation = Some(violation);
                ModalAction::Noop
            }
        }
    }
}

fn check_constraints(props: &ModalProps) -> Result<(), ConstraintViolation> {
    if props.form.slug.trim().is_empty() {
        return Err(ConstraintViolation {
            field: FormField::Slug,
            message: "Slug is required".to_string(),
        });
    }
    if props.form.url.trim().is_empty() {
        return Err(ConstraintViolation {
            field: FormField::Url,
            message: "Destination URL is required".to_string(),
        });
    }
    validate_url(&props.form.url).map_err(|e| ConstraintViolation {
        field: FormField::Url,
        message: e.to_string(),
    })
}
