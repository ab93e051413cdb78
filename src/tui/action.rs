//! Modal action relay
//!
//! The modal never reaches into application state. Its event handlers
//! return a `ModalAction` and the parent decides what to do with it,
//! which keeps the component a pure renderer plus event relay.

use super::link_modal::LinkFormData;

/// Actions the link modal can hand back to its parent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalAction {
    /// Dismiss request: Esc, backdrop click, Cancel, or `n` in delete mode
    Close,
    /// The form was submitted and passed constraint checks
    Submit,
    /// A field edit produced a new full form record for the parent to adopt
    FormDataChange(LinkFormData),
    /// Nothing to do
    #[default]
    Noop,
}

impl ModalAction {
    pub fn is_noop(&self) -> bool {
        matches!(self, ModalAction::Noop)
    }
}
