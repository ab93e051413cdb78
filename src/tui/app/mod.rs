//! App state definition and basic state management
//!
//! The App is the modal's parent: it owns the link map, the list
//! selection, and every modal prop (open flag, mode, form record, loading
//! flag). The modal only ever sees the props and hands actions back.

mod link_operations;

use std::collections::BTreeMap;
use std::time::Instant;

use ratatui::widgets::TableState;

use crate::tui::action::ModalAction;
use crate::tui::constants::SUBMIT_LATENCY;
use crate::tui::link_modal::{LinkFormData, LinkModal, ModalMode, ModalProps};

/// One slug -> destination URL mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub slug: String,
    pub url: String,
}

/// A submitted operation waiting out the simulated latency window
struct PendingSubmit {
    op: SubmitOp,
    ready_at: Instant,
}

enum SubmitOp {
    Create(LinkFormData),
    Update(LinkFormData),
    Delete(String),
}

pub struct App {
    pub links: BTreeMap<String, Link>,

    // List selection
    pub selected_index: usize,
    pub table_state: TableState,

    // Transient feedback
    pub status_message: String,
    pub error_message: String,

    // The modal and the props the App owns for it
    pub modal: LinkModal,
    pub modal_props: ModalProps,

    pending: Option<PendingSubmit>,
}

impl App {
    pub fn new() -> App {
        let mut links = BTreeMap::new();
        for (slug, url) in [
            ("blog", "https://blog.esaps.net"),
            ("docs", "https://docs.rs/linkboard"),
            ("repo", "https://github.com/AptS-1547/linkboard"),
        ] {
            links.insert(
                slug.to_string(),
                Link {
                    slug: slug.to_string(),
                    url: url.to_string(),
                },
            );
        }

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            links,
            selected_index: 0,
            table_state,
            status_message: String::new(),
            error_message: String::new(),
            modal: LinkModal::new(),
            modal_props: ModalProps::default(),
            pending: None,
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.links.len() {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.links.len().saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn selected_link(&self) -> Option<&Link> {
        self.links.values().nth(self.selected_index)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// Open the modal in create mode with an empty form
    pub fn open_create(&mut self) {
        self.modal_props = ModalProps {
            open: true,
            mode: ModalMode::Create,
            form: LinkFormData::default(),
            loading: false,
        };
    }

    /// Open the modal in edit mode, prefilled from the selected link
    pub fn open_edit(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        let form = LinkFormData::new(link.slug.clone(), link.url.clone());
        self.modal_props = ModalProps {
            open: true,
            mode: ModalMode::Edit,
            form,
            loading: false,
        };
    }

    /// Open the modal in delete mode, prefilled from the selected link
    pub fn open_delete(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        let form = LinkFormData::new(link.slug.clone(), link.url.clone());
        self.modal_props = ModalProps {
            open: true,
            mode: ModalMode::Delete,
            form,
            loading: false,
        };
    }

    /// Interpret an action the modal handed back
    pub fn handle_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::Close => {
                self.modal_props.open = false;
                self.modal_props.loading = false;
            }
            ModalAction::FormDataChange(form) => {
                // controlled round trip: adopt the record, the modal
                // re-renders from it next frame
                self.modal_props.form = form;
            }
            ModalAction::Submit => self.begin_submit(),
            ModalAction::Noop => {}
        }
    }

    fn begin_submit(&mut self) {
        let form = self.modal_props.form.clone();
        let op = match self.modal_props.mode {
            ModalMode::Create => SubmitOp::Create(form),
            ModalMode::Edit => SubmitOp::Update(form),
            ModalMode::Delete => SubmitOp::Delete(form.slug),
        };
        self.modal_props.loading = true;
        self.pending = Some(PendingSubmit {
            op,
            ready_at: Instant::now() + SUBMIT_LATENCY,
        });
        tracing::debug!(mode = ?self.modal_props.mode, "submit accepted");
    }

    /// One animation/progress tick from the event loop
    pub fn on_tick(&mut self) {
        self.modal.on_tick();
        if self
            .pending
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.ready_at)
        {
            self.complete_pending();
        }
    }

    /// Whether a submitted operation is still in flight
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the in-flight operation to the store now.
    ///
    /// Success closes the modal and reports a status message; failure keeps
    /// the modal open with loading cleared so the user can correct the form.
    pub fn complete_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let result = match pending.op {
            SubmitOp::Create(form) => self.create_link(&form),
            SubmitOp::Update(form) => self.update_link(&form),
            SubmitOp::Delete(slug) => self.delete_link(&slug),
        };
        match result {
            Ok(message) => {
                self.set_status(message);
                self.modal_props = ModalProps::default();
            }
            Err(e) => {
                self.set_error(e.to_string());
                self.modal_props.loading = false;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
