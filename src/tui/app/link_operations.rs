//! Link store operations
//!
//! Create/update/delete against the in-memory link map. Business rules
//! (duplicate slugs, missing entries) live here, on the modal's caller
//! side, never in the modal itself.

use crate::errors::{LinkboardError, Result};
use crate::tui::link_modal::LinkFormData;

use super::{App, Link};

impl App {
    pub fn create_link(&mut self, form: &LinkFormData) -> Result<String> {
        let slug = form.slug.trim();
        if slug.is_empty() {
            return Err(LinkboardError::validation("Slug cannot be empty"));
        }
        if self.links.contains_key(slug) {
            return Err(LinkboardError::validation(format!(
                "Slug '{}' already exists",
                slug
            )));
        }

        self.links.insert(
            slug.to_string(),
            Link {
                slug: slug.to_string(),
                url: form.url.trim().to_string(),
            },
        );
        tracing::info!(slug, "link created");
        Ok(format!("Link created: {}", slug))
    }

    pub fn update_link(&mut self, form: &LinkFormData) -> Result<String> {
        let slug = form.slug.trim();
        let Some(link) = self.links.get_mut(slug) else {
            return Err(LinkboardError::not_found(format!(
                "No link with slug '{}'",
                slug
            )));
        };

        link.url = form.url.trim().to_string();
        tracing::info!(slug, "link updated");
        Ok(format!("Link updated: {}", slug))
    }

    pub fn delete_link(&mut self, slug: &str) -> Result<String> {
        if self.links.remove(slug).is_none() {
            return Err(LinkboardError::not_found(format!(
                "No link with slug '{}'",
                slug
            )));
        }

        // keep the selection inside the shrunk list
        self.selected_index = self.selected_index.min(self.links.len().saturating_sub(1));
        self.table_state.select(Some(self.selected_index));

        tracing::info!(slug, "link deleted");
        Ok(format!("Link deleted: {}", slug))
    }
}
