//! Linkboard - a terminal dashboard for short-link mappings
//!
//! This library provides the building blocks of the Linkboard TUI:
//! a link table, and a controlled modal component for creating, editing
//! and deleting slug -> destination URL mappings.
//!
//! # Architecture
//! - `tui`: terminal lifecycle, event loop, screens and widgets
//! - `tui::link_modal`: the three-mode link modal component
//! - `errors`: crate error types
//! - `system`: logging initialization
//! - `utils`: destination URL validation

pub mod errors;
pub mod system;
pub mod tui;
pub mod utils;
