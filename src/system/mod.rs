//! System utilities
//!
//! Logging initialization for the TUI process.

pub mod logging;
