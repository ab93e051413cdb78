//! Event handling for the TUI
//!
//! While the modal is open it is the only event target: keys and mouse
//! clicks go to it and its returned actions are applied to the App. The
//! moment it closes, events fall through to the main screen again, so the
//! modal's handlers can never fire while it is hidden.

use std::io;

use ratatui::crossterm::event::{Event, KeyCode};

use crate::tui::app::App;

/// Route one terminal event. Returns `true` when the app should exit.
pub fn handle_event(app: &mut App, event: Event) -> io::Result<bool> {
    match event {
        Event::Key(key) => handle_key_event(app, key.code),
        Event::Mouse(mouse) => {
            // a closed modal swallows nothing and returns Noop
            let action = app.modal.handle_mouse(&app.modal_props, mouse);
            app.handle_modal_action(action);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keyboard input based on whether the modal is open
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> io::Result<bool> {
    if app.modal_props.open {
        let action = app.modal.handle_key(&app.modal_props, key_code);
        app.handle_modal_action(action);
        return Ok(false);
    }

    handle_main_screen(app, key_code)
}

/// Handle main screen input
fn handle_main_screen(app: &mut App, key_code: KeyCode) -> io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_delete(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}
