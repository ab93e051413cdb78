//! Integration tests for the App driving the modal
//!
//! Exercises the full controlled-component round trip: main-screen keys
//! open the modal, typed keys come back as form-data changes the App
//! adopts, submits go through the loading window, and the store applies
//! or rejects the operation.

use linkboard::tui::app::App;
use linkboard::tui::event_handler::handle_key_event;
use linkboard::tui::link_modal::ModalMode;

use ratatui::crossterm::event::KeyCode;

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, KeyCode::Char(c)).unwrap();
    }
}

#[test]
fn test_create_flow() {
    let mut app = App::new();
    let before = app.links.len();

    handle_key_event(&mut app, KeyCode::Char('a')).unwrap();
    assert!(app.modal_props.open);
    assert_eq!(app.modal_props.mode, ModalMode::Create);
    assert!(app.modal_props.form.slug.is_empty());

    // typed keys round-trip through FormDataChange into the owned props
    type_str(&mut app, "team");
    assert_eq!(app.modal_props.form.slug, "team");

    handle_key_event(&mut app, KeyCode::Tab).unwrap();
    type_str(&mut app, "https://example.com/team");
    assert_eq!(app.modal_props.form.url, "https://example.com/team");

    handle_key_event(&mut app, KeyCode::Enter).unwrap();
    assert!(app.modal_props.loading);
    assert!(app.has_pending());

    // while loading the modal refuses to close
    handle_key_event(&mut app, KeyCode::Esc).unwrap();
    assert!(app.modal_props.open);

    app.complete_pending();
    assert_eq!(app.links.len(), before + 1);
    assert_eq!(app.links["team"].url, "https://example.com/team");
    assert!(!app.modal_props.open);
    assert!(app.status_message.contains("team"));
}

#[test]
fn test_create_duplicate_slug_keeps_modal_open() {
    let mut app = App::new();

    handle_key_event(&mut app, KeyCode::Char('a')).unwrap();
    type_str(&mut app, "docs"); // seeded slug
    handle_key_event(&mut app, KeyCode::Tab).unwrap();
    type_str(&mut app, "https://example.com");
    handle_key_event(&mut app, KeyCode::Enter).unwrap();

    app.complete_pending();
    assert!(app.error_message.contains("already exists"));
    // the caller keeps the modal open so the slug can be corrected
    assert!(app.modal_props.open);
    assert!(!app.modal_props.loading);
}

#[test]
fn test_edit_flow() {
    let mut app = App::new();
    let slug = app.selected_link().unwrap().slug.clone();
    let url = app.selected_link().unwrap().url.clone();

    handle_key_event(&mut app, KeyCode::Char('e')).unwrap();
    assert_eq!(app.modal_props.mode, ModalMode::Edit);
    assert_eq!(app.modal_props.form.slug, slug);
    assert_eq!(app.modal_props.form.url, url);

    // focus starts on the URL; typing appends there, the slug stays fixed
    type_str(&mut app, "/x");
    assert_eq!(app.modal_props.form.slug, slug);
    assert_eq!(app.modal_props.form.url, format!("{}/x", url));

    handle_key_event(&mut app, KeyCode::Enter).unwrap();
    app.complete_pending();
    assert_eq!(app.links[&slug].url, format!("{}/x", url));
    assert!(!app.modal_props.open);
}

#[test]
fn test_delete_flow() {
    let mut app = App::new();
    let before = app.links.len();
    let slug = app.selected_link().unwrap().slug.clone();

    handle_key_event(&mut app, KeyCode::Char('d')).unwrap();
    assert_eq!(app.modal_props.mode, ModalMode::Delete);

    // text keys are dead in delete mode
    type_str(&mut app, "abc");
    assert_eq!(app.modal_props.form.slug, slug);

    handle_key_event(&mut app, KeyCode::Char('y')).unwrap();
    assert!(app.modal_props.loading);
    app.complete_pending();

    assert_eq!(app.links.len(), before - 1);
    assert!(!app.links.contains_key(&slug));
    assert!(app.selected_link().is_some());
}

#[test]
fn test_delete_mode_n_cancels() {
    let mut app = App::new();
    let before = app.links.len();

    handle_key_event(&mut app, KeyCode::Char('d')).unwrap();
    handle_key_event(&mut app, KeyCode::Char('n')).unwrap();

    assert!(!app.modal_props.open);
    assert_eq!(app.links.len(), before);
}

#[test]
fn test_escape_closes_and_keeps_store_untouched() {
    let mut app = App::new();
    let before = app.links.len();

    handle_key_event(&mut app, KeyCode::Char('a')).unwrap();
    type_str(&mut app, "scratch");
    handle_key_event(&mut app, KeyCode::Esc).unwrap();

    assert!(!app.modal_props.open);
    assert_eq!(app.links.len(), before);
}

#[test]
fn test_navigation_bounds() {
    let mut app = App::new();

    handle_key_event(&mut app, KeyCode::Char('k')).unwrap();
    assert_eq!(app.selected_index, 0);

    handle_key_event(&mut app, KeyCode::Char('G')).unwrap();
    assert_eq!(app.selected_index, app.links.len() - 1);

    handle_key_event(&mut app, KeyCode::Char('j')).unwrap();
    assert_eq!(app.selected_index, app.links.len() - 1);

    handle_key_event(&mut app, KeyCode::Char('g')).unwrap();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_quit_key() {
    let mut app = App::new();
    assert!(handle_key_event(&mut app, KeyCode::Char('q')).unwrap());

    // q types into the form instead of quitting while the modal is open
    let mut app = App::new();
    handle_key_event(&mut app, KeyCode::Char('a')).unwrap();
    assert!(!handle_key_event(&mut app, KeyCode::Char('q')).unwrap());
    assert_eq!(app.modal_props.form.slug, "q");
}
