//! Keyboard handling through `handlers::handle_key`

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marktui::app::MAX_PROMPT_CHARS;
use marktui::handlers::handle_key;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_add_bookmark_through_prompt() {
    let resolver = FakeResolver::with_assets(vec![asset("did:op:a", 1, "Dataset A", "DTA")]);
    let mut app = app(config(), prefs_with(&[]), &resolver);

    handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
    assert!(app.model.ui.is_prompt_open());

    // Keys that normally act ('q', 'd') are text while the prompt is open
    for c in "did:op:aq".chars() {
        handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
    }
    handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
    assert!(!app.model.ui.should_quit);

    handle_key(&mut app, press(KeyCode::Enter)).unwrap();
    assert!(!app.model.ui.is_prompt_open());
    assert_eq!(app.prefs().bookmarks().unwrap(), vec!["did:op:a"]);

    settle(&mut app).await;
    assert_eq!(app.model.bookmarks.pinned[0].title(), "Dataset A");
}

#[tokio::test]
async fn test_escape_closes_prompt_before_quitting() {
    let resolver = FakeResolver::with_assets(vec![]);
    let mut app = app(config(), prefs_with(&[]), &resolver);

    handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
    handle_key(&mut app, press(KeyCode::Esc)).unwrap();
    assert!(!app.model.ui.is_prompt_open());
    assert!(!app.model.ui.should_quit);

    handle_key(&mut app, press(KeyCode::Esc)).unwrap();
    assert!(app.model.ui.should_quit);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_prompt() {
    let resolver = FakeResolver::with_assets(vec![]);
    let mut app = app(config(), prefs_with(&[]), &resolver);

    handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
    assert!(app.model.ui.should_quit);
}

#[tokio::test]
async fn test_navigation_wraps() {
    let resolver = FakeResolver::with_assets(vec![
        asset("did:op:a", 1, "Dataset A", "DTA"),
        asset("did:op:b", 1, "Dataset B", "DTB"),
    ]);
    let mut app = app(config(), prefs_with(&["did:op:a", "did:op:b"]), &resolver);
    settle(&mut app).await;
    assert_eq!(app.model.ui.selected_index, Some(0));

    handle_key(&mut app, press(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.model.ui.selected_index, Some(1));
    handle_key(&mut app, press(KeyCode::Down)).unwrap();
    assert_eq!(app.model.ui.selected_index, Some(0));
    handle_key(&mut app, press(KeyCode::Char('k'))).unwrap();
    assert_eq!(app.model.ui.selected_index, Some(1));
    handle_key(&mut app, press(KeyCode::Char('g'))).unwrap();
    assert_eq!(app.model.ui.selected_index, Some(0));
}

#[tokio::test]
async fn test_number_keys_toggle_networks() {
    let resolver = FakeResolver::with_assets(vec![]);
    let mut app = app(config(), prefs_with(&[]), &resolver);
    assert_eq!(app.prefs().chain_ids().unwrap(), vec![1, 137]);

    handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
    assert_eq!(app.prefs().chain_ids().unwrap(), vec![1]);

    // No ninth network configured
    handle_key(&mut app, press(KeyCode::Char('9'))).unwrap();
    assert_eq!(app.prefs().chain_ids().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_open_without_command_shows_error() {
    let resolver = FakeResolver::with_assets(vec![asset("did:op:a", 1, "Dataset A", "DTA")]);
    let mut app = app(config(), prefs_with(&["did:op:a"]), &resolver);
    settle(&mut app).await;

    handle_key(&mut app, press(KeyCode::Char('o'))).unwrap();
    let (message, _) = app.model.ui.toast_message.clone().unwrap();
    assert_eq!(message, "Error: open_command not configured");
}

#[tokio::test]
async fn test_prompt_input_is_capped() {
    let resolver = FakeResolver::with_assets(vec![]);
    let mut app = app(config(), prefs_with(&[]), &resolver);

    handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
    for _ in 0..(MAX_PROMPT_CHARS + 50) {
        handle_key(&mut app, press(KeyCode::Char('x'))).unwrap();
    }

    let input = app.model.ui.input_prompt.clone().unwrap();
    assert_eq!(input.chars().count(), MAX_PROMPT_CHARS);
}
