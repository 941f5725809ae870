//! Keyboard Input Handler
//!
//! Handles all keyboard input and dispatches to `App` actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Prompt captures all input while open
    if app.model.ui.is_prompt_open() {
        match key.code {
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Enter => app.submit_prompt()?,
            KeyCode::Backspace => app.prompt_pop(),
            KeyCode::Char(c) => app.prompt_push(c),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('a') => app.open_prompt(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_bookmark()?,
        KeyCode::Char('s') => app.cycle_sort_mode(),
        KeyCode::Char('S') => app.toggle_sort_reverse(),
        KeyCode::Char('w') => app.cycle_account(),
        KeyCode::Char('r') => {
            app.refresh_bookmarks();
            app.model.ui.show_toast("Refreshing bookmarks".to_string());
        }
        KeyCode::Char('o') => app.open_selected_asset()?,
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.toggle_network(index)?;
        }
        _ => {}
    }

    Ok(())
}
