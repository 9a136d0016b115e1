//! Keyboard event handling by picker state.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if app.picker.is_open() {
        handle_open_picker(app, key)
    } else {
        handle_closed_picker(key)
    }
}

/// The toggle button owns the keyboard while the popup is closed.
fn handle_closed_picker(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::TogglePicker,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn handle_open_picker(app: &App, key: KeyEvent) -> Action {
    match key.code {
        // Activating the focused cell is the same intent as clicking it
        KeyCode::Enter | KeyCode::Char(' ') => app
            .picker
            .focused_icon()
            .map(|icon| Action::SelectIcon(icon.name.clone()))
            .unwrap_or(Action::None),

        KeyCode::Left | KeyCode::Char('h') => Action::FocusLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::FocusRight,
        KeyCode::Up | KeyCode::Char('k') => Action::FocusUp,
        KeyCode::Down | KeyCode::Char('j') => Action::FocusDown,

        KeyCode::PageUp | KeyCode::Char('[') | KeyCode::Char('p') => Action::PagePrev,
        KeyCode::PageDown | KeyCode::Char(']') | KeyCode::Char('n') => Action::PageNext,

        KeyCode::Esc => Action::TogglePicker,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
