//! Central event handler that maps terminal events to actions.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;
use crate::icons::IconId;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Outcome of applying an action, for the host loop to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// No special action needed
    None,
    /// An icon was chosen
    Selected(IconId),
    /// The user asked to leave
    Quit,
}

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            _ => Action::None,
        }
    }
}
