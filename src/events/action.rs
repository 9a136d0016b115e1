//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged or replayed.

use crate::icons::IconId;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Do nothing (unbound key, click on inert area)
    None,

    /// Quit the application
    Quit,

    // === Picker ===
    /// Open or close the popup
    TogglePicker,
    /// Choose an icon and close the popup
    SelectIcon(IconId),

    // === Pagination ===
    /// Show the previous page
    PagePrev,
    /// Show the next page
    PageNext,

    // === Focus ===
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
}

impl Action {
    /// Short name used in the event log.
    pub fn describe(&self) -> String {
        match self {
            Action::SelectIcon(id) => format!("SelectIcon({})", id),
            other => format!("{:?}", other),
        }
    }
}
