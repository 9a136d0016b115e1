//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `toggle_button` - Button showing the selected icon, opens the popup
//! - `icon_picker_popup` - Popup with title, pagination and the icon grid

mod icon_picker_popup;
mod toggle_button;

pub use icon_picker_popup::render_icon_picker_popup;
pub use toggle_button::{BUTTON_HEIGHT, BUTTON_WIDTH, render_toggle_button};
