//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into `Action`s, which the `App` applies to
//! picker state. A key press on a focused icon and a click on that icon
//! produce the same `Action`.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::{EventHandler, EventResult};
