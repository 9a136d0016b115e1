//! Icon picker module
//!
//! Provides the pagination trait and the icon picker state machine built on it.

mod icon_picker;
mod traits;

pub use icon_picker::IconPicker;
pub use traits::Paginated;
