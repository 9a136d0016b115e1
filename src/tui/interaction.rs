//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(
//!     InteractiveRegion::clickable(
//!         "icon_cell",
//!         ClickRegion::new(x, y, width, height),
//!         Action::SelectIcon(name),
//!     )
//!     .with_priority(POPUP_PRIORITY),
//! );
//! ```

use ratatui::layout::Rect;

use crate::events::Action;
use crate::log;

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point falls inside (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for logging)
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    /// Popups use this to capture clicks over underlying content
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    #[cfg(test)]
    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point
    /// and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_down.as_ref())
    }

    fn find<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        // Later registrations win ties so popups drawn last stay on top
        let Some((_, region)) = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y) && handler(r).is_some())
            .max_by_key(|(i, r)| (r.priority, *i))
        else {
            return Action::None;
        };

        log::log(&format!("Mouse hit '{}' at ({}, {})", region.id, x, y));
        handler(region).cloned().unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_region_at_screen_edge() {
        let region = ClickRegion::new(u16::MAX - 1, 0, 5, 1);
        assert!(region.contains(u16::MAX, 0));
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "toggle",
                ClickRegion::new(0, 0, 100, 100),
                Action::TogglePicker,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::PageNext,
            )
            .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert_eq!(registry.handle_click(50, 50), Action::PageNext);

        // Click outside popup should return background's action
        assert_eq!(registry.handle_click(5, 5), Action::TogglePicker);
    }

    #[test]
    fn test_scroll_skips_click_only_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "grid",
            ClickRegion::new(0, 0, 10, 10),
            Action::PagePrev,
            Action::PageNext,
        ));
        registry.register(
            InteractiveRegion::clickable("cell", ClickRegion::new(0, 0, 5, 5), Action::FocusLeft)
                .with_priority(5),
        );

        assert_eq!(registry.handle_scroll_up(2, 2), Action::PagePrev);
        assert_eq!(registry.handle_scroll_down(2, 2), Action::PageNext);
        assert_eq!(registry.handle_click(2, 2), Action::FocusLeft);
        assert_eq!(registry.handle_click(20, 20), Action::None);
    }

    #[test]
    fn test_clear_forgets_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::clickable(
            "toggle",
            ClickRegion::new(0, 0, 5, 5),
            Action::TogglePicker,
        ));
        registry.clear();
        assert!(registry.regions().is_empty());
        assert_eq!(registry.handle_click(1, 1), Action::None);
    }
}
