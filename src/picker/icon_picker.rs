//! Icon picker state machine.
//!
//! The picker is either closed or open. While open it shows one page of the
//! icon set and tracks a focused cell for keyboard activation. Selecting an
//! icon records it and closes the popup in the same step.

use std::fmt;
use std::sync::Arc;

use crate::config::PickerConfig;
use crate::error::ConfigResult;
use crate::icons::{Icon, IconId, IconSet};

use super::Paginated;

type SelectCallback = Box<dyn FnMut(&Icon) + Send>;

pub struct IconPicker {
    config: PickerConfig,
    icons: Arc<IconSet>,
    is_open: bool,
    selected_icon: Option<IconId>,
    page: usize,
    /// Focused cell, relative to the start of the current page
    focused: usize,
    on_select: Option<SelectCallback>,
}

impl IconPicker {
    /// Create a closed picker over `icons`.
    ///
    /// Fails when the configured page cannot hold a single icon.
    pub fn new(config: PickerConfig, icons: Arc<IconSet>) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            icons,
            is_open: false,
            selected_icon: None,
            page: 0,
            focused: 0,
            on_select: None,
        })
    }

    /// Create a closed picker over the bundled icon set.
    pub fn with_builtin_icons(config: PickerConfig) -> ConfigResult<Self> {
        Self::new(config, IconSet::builtin())
    }

    /// Register a callback run after every successful selection.
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Icon) + Send + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn icon_set(&self) -> &IconSet {
        &self.icons
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_icon(&self) -> Option<&str> {
        self.selected_icon.as_deref()
    }

    /// Full icon record for the current selection
    pub fn selected(&self) -> Option<&Icon> {
        self.selected_icon.as_deref().and_then(|name| self.icons.get(name))
    }

    pub fn selected_glyph(&self) -> Option<&str> {
        self.selected_icon.as_deref().and_then(|name| self.icons.glyph(name))
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_icon(&self) -> Option<&Icon> {
        self.page_items().get(self.focused)
    }

    pub fn toggle_picker(&mut self) {
        self.is_open = !self.is_open;
        self.clamp_focus();
    }

    /// Record `id` as the selection and close the popup.
    ///
    /// `id` must come from the icon set; unknown ids are a caller bug.
    pub fn select_icon(&mut self, id: &str) {
        debug_assert!(self.icons.contains(id), "icon '{}' is not in the icon set", id);

        let Some(icon) = self.icons.get(id) else {
            return;
        };

        self.selected_icon = Some(icon.name.clone());
        self.is_open = false;

        if let Some(callback) = self.on_select.as_mut() {
            callback(icon);
        }
    }

    /// Go back one page. Inert while closed or on the first page.
    pub fn page_prev(&mut self) {
        if self.is_open && self.prev_page() {
            self.focused = 0;
        }
    }

    /// Go forward one page. Inert while closed or on the last page.
    pub fn page_next(&mut self) {
        if self.is_open && self.next_page() {
            self.focused = 0;
        }
    }

    pub fn focus_left(&mut self) {
        if self.is_open && self.focused > 0 {
            self.focused -= 1;
        }
    }

    pub fn focus_right(&mut self) {
        if self.is_open && self.focused + 1 < self.page_items().len() {
            self.focused += 1;
        }
    }

    pub fn focus_up(&mut self) {
        let columns = self.columns();
        if self.is_open && self.focused >= columns {
            self.focused -= columns;
        }
    }

    pub fn focus_down(&mut self) {
        let columns = self.columns();
        if self.is_open && self.focused + columns < self.page_items().len() {
            self.focused += columns;
        }
    }

    fn columns(&self) -> usize {
        self.config.columns_in_one_page as usize
    }

    fn clamp_focus(&mut self) {
        let len = self.page_items().len();
        if self.focused >= len {
            self.focused = len.saturating_sub(1);
        }
    }
}

impl Paginated for IconPicker {
    type Item = Icon;

    fn items(&self) -> &[Icon] {
        self.icons.icons()
    }

    fn page_size(&self) -> usize {
        self.config.page_size()
    }

    fn page(&self) -> usize {
        self.page
    }

    fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

impl fmt::Debug for IconPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconPicker")
            .field("config", &self.config)
            .field("icons", &self.icons.len())
            .field("is_open", &self.is_open)
            .field("selected_icon", &self.selected_icon)
            .field("page", &self.page)
            .field("focused", &self.focused)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
