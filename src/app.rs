use crate::events::{Action, EventResult};
use crate::log;
use crate::picker::IconPicker;
use crate::tui::interaction::InteractionRegistry;

pub struct App {
    pub picker: IconPicker,
    /// Click targets registered by the last render
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(picker: IconPicker) -> Self {
        Self {
            picker,
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    /// Apply one action to picker state.
    ///
    /// This is the single dispatch table from user intent to transition.
    pub fn dispatch(&mut self, action: Action) -> EventResult {
        if action != Action::None {
            log::log_event(&action.describe());
        }

        match action {
            Action::None => EventResult::None,
            Action::Quit => {
                self.should_quit = true;
                EventResult::Quit
            }
            Action::TogglePicker => {
                self.picker.toggle_picker();
                EventResult::None
            }
            Action::SelectIcon(id) => {
                self.picker.select_icon(&id);
                match self.picker.selected_icon() {
                    Some(selected) if selected == id => EventResult::Selected(id),
                    _ => EventResult::None,
                }
            }
            Action::PagePrev => {
                self.picker.page_prev();
                EventResult::None
            }
            Action::PageNext => {
                self.picker.page_next();
                EventResult::None
            }
            Action::FocusLeft => {
                self.picker.focus_left();
                EventResult::None
            }
            Action::FocusRight => {
                self.picker.focus_right();
                EventResult::None
            }
            Action::FocusUp => {
                self.picker.focus_up();
                EventResult::None
            }
            Action::FocusDown => {
                self.picker.focus_down();
                EventResult::None
            }
        }
    }
}
