use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use super::components::{
    BUTTON_HEIGHT, BUTTON_WIDTH, render_icon_picker_popup, render_toggle_button,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt from scratch every frame
    app.interactions.clear();

    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(1),             // Title
        Constraint::Length(BUTTON_HEIGHT), // Toggle button
        Constraint::Length(1),             // Selection label
        Constraint::Min(0),                // Spacer
        Constraint::Length(1),             // Hotkeys
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            " iconpick",
            Style::new().fg(ACCENT_LIGHT_BLUE).add_modifier(Modifier::BOLD),
        )),
        main_layout[0],
    );

    let button_row = main_layout[1];
    let button_area = Rect::new(
        button_row.x + 1u16.min(button_row.width),
        button_row.y,
        BUTTON_WIDTH.min(button_row.width.saturating_sub(1)),
        button_row.height,
    );
    render_toggle_button(frame, button_area, app);

    render_selection_label(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[4], app);

    // Popup last so it draws over everything else
    if app.picker.is_open() {
        render_icon_picker_popup(frame, area, app);
    }
}

fn render_selection_label(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.picker.selected_icon() {
        Some(name) => Line::from(vec![
            Span::styled(" Selected: ", Style::new().fg(TEXT_DIM)),
            Span::styled(name.to_string(), Style::new().fg(TEXT_WHITE)),
        ]),
        None => Line::styled(" No icon selected", Style::new().fg(TEXT_DIM)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let open_or_close = if app.picker.is_open() { " close · " } else { " open · " };
    let line = Line::from(vec![
        Span::styled(" [Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(open_or_close, Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use crossterm::event::Event;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::PickerConfig;
    use crate::events::{Action, EventHandler};
    use crate::icons::IconSet;
    use crate::picker::{IconPicker, Paginated};
    use crate::tui::interaction::ClickRegion;

    fn small_set() -> Arc<IconSet> {
        Arc::new(IconSet::from_entries([
            ("Home", "⌂"),
            ("Star", "★"),
            ("Heart", "♥"),
            ("Sun", "☀"),
            ("Moon", "☾"),
        ]))
    }

    fn app_with(icons: Arc<IconSet>) -> App {
        let config = PickerConfig::new(1, 2, 3, 7).with_picker_size(20, 60);
        App::new(IconPicker::new(config, icons).unwrap())
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        terminal.draw(|frame| render(frame, app)).unwrap();
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn region_for(app: &App, action: &Action) -> Option<ClickRegion> {
        app.interactions
            .regions()
            .iter()
            .find(|r| r.on_click.as_ref() == Some(action))
            .map(|r| r.bounds)
    }

    fn click(region: ClickRegion) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: region.x + region.width / 2,
            row: region.y + region.height / 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_closed_shows_empty_button() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        draw(&mut terminal, &mut app);

        let text = buffer_text(&terminal);
        assert!(text.contains("No icon selected"));
        assert!(!text.contains("Select an Icon"));
        assert!(region_for(&app, &Action::TogglePicker).is_some());
    }

    #[test]
    fn test_click_on_button_toggles() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        draw(&mut terminal, &mut app);

        let button = region_for(&app, &Action::TogglePicker).unwrap();
        let action = EventHandler::handle_event(&app, &click(button));
        assert_eq!(action, Action::TogglePicker);

        app.dispatch(action);
        draw(&mut terminal, &mut app);
        assert!(buffer_text(&terminal).contains("Select an Icon"));
    }

    #[test]
    fn test_open_popup_shows_first_page() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        let text = buffer_text(&terminal);
        assert!(text.contains("Select an Icon"));
        assert!(text.contains("‹ 1 ›"));
        assert!(text.contains('⌂'));
        assert!(text.contains('★'));
        assert!(!text.contains('♥'));

        // First page: prev disabled, next enabled
        assert!(region_for(&app, &Action::PagePrev).is_none());
        assert!(region_for(&app, &Action::PageNext).is_some());
    }

    #[test]
    fn test_last_page_disables_next() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        app.dispatch(Action::PageNext);
        app.dispatch(Action::PageNext);
        draw(&mut terminal, &mut app);

        assert_eq!(app.picker.page(), 2);
        let text = buffer_text(&terminal);
        assert!(text.contains("‹ 3 ›"));
        assert!(text.contains('☾'));
        assert!(region_for(&app, &Action::PagePrev).is_some());
        assert!(region_for(&app, &Action::PageNext).is_none());
    }

    #[test]
    fn test_clicking_next_arrow_pages_forward() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        let next = region_for(&app, &Action::PageNext).unwrap();
        let action = EventHandler::handle_event(&app, &click(next));
        app.dispatch(action);
        assert_eq!(app.picker.page(), 1);
    }

    #[test]
    fn test_enter_matches_click_on_cell() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let mut by_mouse = app_with(small_set());
        by_mouse.dispatch(Action::TogglePicker);
        by_mouse.dispatch(Action::PageNext);
        draw(&mut terminal, &mut by_mouse);
        let cell = region_for(&by_mouse, &Action::SelectIcon("Sun".to_string())).unwrap();
        let mouse_action = EventHandler::handle_event(&by_mouse, &click(cell));

        let mut by_key = app_with(small_set());
        by_key.dispatch(Action::TogglePicker);
        by_key.dispatch(Action::PageNext);
        by_key.dispatch(Action::FocusRight);
        let key_action = EventHandler::handle_event(&by_key, &press(KeyCode::Enter));

        assert_eq!(mouse_action, key_action);

        by_mouse.dispatch(mouse_action);
        by_key.dispatch(key_action);
        for app in [&by_mouse, &by_key] {
            assert!(!app.picker.is_open());
            assert_eq!(app.picker.selected_icon(), Some("Sun"));
            assert_eq!(app.picker.page(), 1);
        }
    }

    #[test]
    fn test_selection_shows_in_button() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        app.dispatch(Action::SelectIcon("Heart".to_string()));
        draw(&mut terminal, &mut app);

        let text = buffer_text(&terminal);
        assert!(text.contains('♥'));
        assert!(text.contains("Selected: Heart"));
        assert!(!text.contains("Select an Icon"));
    }

    #[test]
    fn test_popup_swallows_background_clicks() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        // Popup is 60x20 centered in 80x30: bottom-left inner corner is blank
        let action = EventHandler::handle_event(&app, &click(ClickRegion::new(11, 23, 1, 1)));
        assert_eq!(action, Action::None);
    }

    #[test]
    fn test_scroll_over_grid_pages() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(small_set());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        let cell = region_for(&app, &Action::SelectIcon("Home".to_string())).unwrap();
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: cell.x,
            row: cell.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::handle_event(&app, &scroll), Action::PageNext);
    }

    #[test]
    fn test_empty_icon_set_renders() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app_with(Arc::new(IconSet::default()));
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        let text = buffer_text(&terminal);
        assert!(text.contains("Select an Icon"));
        assert!(text.contains("(no icons available)"));
        assert!(region_for(&app, &Action::PagePrev).is_none());
        assert!(region_for(&app, &Action::PageNext).is_none());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        let config = PickerConfig::default();
        let mut app = App::new(IconPicker::with_builtin_icons(config).unwrap());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);
        assert!(app.picker.is_open());
    }

    #[test]
    fn test_large_page_clips_cells_to_popup() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let config = PickerConfig::new(10, 10, 3, 7);
        let mut app = App::new(IconPicker::with_builtin_icons(config).unwrap());
        app.dispatch(Action::TogglePicker);
        draw(&mut terminal, &mut app);

        let area = Rect::new(0, 0, 40, 20);
        for region in app.interactions.regions() {
            let b = region.bounds;
            assert!(b.x + b.width <= area.width && b.y + b.height <= area.height);
        }
    }
}
