//! Toggle button showing the current selection.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

pub const BUTTON_WIDTH: u16 = 11;
pub const BUTTON_HEIGHT: u16 = 5;

/// Render the toggle button. It is empty until an icon has been picked.
pub fn render_toggle_button(frame: &mut Frame, area: Rect, app: &mut App) {
    let border_color = if app.picker.is_open() { ACCENT_MINT } else { TEXT_DIM };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color))
        .style(Style::new().bg(Color::Black));
    let inner = block.inner(area);

    let mut lines: Vec<Line> = vec![];
    // Vertically center the glyph
    for _ in 0..inner.height.saturating_sub(1) / 2 {
        lines.push(Line::raw(""));
    }
    if let Some(glyph) = app.picker.selected_glyph() {
        lines.push(Line::styled(
            glyph.to_string(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);

    app.interactions.register(InteractiveRegion::clickable(
        "toggle_button",
        area.into(),
        Action::TogglePicker,
    ));
}
