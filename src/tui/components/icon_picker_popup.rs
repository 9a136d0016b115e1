//! Paged icon grid popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::picker::Paginated;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

pub const POPUP_TITLE: &str = "Select an Icon";
pub const PREV_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";

/// Popup regions sit above everything drawn underneath.
pub const POPUP_PRIORITY: i32 = 10;

/// Horizontal gap between grid cells
const CELL_GAP: u16 = 1;

/// Render the icon picker as a centered popup.
pub fn render_icon_picker_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    let config = *app.picker.config();

    // Calculate centered popup area
    let popup_width = config.picker_width.min(area.width);
    let popup_height = config.picker_height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // Clicks on the popup background must not reach the toggle button
    let mut regions = vec![
        InteractiveRegion::clickable("popup", popup_area.into(), Action::None)
            .with_priority(POPUP_PRIORITY),
    ];

    let layout = Layout::vertical([
        Constraint::Length(2), // Title + rule
        Constraint::Min(0),    // Grid
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    render_header(frame, layout[0], app, &mut regions);
    render_grid(frame, layout[1], app, &mut regions);
    render_footer(frame, layout[2], app);

    for region in regions {
        app.interactions.register(region);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, regions: &mut Vec<InteractiveRegion>) {
    if area.height == 0 {
        return;
    }

    let title_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            POPUP_TITLE,
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    // Pagination: "‹ 3 ›", right aligned
    let picker = &app.picker;
    let has_prev = picker.has_prev_page();
    let has_next = picker.has_next_page();
    let label = (picker.page() + 1).to_string();
    let controls_width = label.chars().count() as u16 + 4;

    if area.width >= controls_width {
        let controls_x = area.x + area.width - controls_width;
        let arrow_style = |enabled: bool| {
            if enabled {
                Style::new().fg(ACCENT_MINT).add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(CONTROL_DISABLED)
            }
        };

        let controls = Line::from(vec![
            Span::styled(PREV_ARROW, arrow_style(has_prev)),
            Span::raw(" "),
            Span::styled(label, Style::new().fg(TEXT_WHITE)),
            Span::raw(" "),
            Span::styled(NEXT_ARROW, arrow_style(has_next)),
        ]);
        frame.render_widget(
            Paragraph::new(controls),
            Rect::new(controls_x, area.y, controls_width, 1),
        );

        // Disabled controls get no click target
        if has_prev {
            regions.push(
                InteractiveRegion::clickable(
                    "page_prev",
                    ClickRegion::new(controls_x, area.y, 1, 1),
                    Action::PagePrev,
                )
                .with_priority(POPUP_PRIORITY + 1),
            );
        }
        if has_next {
            regions.push(
                InteractiveRegion::clickable(
                    "page_next",
                    ClickRegion::new(controls_x + controls_width - 1, area.y, 1, 1),
                    Action::PageNext,
                )
                .with_priority(POPUP_PRIORITY + 1),
            );
        }
    }

    if area.height > 1 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "─".repeat(area.width as usize),
                Style::new().fg(TEXT_DIM),
            )),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App, regions: &mut Vec<InteractiveRegion>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let picker = &app.picker;
    let config = picker.config();
    let icons = picker.page_items();

    if picker.icon_set().is_empty() || icons.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("(no icons available)", Style::new().fg(TEXT_DIM)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    regions.push(
        InteractiveRegion::scrollable("icon_grid", area.into(), Action::PagePrev, Action::PageNext)
            .with_priority(POPUP_PRIORITY + 1),
    );

    let columns = config.columns_in_one_page as u32;
    let cell_width = config.icon_width.max(1);
    let cell_height = config.icon_height.max(1);
    let right = area.x as u32 + area.width as u32;
    let bottom = area.y as u32 + area.height as u32;

    for (i, icon) in icons.iter().enumerate() {
        let row = i as u32 / columns;
        let col = i as u32 % columns;
        let x = area.x as u32 + col * (cell_width + CELL_GAP) as u32;
        let y = area.y as u32 + row * cell_height as u32;

        // Cells that do not fit the popup are not drawn
        if x + cell_width as u32 > right || y + cell_height as u32 > bottom {
            continue;
        }

        let cell = Rect::new(x as u16, y as u16, cell_width, cell_height);
        render_cell(frame, cell, &icon.glyph, i == picker.focused());

        regions.push(
            InteractiveRegion::clickable(
                "icon_cell",
                cell.into(),
                Action::SelectIcon(icon.name.clone()),
            )
            .with_priority(POPUP_PRIORITY + 2),
        );
    }
}

fn render_cell(frame: &mut Frame, cell: Rect, glyph: &str, focused: bool) {
    let (border_style, glyph_style) = if focused {
        (
            Style::new().fg(CELL_FOCUS).add_modifier(Modifier::BOLD),
            Style::new().fg(CELL_FOCUS).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::new().fg(ACCENT_BLUE), Style::new().fg(TEXT_WHITE))
    };

    if cell.width >= 3 && cell.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(cell);

        let mut lines: Vec<Line> = vec![];
        for _ in 0..inner.height.saturating_sub(1) / 2 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(glyph.to_string(), glyph_style));

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            cell,
        );
    } else {
        // Too small for a border: fill the cell instead
        let fill = if focused {
            Style::new().bg(CELL_FOCUS).fg(Color::Black)
        } else {
            Style::new().bg(ACCENT_BLUE).fg(TEXT_WHITE)
        };
        frame.render_widget(
            Paragraph::new(glyph.to_string())
                .alignment(Alignment::Center)
                .style(fill),
            cell,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let mut spans = vec![];
    if let Some(icon) = app.picker.focused_icon() {
        spans.push(Span::styled(icon.name.clone(), Style::new().fg(ACCENT_MINT)));
        spans.push(Span::styled("  ", Style::new().fg(TEXT_DIM)));
    }
    spans.extend([
        Span::styled("[←↑↓→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" move · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[PgUp/PgDn]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" page · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
