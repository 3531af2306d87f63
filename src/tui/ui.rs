//! Top-level frame layout: header, stacked selects and the hotkey bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use super::components::{render_option_list, render_select, SelectView, SELECT_HEIGHT};
use super::theme::*;

/// Maximum width of a select container.
const SELECT_WIDTH: u16 = 48;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions from the previous frame are gone; widgets re-register below.
    app.interactions.clear();

    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Header + spacing
        Constraint::Min(0),     // Selects
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_header(frame, main_layout[0]);

    let mut constraints = vec![];
    for _ in &app.slots {
        constraints.push(Constraint::Length(SELECT_HEIGHT));
        constraints.push(Constraint::Length(1)); // Gap
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(main_layout[1]);

    let areas: Vec<Rect> = (0..app.slots.len())
        .map(|i| {
            let row = rows[i * 2];
            Rect::new(row.x + 1, row.y, row.width.saturating_sub(2).min(SELECT_WIDTH), row.height)
        })
        .collect();

    let App {
        options,
        slots,
        placeholder,
        focus,
        interactions,
        ..
    } = app;
    let options = options.as_slice();
    let placeholder = placeholder.as_str();
    let focus = *focus;

    // Containers first, then open lists, so a list paints over the
    // containers below it.
    for (id, (slot, area)) in slots.iter_mut().zip(&areas).enumerate() {
        let title = slot.title.clone();
        let view = SelectView {
            id,
            title: &title,
            placeholder,
            focus: focus.filter(|f| f.widget == id).map(|f| f.target),
        };
        slot.with_props(options, |select, props| {
            render_select(frame, *area, select, props, &view, interactions);
        });
    }

    render_hotkeys(frame, main_layout[2]);

    for (id, (slot, area)) in slots.iter_mut().zip(&areas).enumerate() {
        slot.with_props(options, |select, props| {
            render_option_list(frame, *area, select, props, id, interactions);
        });
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::raw(" "),
        Span::styled("pick", Style::new().fg(ACCENT).bold()),
        Span::styled("box", Style::new().fg(ACCENT_SOFT).bold()),
    ]);

    frame.render_widget(Paragraph::new(header), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled(" [Enter/Space]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" open/choose • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" navigate • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Tab]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" focus • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled("uit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(hotkeys), area);
}
