//! Select widget rendering.
//!
//! The container is drawn in place; the option list is drawn separately by
//! [`render_option_list`] so the host can paint it after every container and
//! have it overlay whatever sits below.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::FocusTarget;
use crate::select::{Select, SelectMode, SelectProps};
use crate::tui::interaction::{
    ClickRegion, HitTarget, InteractionRegistry, InteractiveRegion, NESTED_PRIORITY,
    OVERLAY_PRIORITY, WidgetId,
};
use crate::tui::theme::*;

/// Width of the controls on the right edge: `× │ ▾`
const CONTROLS_WIDTH: u16 = 5;

/// Height of the closed container including borders.
pub const SELECT_HEIGHT: u16 = 3;

/// Static presentation details for one select.
#[derive(Debug, Clone, Copy)]
pub struct SelectView<'a> {
    pub id: WidgetId,
    pub title: &'a str,
    pub placeholder: &'a str,
    /// Focused element within this widget, if the widget holds focus
    pub focus: Option<FocusTarget>,
}

/// Render the select container and register its hit regions.
pub fn render_select(
    frame: &mut Frame,
    area: Rect,
    select: &Select,
    props: &SelectProps<'_>,
    view: &SelectView<'_>,
    registry: &mut InteractionRegistry,
) {
    let focused_container = view.focus == Some(FocusTarget::Container);
    let border_color = if view.focus.is_some() { ACCENT } else { BORDER };

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .title_style(Style::new().fg(if focused_container { ACCENT } else { TEXT_DIM }))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    registry.register(InteractiveRegion::new(
        view.id,
        HitTarget::Container,
        ClickRegion::from(area),
    ));

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let row = Rect::new(inner.x, inner.y, inner.width, 1);
    let value_width = row.width.saturating_sub(CONTROLS_WIDTH + 1);
    let value_area = Rect::new(row.x, row.y, value_width, 1);

    match &props.mode {
        SelectMode::Single { value, .. } => {
            let line = match value {
                Some(option) => Line::styled(option.label.as_str(), Style::new().fg(TEXT_WHITE)),
                None => Line::styled(view.placeholder, Style::new().fg(TEXT_DIM)),
            };
            frame.render_widget(Paragraph::new(line), value_area);
        }
        SelectMode::Multiple { value, .. } => {
            if value.is_empty() {
                let line = Line::styled(view.placeholder, Style::new().fg(TEXT_DIM));
                frame.render_widget(Paragraph::new(line), value_area);
            } else {
                render_chips(frame, value_area, props, view, registry);
            }
        }
    }

    if row.width < CONTROLS_WIDTH {
        return;
    }

    let controls_x = row.right() - CONTROLS_WIDTH;
    let clear_style = if view.focus == Some(FocusTarget::Clear) {
        Style::new().fg(REMOVE).add_modifier(Modifier::REVERSED)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let caret = if select.is_open() { "▴" } else { "▾" };
    let controls = Line::from(vec![
        Span::styled("×", clear_style),
        Span::raw(" "),
        Span::styled("│", Style::new().fg(BORDER)),
        Span::raw(" "),
        Span::styled(caret, Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(
        Paragraph::new(controls),
        Rect::new(controls_x, row.y, CONTROLS_WIDTH, 1),
    );

    registry.register(
        InteractiveRegion::new(view.id, HitTarget::Clear, ClickRegion::new(controls_x, row.y, 1, 1))
            .with_priority(NESTED_PRIORITY),
    );
}

/// One chip per selected option: ` label × `. Chips that don't fit are
/// replaced by an ellipsis.
fn render_chips(
    frame: &mut Frame,
    area: Rect,
    props: &SelectProps<'_>,
    view: &SelectView<'_>,
    registry: &mut InteractionRegistry,
) {
    let mut spans: Vec<Span> = vec![];
    let mut x = area.x;

    for (i, option) in props.selected().into_iter().enumerate() {
        let focused = view.focus == Some(FocusTarget::Chip(i));
        let base = if focused {
            Style::new().bg(ACCENT).fg(Color::Black)
        } else {
            Style::new().bg(CHIP_BG).fg(TEXT_WHITE)
        };
        let label = Span::styled(format!(" {} ", option.label), base);
        let remove = Span::styled("× ", base.fg(REMOVE));
        let width = (label.width() + remove.width()) as u16;

        if x + width > area.right() {
            if x < area.right() {
                spans.push(Span::styled("…", Style::new().fg(TEXT_DIM)));
            }
            break;
        }

        registry.register(
            InteractiveRegion::new(view.id, HitTarget::Chip(i), ClickRegion::new(x, area.y, width, 1))
                .with_priority(NESTED_PRIORITY),
        );

        spans.push(label);
        spans.push(remove);
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the open option list below `anchor` and register its rows.
///
/// Does nothing while the select is closed. Rows past the bottom of the
/// frame are not drawn.
pub fn render_option_list(
    frame: &mut Frame,
    anchor: Rect,
    select: &Select,
    props: &SelectProps<'_>,
    id: WidgetId,
    registry: &mut InteractionRegistry,
) {
    if !select.is_open() {
        return;
    }

    let bottom = frame.area().bottom();
    let wanted = props.options.len().max(1) as u16 + 2;
    let height = wanted.min(bottom.saturating_sub(anchor.bottom()));
    if height < 3 {
        return;
    }
    let list_area = Rect::new(anchor.x, anchor.bottom(), anchor.width, height);

    frame.render_widget(Clear, list_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT))
        .style(Style::new().bg(LIST_BG));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    // Padding around the rows still belongs to the container.
    registry.register(
        InteractiveRegion::new(id, HitTarget::Container, ClickRegion::from(list_area))
            .with_priority(OVERLAY_PRIORITY),
    );

    if props.options.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("  (no options)", Style::new().fg(TEXT_DIM))),
            inner,
        );
        return;
    }

    let highlighted = select.highlighted_index();
    for (i, option) in props.options.iter().enumerate().take(inner.height as usize) {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let is_selected = props.is_option_selected(option);
        let is_highlighted = i == highlighted;

        let style = match (is_highlighted, is_selected) {
            (true, true) => Style::new().bg(HIGHLIGHT_BG).fg(ACCENT_SOFT).add_modifier(Modifier::BOLD),
            (true, false) => Style::new().bg(HIGHLIGHT_BG).fg(TEXT_WHITE),
            (false, true) => Style::new().bg(SELECTED_BG).fg(Color::Black),
            (false, false) => Style::new().fg(TEXT_WHITE),
        };
        let marker = if is_selected { "✓ " } else { "  " };

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(option.label.as_str()),
            ]))
            .style(style),
            row,
        );

        registry.register(
            InteractiveRegion::new(id, HitTarget::Option(i), ClickRegion::from(row))
                .with_priority(OVERLAY_PRIORITY),
        );
    }
}
