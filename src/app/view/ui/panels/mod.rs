mod chart;
mod editor;
mod grid;
mod media;

pub(super) use chart::render_chart_panel;
pub(super) use editor::render_editor_panel;
pub(super) use grid::render_data_grid_panel;
pub(super) use media::render_media_panel;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::state::PanelId;
use crate::app::view::theme::ui_colors;

use super::constants::PANEL_HEADER_HEIGHT;
use super::text::truncate_to_width;

/// Panel chrome: border, header row (the drag handle), content area.
/// Returns the content rectangle below the header.
pub(super) fn render_panel_frame(
    f: &mut Frame,
    area: Rect,
    panel: PanelId,
    focused: bool,
) -> Rect {
    if area.width < 2 || area.height < 2 {
        return Rect::default();
    }
    let theme = ui_colors();
    let border_fg = if focused {
        theme.panel_border_focus_fg
    } else {
        theme.panel_border_fg
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    // Panels may overlap while dragged; wipe whatever was underneath.
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return Rect::default();
    }

    let header_area = Rect {
        height: PANEL_HEADER_HEIGHT.min(inner.height),
        ..inner
    };
    let drag_glyph = "⠿";
    let left = format!("{} {}", panel.icon(), panel.title());
    let left = truncate_to_width(&left, (inner.width as usize).saturating_sub(2));
    let spacer_width = (inner.width as usize)
        .saturating_sub(left.chars().count())
        .saturating_sub(1);
    let header = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(theme.panel_header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(spacer_width)),
        Span::styled(drag_glyph, Style::default().fg(theme.panel_hint_fg)),
    ]);
    f.render_widget(Paragraph::new(header), header_area);

    Rect {
        x: inner.x,
        y: inner.y + header_area.height,
        width: inner.width,
        height: inner.height.saturating_sub(header_area.height),
    }
}

/// Replaces a panel's content (or the whole dashboard at startup) with an
/// error indicator instead of crashing the view.
pub(super) fn render_error_panel(f: &mut Frame, area: Rect, title: &str, message: &str) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let theme = ui_colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error_fg))
        .title(format!(" {title} "));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let text = Text::from(vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error_fg),
        )),
    ]);
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}
