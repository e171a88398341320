use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::view::theme::ui_colors;
use crate::app::AppState;

use super::text::truncate_to_width;

pub(super) fn render_sidebar(f: &mut Frame, area: Rect, app: &mut AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = ui_colors();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.panel_border_fg));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::default()];
    let mut row = inner.y + 1;
    for tab in crate::app::Tab::ALL {
        let active = tab == app.tab;
        let marker = if active { "▌" } else { " " };
        let label = truncate_to_width(
            &format!("{marker}{} {}", tab.icon(), tab.label()),
            inner.width as usize,
        );
        let style = if active {
            Style::default()
                .fg(theme.sidebar_active_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.sidebar_fg)
        };
        lines.push(Line::from(Span::styled(label, style)));

        if row < inner.y + inner.height {
            app.hit.sidebar_items.push((
                tab,
                Rect {
                    x: inner.x,
                    y: row,
                    width: inner.width,
                    height: 1,
                },
            ));
        }
        lines.push(Line::default());
        row += 2;
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}
