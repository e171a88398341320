use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::app::state::{MediaState, MEDIA_PLAYER};
use crate::app::view::theme::ui_colors;

use super::super::text::truncate_to_width;

/// Player card: source URL, transport state, position gauge and the
/// native-controls hint row.
pub(in crate::app::view::ui) fn render_media_panel(f: &mut Frame, area: Rect, media: &MediaState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = ui_colors();
    let width = area.width as usize;

    let state_glyph = if media.playing { "⏸" } else { "▶" };
    let state_label = if media.playing { "playing" } else { "paused" };
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(MEDIA_PLAYER.url, width),
            Style::default()
                .fg(theme.panel_hint_fg)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{state_glyph} {state_label}"),
                Style::default()
                    .fg(theme.gauge_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   vol {}%", media.volume),
                Style::default().fg(theme.panel_hint_fg),
            ),
        ]),
    ];
    if MEDIA_PLAYER.controls && area.height > 5 {
        lines.push(Line::default());
    }
    let text_height = (lines.len() as u16).min(area.height);
    f.render_widget(
        Paragraph::new(Text::from(lines)),
        Rect {
            height: text_height,
            ..area
        },
    );

    if area.height > text_height {
        let gauge_area = Rect {
            x: area.x,
            y: area.y + text_height,
            width: area.width,
            height: 1,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.gauge_fg))
            .label(media.timestamp())
            .ratio(media.progress_ratio().clamp(0.0, 1.0));
        f.render_widget(gauge, gauge_area);
    }

    if MEDIA_PLAYER.controls && area.height > text_height + 1 {
        let controls_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let controls = Line::from(Span::styled(
            truncate_to_width("Space play/pause  ←/→ seek  +/- volume", width),
            Style::default()
                .fg(theme.panel_hint_fg)
                .add_modifier(Modifier::DIM),
        ));
        f.render_widget(Paragraph::new(controls), controls_area);
    }
}
