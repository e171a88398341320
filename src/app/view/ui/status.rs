use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::view::theme::ui_colors;
use crate::app::{AppState, StatusLineMode, Tab};

use super::text::truncate_to_width;

pub(super) fn build_status_line(app: &AppState) -> Line<'static> {
    let mut segments = Vec::new();
    match app.status_line_mode {
        StatusLineMode::Info => {
            segments.push(format!("tab: {}", app.tab.label().to_ascii_lowercase()));
            if app.tab == Tab::Dashboard && app.startup_error.is_none() {
                segments.push(format!("panel: {}", app.dashboard.focus.key()));
                let json = if app.chart_feed.input().is_ok() {
                    "ok"
                } else {
                    "error"
                };
                segments.push(format!("json: {json}"));
                if app.session.has_staged() {
                    segments.push("pending edits (Ctrl+S applies)".to_string());
                }
            }
            segments.push("Alt+H help".to_string());
        }
        StatusLineMode::Help => {
            segments.push("Alt+1..3 tabs".to_string());
            segments.push("Tab/Shift+Tab panel focus".to_string());
            segments.push("Ctrl+S apply changes".to_string());
            segments.push("drag a panel header to move, its corner to resize".to_string());
            segments.push("Ctrl+C quit".to_string());
            segments.push("Alt+H info".to_string());
        }
    }
    let status_text = segments.join("  •  ");
    Line::from(Span::styled(
        status_text,
        Style::default()
            .fg(ui_colors().status_fg)
            .add_modifier(Modifier::DIM),
    ))
}

pub(super) fn build_debug_perf_lines(app: &AppState, width: usize) -> Vec<Line<'static>> {
    if !app.debug_perf_enabled || width == 0 {
        return Vec::new();
    }

    let line1_raw = format!(
        "perf frame:{:.2}ms draw:{:.2}ms",
        app.perf_debug.frame_last_ms, app.perf_debug.draw_last_ms
    );
    let line1 = truncate_to_width(&line1_raw, width);
    let line2_raw = format!(
        "redraw:{} feed_version:{} commits:{}",
        app.perf_debug.redraw_count,
        app.chart_feed.version(),
        app.session.commit_count()
    );
    let line2 = truncate_to_width(&line2_raw, width);

    let debug_fg = ui_colors().debug_perf_fg;
    vec![
        Line::from(Span::styled(
            line1,
            Style::default().fg(debug_fg).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            line2,
            Style::default().fg(debug_fg).add_modifier(Modifier::DIM),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::{build_debug_perf_lines, build_status_line};
    use crate::app::{AppState, SessionStore, Tab};

    #[test]
    fn info_line_reports_pending_edits_after_staging() {
        let mut app = AppState::new(SessionStore::new("[]"), Tab::Dashboard);
        let before = format!("{:?}", build_status_line(&app));
        assert!(!before.contains("pending edits"));

        app.dashboard.editor.insert_char('x');
        app.stage_editor();
        let after = format!("{:?}", build_status_line(&app));
        assert!(after.contains("pending edits"));
    }

    #[test]
    fn perf_lines_render_only_when_enabled() {
        let mut app = AppState::new(SessionStore::new("[]"), Tab::Dashboard);
        assert!(build_debug_perf_lines(&app, 80).is_empty());
        app.debug_perf_enabled = true;
        assert_eq!(build_debug_perf_lines(&app, 80).len(), 2);
    }
}
