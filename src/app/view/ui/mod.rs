mod constants;
mod layout;
mod panels;
mod sidebar;
mod status;
mod text;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::app::state::{layout_rows, PanelId, Tab, DASHBOARD_LAYOUT};
use crate::app::AppState;

use self::constants::{DEBUG_PANEL_HEIGHT, PANEL_HEADER_HEIGHT, SIDEBAR_WIDTH, STATUS_HEIGHT};
use self::panels::{
    render_chart_panel, render_data_grid_panel, render_editor_panel, render_error_panel,
    render_media_panel, render_panel_frame,
};
use self::sidebar::render_sidebar;
use self::status::{build_debug_perf_lines, build_status_line};

pub(crate) use layout::grid_pos_at;

pub(crate) fn draw_ui(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    if size.width == 0 || size.height == 0 {
        return;
    }

    // Clear the whole frame every draw; panels may have moved since the
    // previous one and would otherwise leave ghost cells behind.
    f.render_widget(Clear, size);
    app.hit.clear();

    let debug_height = if app.debug_perf_enabled {
        DEBUG_PANEL_HEIGHT
    } else {
        0
    };
    let footer_height = STATUS_HEIGHT + debug_height;
    if size.height <= footer_height {
        return;
    }
    let body = Rect {
        height: size.height - footer_height,
        ..size
    };
    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 3);
    let sidebar_area = Rect {
        width: sidebar_width,
        ..body
    };
    let content_area = Rect {
        x: body.x + sidebar_width,
        y: body.y,
        width: body.width - sidebar_width,
        height: body.height,
    };

    render_sidebar(f, sidebar_area, app);
    match app.tab {
        Tab::Dashboard => draw_dashboard(f, content_area, app),
        Tab::Money => draw_static_view(f, content_area, "Paper", app.tab),
        Tab::Economy => draw_static_view(f, content_area, "Tom", app.tab),
    }

    let status_area = Rect {
        x: size.x,
        y: body.y + body.height,
        width: size.width,
        height: STATUS_HEIGHT,
    };
    f.render_widget(Paragraph::new(build_status_line(app)), status_area);

    if debug_height > 0 {
        let debug_area = Rect {
            x: size.x,
            y: status_area.y + STATUS_HEIGHT,
            width: size.width,
            height: debug_height,
        };
        let mut lines = build_debug_perf_lines(app, debug_area.width as usize);
        lines.truncate(debug_area.height as usize);
        if !lines.is_empty() {
            f.render_widget(Paragraph::new(Text::from(lines)), debug_area);
        }
    }
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &mut AppState) {
    if let Some(message) = app.startup_error.clone() {
        render_error_panel(f, area, "startup error", &message);
        return;
    }
    app.hit.grid_area = Some(area);

    let rows = layout_rows(&DASHBOARD_LAYOUT);
    let resolved = layout::resolve_layout(&app.dashboard.draw_order(), rows, area);
    for (panel, rect) in resolved {
        if rect.width < 4 || rect.height < 3 {
            continue;
        }
        let focused = panel == app.dashboard.focus;

        app.hit.panel_bodies.push((panel, rect));
        app.hit.panel_headers.push((
            panel,
            Rect {
                height: (PANEL_HEADER_HEIGHT + 1).min(rect.height),
                ..rect
            },
        ));
        app.hit.resize_corners.push((
            panel,
            Rect {
                x: rect.x + rect.width - 1,
                y: rect.y + rect.height - 1,
                width: 1,
                height: 1,
            },
        ));

        let content = render_panel_frame(f, rect, panel, focused);
        if content.width == 0 || content.height == 0 {
            continue;
        }
        match panel {
            PanelId::Editor => {
                app.hit.apply_button =
                    render_editor_panel(f, content, &mut app.dashboard.editor, focused);
            }
            PanelId::Chart => render_chart_panel(f, content, &app.chart_feed),
            PanelId::Media => render_media_panel(f, content, &app.dashboard.media),
            PanelId::Data => render_data_grid_panel(f, content, &app.dashboard.grid, focused),
        }
    }
}

fn draw_static_view(f: &mut Frame, area: Rect, title: &str, tab: Tab) {
    if area.width < 2 || area.height < 3 {
        return;
    }
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::raw(format!("Name of option is {}", tab.label()))),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

#[cfg(test)]
mod tests {
    use crate::app::state::{PanelId, SessionStore};
    use crate::app::{AppState, Tab};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const PAYLOAD: &str = r#"[{"id": "Serie 1", "data": [{"x": 2000, "y": 1}, {"x": 2001, "y": 2}]}]"#;

    fn draw_once(app: &mut AppState) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| super::draw_ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        let width = buffer.area.width as usize;
        let mut out = String::new();
        for (index, cell) in buffer.content.iter().enumerate() {
            out.push_str(cell.symbol());
            if width > 0 && (index + 1) % width == 0 {
                out.push('\n');
            }
        }
        out
    }

    #[test]
    fn dashboard_renders_all_four_panels() {
        let mut app = AppState::new(SessionStore::new(PAYLOAD), Tab::Dashboard);
        let text = buffer_text(&draw_once(&mut app));

        for panel in PanelId::ALL {
            assert!(text.contains(panel.title()), "missing panel {panel:?}");
        }
        assert!(text.contains("Apply changes"));
        assert!(text.contains("Snow"));
    }

    #[test]
    fn rerender_without_state_change_is_identical() {
        let mut app = AppState::new(SessionStore::new(PAYLOAD), Tab::Dashboard);
        let first = draw_once(&mut app);
        let second = draw_once(&mut app);
        assert_eq!(first, second);
    }

    #[test]
    fn draw_captures_hit_regions_for_every_panel() {
        let mut app = AppState::new(SessionStore::new(PAYLOAD), Tab::Dashboard);
        draw_once(&mut app);

        assert_eq!(app.hit.panel_headers.len(), 4);
        assert_eq!(app.hit.resize_corners.len(), 4);
        assert_eq!(app.hit.sidebar_items.len(), 3);
        assert!(app.hit.apply_button.is_some());
        assert!(app.hit.grid_area.is_some());
    }

    #[test]
    fn static_views_render_their_placeholder_titles() {
        let mut app = AppState::new(SessionStore::new(PAYLOAD), Tab::Money);
        let text = buffer_text(&draw_once(&mut app));
        assert!(text.contains("Paper"));
        assert!(text.contains("Name of option is Money"));

        app.tab = Tab::Economy;
        let text = buffer_text(&draw_once(&mut app));
        assert!(text.contains("Tom"));
        assert!(text.contains("Name of option is Economy"));
    }

    #[test]
    fn invalid_committed_payload_surfaces_in_the_chart_panel() {
        let mut app = AppState::new(SessionStore::new("{not valid json"), Tab::Dashboard);
        let text = buffer_text(&draw_once(&mut app));
        assert!(text.contains("invalid JSON"));
        assert!(text.contains("Editor"));
    }

    #[test]
    fn startup_error_replaces_the_panel_grid() {
        let mut app =
            AppState::with_startup_error("data.json: No such file".to_string(), Tab::Dashboard);
        let text = buffer_text(&draw_once(&mut app));
        assert!(text.contains("startup error"));
        assert!(!text.contains("Apply changes"));
    }
}
