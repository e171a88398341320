use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::state::{
    hit, layout_rows, rect_contains, DragMode, DragState, Tab, DASHBOARD_LAYOUT,
};
use crate::app::view::ui::grid_pos_at;
use crate::app::AppState;

/// Resolves mouse gestures against the hit regions captured by the last
/// draw: sidebar clicks, focus clicks, the apply button, and the
/// move/resize drag gestures on panel chrome.
pub(crate) fn handle_mouse(app: &mut AppState, event: MouseEvent) -> bool {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_press(app, event.column, event.row),
        MouseEventKind::Drag(MouseButton::Left) => handle_drag(app, event.column, event.row),
        MouseEventKind::Up(MouseButton::Left) => {
            let was_dragging = app.dashboard.drag.is_some();
            app.dashboard.drag = None;
            was_dragging
        }
        _ => false,
    }
}

fn handle_press(app: &mut AppState, column: u16, row: u16) -> bool {
    if let Some(tab) = hit(&app.hit.sidebar_items, column, row) {
        return app.select_tab(tab);
    }
    if app.tab != Tab::Dashboard || app.startup_error.is_some() {
        return false;
    }

    if let Some(button) = app.hit.apply_button {
        if rect_contains(button, column, row) {
            app.apply_changes();
            return true;
        }
    }

    if let Some(panel) = hit(&app.hit.resize_corners, column, row) {
        app.dashboard.focus = panel;
        app.dashboard.drag = Some(DragState {
            panel,
            mode: DragMode::Resize,
            grab_dx: 0,
            grab_dy: 0,
        });
        return true;
    }

    if let Some(panel) = hit(&app.hit.panel_headers, column, row) {
        app.dashboard.focus = panel;
        let grab = grid_grab_offset(app, panel, column, row);
        app.dashboard.drag = Some(DragState {
            panel,
            mode: DragMode::Move,
            grab_dx: grab.0,
            grab_dy: grab.1,
        });
        return true;
    }

    if let Some(panel) = hit(&app.hit.panel_bodies, column, row) {
        if app.dashboard.focus != panel {
            app.dashboard.focus = panel;
            return true;
        }
    }
    false
}

fn handle_drag(app: &mut AppState, column: u16, row: u16) -> bool {
    let Some(drag) = app.dashboard.drag else {
        return false;
    };
    let Some(area) = app.hit.grid_area else {
        return false;
    };
    let rows = layout_rows(&DASHBOARD_LAYOUT);
    let Some((grid_x, grid_y)) = grid_pos_at(area, rows, column, row) else {
        return false;
    };
    match drag.mode {
        DragMode::Move => app.dashboard.move_panel(
            drag.panel,
            grid_x.saturating_sub(drag.grab_dx),
            grid_y.saturating_sub(drag.grab_dy),
        ),
        DragMode::Resize => app.dashboard.resize_panel(drag.panel, grid_x, grid_y),
    }
}

fn grid_grab_offset(
    app: &AppState,
    panel: crate::app::state::PanelId,
    column: u16,
    row: u16,
) -> (u16, u16) {
    let Some(area) = app.hit.grid_area else {
        return (0, 0);
    };
    let rows = layout_rows(&DASHBOARD_LAYOUT);
    let Some((grid_x, grid_y)) = grid_pos_at(area, rows, column, row) else {
        return (0, 0);
    };
    let Some(item) = app.dashboard.layout_item(panel) else {
        return (0, 0);
    };
    (
        grid_x.saturating_sub(item.x),
        grid_y.saturating_sub(item.y),
    )
}

#[cfg(test)]
mod tests {
    use super::handle_mouse;
    use crate::app::state::{DragMode, PanelId, SessionStore, Tab, DASHBOARD_LAYOUT};
    use crate::app::view::ui::draw_ui;
    use crate::app::AppState;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const PAYLOAD: &str = r#"[{"id": "Serie 1", "data": [{"x": 2000, "y": 1}]}]"#;

    fn drawn_app() -> AppState {
        let mut app = AppState::new(SessionStore::new(PAYLOAD), Tab::Dashboard);
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_a_sidebar_entry_selects_its_tab() {
        let mut app = drawn_app();
        let (tab, rect) = app.hit.sidebar_items[1];
        assert_eq!(tab, Tab::Money);
        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y)
        ));
        assert_eq!(app.tab, Tab::Money);
    }

    #[test]
    fn clicking_apply_commits_the_staged_text() {
        let mut app = drawn_app();
        app.dashboard.editor.set_from("[]");
        app.stage_editor();
        let button = app.hit.apply_button.unwrap();

        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y)
        ));
        assert_eq!(app.session.get(), "[]");
        assert_eq!(app.chart_feed.version(), 1);
    }

    #[test]
    fn dragging_a_header_moves_the_panel_in_grid_units() {
        let mut app = drawn_app();
        let (panel, header) = app
            .hit
            .panel_headers
            .iter()
            .copied()
            .find(|(panel, _)| *panel == PanelId::Editor)
            .unwrap();
        assert_eq!(panel, PanelId::Editor);

        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), header.x, header.y)
        ));
        let area = app.hit.grid_area.unwrap();
        let target_col = area.x + area.width / 2;
        let target_row = area.y + area.height / 2;
        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), target_col, target_row)
        ));
        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), target_col, target_row)
        ));

        let moved = app.dashboard.layout_item(PanelId::Editor).unwrap();
        assert_ne!((moved.x, moved.y), (0, 0));
        assert_eq!(DASHBOARD_LAYOUT[0].x, 0);
        assert_eq!(DASHBOARD_LAYOUT[0].y, 0);
        assert!(app.dashboard.drag.is_none());
    }

    #[test]
    fn corner_drag_resizes_instead_of_moving() {
        let mut app = drawn_app();
        let (panel, corner) = app
            .hit
            .resize_corners
            .iter()
            .copied()
            .find(|(panel, _)| *panel == PanelId::Editor)
            .unwrap();

        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), corner.x, corner.y)
        ));
        assert_eq!(
            app.dashboard.drag.map(|drag| (drag.panel, drag.mode)),
            Some((panel, DragMode::Resize))
        );

        let area = app.hit.grid_area.unwrap();
        assert!(handle_mouse(
            &mut app,
            mouse(
                MouseEventKind::Drag(MouseButton::Left),
                area.x + area.width - 1,
                area.y + area.height - 1
            )
        ));
        let resized = app.dashboard.layout_item(PanelId::Editor).unwrap();
        assert_eq!((resized.w, resized.h), (12, 6));
    }

    #[test]
    fn clicking_a_panel_body_focuses_it() {
        let mut app = drawn_app();
        let (_, rect) = app
            .hit
            .panel_bodies
            .iter()
            .copied()
            .find(|(panel, _)| *panel == PanelId::Data)
            .unwrap();
        let inside_y = rect.y + rect.height / 2;

        assert!(handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), rect.x + 1, inside_y)
        ));
        assert_eq!(app.dashboard.focus, PanelId::Data);
    }
}
