pub(crate) mod chart;
pub(crate) mod editor;
pub(crate) mod grid;
pub(crate) mod media;
pub(crate) mod session;
pub(crate) mod tabs;
pub(crate) mod ui;

pub(crate) use chart::{bump_series, ChartFeed, ChartFeedError};
pub(crate) use editor::EditorState;
pub(crate) use grid::{DataGridState, GRID_COLUMNS, GRID_PAGE_SIZE};
pub(crate) use media::{MediaState, MEDIA_PLAYER};
pub(crate) use session::SessionStore;
pub(crate) use tabs::Tab;
pub(crate) use ui::{
    hit, layout_rows, rect_contains, DashboardState, DragMode, DragState, HitRegions, LayoutItem,
    PanelId, DASHBOARD_LAYOUT, GRID_COLS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLineMode {
    Info,
    Help,
}

#[derive(Default)]
pub struct PerfDebugStats {
    pub frame_last_ms: f64,
    pub draw_last_ms: f64,
    pub redraw_count: u64,
}
