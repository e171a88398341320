pub(crate) mod handlers;
pub(crate) mod state;
pub(crate) mod view;

use std::time::Duration;

pub(crate) use crate::app::state::{
    ChartFeed, DashboardState, HitRegions, PerfDebugStats, SessionStore, StatusLineMode, Tab,
};
use crate::app::state::EditorState;

/// Whole-application state for one session. Created by `main` at startup
/// and threaded through every handler and render pass; nothing here is
/// shared or persisted across sessions.
pub struct AppState {
    pub tab: Tab,
    pub session: SessionStore,
    pub chart_feed: ChartFeed,
    pub startup_error: Option<String>,
    pub dashboard: DashboardState,
    pub status_line_mode: StatusLineMode,
    pub debug_perf_enabled: bool,
    pub perf_debug: PerfDebugStats,
    /// Hit regions captured by the last draw; consumed by mouse handling.
    pub hit: HitRegions,
}

impl AppState {
    pub fn new(session: SessionStore, tab: Tab) -> Self {
        let chart_feed = ChartFeed::from_committed(session.get());
        let dashboard = DashboardState::new(session.get());
        Self {
            tab,
            session,
            chart_feed,
            startup_error: None,
            dashboard,
            status_line_mode: StatusLineMode::Info,
            debug_perf_enabled: false,
            perf_debug: PerfDebugStats::default(),
            hit: HitRegions::default(),
        }
    }

    /// Session bootstrap failed (missing default payload). The app still
    /// comes up; the dashboard renders a startup error instead of panels.
    pub fn with_startup_error(message: String, tab: Tab) -> Self {
        let mut app = Self::new(SessionStore::new(""), tab);
        app.startup_error = Some(message);
        app
    }

    /// Stages the editor's current text into the session buffer. Called
    /// after every editor mutation; never re-renders the chart.
    pub fn stage_editor(&mut self) {
        self.session.stage(self.dashboard.editor.current());
    }

    /// The "Apply changes" action: commit the staged buffer and rebuild
    /// the chart feed from the newly committed value.
    pub fn apply_changes(&mut self) -> bool {
        if !self.session.commit() {
            return false;
        }
        self.chart_feed.rebuild(self.session.get());
        true
    }

    /// Switches the visible view. Leaving the dashboard discards the
    /// pending edit and re-seeds the editor from the committed value.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.tab {
            return false;
        }
        if self.tab == Tab::Dashboard {
            self.session.discard_staged();
            self.dashboard.editor = EditorState::from_text(self.session.get());
            self.dashboard.drag = None;
        }
        self.tab = tab;
        true
    }

    pub fn toggle_status_line_mode(&mut self) {
        self.status_line_mode = match self.status_line_mode {
            StatusLineMode::Info => StatusLineMode::Help,
            StatusLineMode::Help => StatusLineMode::Info,
        };
    }

    pub fn record_perf_frame(&mut self, frame_duration: Duration, draw_duration: Duration) {
        if !self.debug_perf_enabled {
            return;
        }
        self.perf_debug.frame_last_ms = frame_duration.as_secs_f64() * 1000.0;
        self.perf_debug.draw_last_ms = draw_duration.as_secs_f64() * 1000.0;
        self.perf_debug.redraw_count = self.perf_debug.redraw_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, SessionStore, Tab};
    use serde_json::json;

    const PAYLOAD: &str = r#"[{"id": "Serie 1", "data": [{"x": 2000, "y": 1}]}]"#;

    fn sample_app() -> AppState {
        AppState::new(SessionStore::new(PAYLOAD), Tab::Dashboard)
    }

    #[test]
    fn editor_is_seeded_with_the_committed_value() {
        let app = sample_app();
        assert_eq!(app.dashboard.editor.current(), PAYLOAD);
        assert_eq!(
            app.chart_feed.input().unwrap(),
            &json!([{"id": "Serie 1", "data": [{"x": 2000, "y": 1}]}])
        );
    }

    #[test]
    fn staging_leaves_the_chart_feed_alone() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("[]");
        app.stage_editor();
        app.dashboard.editor.set_from("{}");
        app.stage_editor();

        assert_eq!(app.session.get(), PAYLOAD);
        assert_eq!(app.chart_feed.version(), 0);
    }

    #[test]
    fn apply_commits_the_last_staged_text_and_rebuilds_the_feed() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("[]");
        app.stage_editor();

        assert!(app.apply_changes());
        assert_eq!(app.session.get(), "[]");
        assert_eq!(app.chart_feed.version(), 1);
        assert_eq!(app.chart_feed.input().unwrap(), &json!([]));
    }

    #[test]
    fn invalid_json_still_commits_but_the_feed_reports_the_error() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("{not valid json");
        app.stage_editor();

        assert!(app.apply_changes());
        assert_eq!(app.session.get(), "{not valid json");
        assert!(app.chart_feed.input().is_err());
    }

    #[test]
    fn tab_switching_never_commits_or_reparses() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("[1, 2, 3]");
        app.stage_editor();

        assert!(app.select_tab(Tab::Money));
        assert!(app.select_tab(Tab::Economy));
        assert!(app.select_tab(Tab::Dashboard));

        assert_eq!(app.session.commit_count(), 0);
        assert_eq!(app.chart_feed.version(), 0);
        assert_eq!(app.session.get(), PAYLOAD);
    }

    #[test]
    fn leaving_the_dashboard_discards_the_pending_edit() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("draft text");
        app.stage_editor();

        assert!(app.select_tab(Tab::Money));
        assert!(app.select_tab(Tab::Dashboard));

        assert_eq!(app.dashboard.editor.current(), PAYLOAD);
        assert!(!app.apply_changes());
    }

    #[test]
    fn startup_error_app_keeps_the_session_empty() {
        let app = AppState::with_startup_error("data.json: not found".to_string(), Tab::Dashboard);
        assert!(app.startup_error.is_some());
        assert_eq!(app.session.get(), "");
    }
}
