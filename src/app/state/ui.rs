use ratatui::layout::Rect;

use super::editor::EditorState;
use super::grid::DataGridState;
use super::media::MediaState;
use super::tabs::Tab;

pub const GRID_COLS: u16 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PanelId {
    Editor,
    Chart,
    Media,
    Data,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [PanelId::Editor, PanelId::Chart, PanelId::Media, PanelId::Data];

    pub fn key(self) -> &'static str {
        match self {
            PanelId::Editor => "editor",
            PanelId::Chart => "chart",
            PanelId::Media => "media",
            PanelId::Data => "data",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Editor => "Editor",
            PanelId::Chart => "Bump chart",
            PanelId::Media => "Media",
            PanelId::Data => "Data grid",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PanelId::Editor => "◳",
            PanelId::Chart => "◉",
            PanelId::Media => "▶",
            PanelId::Data => "▤",
        }
    }

    pub fn next(self) -> PanelId {
        let index = PanelId::ALL
            .iter()
            .position(|panel| *panel == self)
            .unwrap_or_default();
        PanelId::ALL[(index + 1) % PanelId::ALL.len()]
    }

    pub fn previous(self) -> PanelId {
        let index = PanelId::ALL
            .iter()
            .position(|panel| *panel == self)
            .unwrap_or_default();
        PanelId::ALL[(index + PanelId::ALL.len() - 1) % PanelId::ALL.len()]
    }
}

/// One grid cell assignment on the 12-column dashboard grid. Pure data;
/// the view resolves it to terminal rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutItem {
    pub id: PanelId,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl LayoutItem {
    pub const fn new(id: PanelId, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { id, x, y, w, h }
    }
}

/// The static dashboard layout. Drag and resize gestures mutate the
/// runtime copy on `DashboardState`, never this constant.
pub const DASHBOARD_LAYOUT: [LayoutItem; 4] = [
    LayoutItem::new(PanelId::Editor, 0, 0, 6, 3),
    LayoutItem::new(PanelId::Chart, 6, 0, 6, 3),
    LayoutItem::new(PanelId::Media, 0, 3, 6, 3),
    LayoutItem::new(PanelId::Data, 6, 3, 6, 3),
];

pub fn layout_rows(items: &[LayoutItem]) -> u16 {
    items
        .iter()
        .map(|item| item.y + item.h)
        .max()
        .unwrap_or(1)
        .max(1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub panel: PanelId,
    pub mode: DragMode,
    /// Grid-unit offset between the grab point and the panel origin, so a
    /// move keeps the grab point under the pointer.
    pub grab_dx: u16,
    pub grab_dy: u16,
}

/// Hit regions captured during the last draw; mouse handling resolves
/// clicks and drags against these.
#[derive(Default)]
pub struct HitRegions {
    pub sidebar_items: Vec<(Tab, Rect)>,
    pub panel_headers: Vec<(PanelId, Rect)>,
    pub panel_bodies: Vec<(PanelId, Rect)>,
    pub resize_corners: Vec<(PanelId, Rect)>,
    pub apply_button: Option<Rect>,
    pub grid_area: Option<Rect>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.sidebar_items.clear();
        self.panel_headers.clear();
        self.panel_bodies.clear();
        self.resize_corners.clear();
        self.apply_button = None;
        self.grid_area = None;
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn hit<T: Copy>(regions: &[(T, Rect)], column: u16, row: u16) -> Option<T> {
    // Later entries draw on top, so scan back to front.
    regions
        .iter()
        .rev()
        .find(|(_, rect)| rect_contains(*rect, column, row))
        .map(|(value, _)| *value)
}

/// View-state of the dashboard tab: the runtime layout copy, panel focus,
/// the per-panel states, and any in-flight drag gesture.
pub struct DashboardState {
    pub layout: Vec<LayoutItem>,
    pub focus: PanelId,
    pub editor: EditorState,
    pub grid: DataGridState,
    pub media: MediaState,
    pub drag: Option<DragState>,
}

impl DashboardState {
    pub fn new(editor_seed: &str) -> Self {
        Self {
            layout: DASHBOARD_LAYOUT.to_vec(),
            focus: PanelId::Editor,
            editor: EditorState::from_text(editor_seed),
            grid: DataGridState::default(),
            media: MediaState::default(),
            drag: None,
        }
    }

    pub fn layout_item(&self, panel: PanelId) -> Option<&LayoutItem> {
        self.layout.iter().find(|item| item.id == panel)
    }

    /// Moves a panel so its origin lands on (x, y), clamped inside the
    /// grid. Cosmetic only.
    pub fn move_panel(&mut self, panel: PanelId, x: u16, y: u16) -> bool {
        let rows = layout_rows(&DASHBOARD_LAYOUT);
        let Some(item) = self.layout.iter_mut().find(|item| item.id == panel) else {
            return false;
        };
        let new_x = x.min(GRID_COLS.saturating_sub(item.w));
        let new_y = y.min(rows.saturating_sub(item.h));
        if (new_x, new_y) == (item.x, item.y) {
            return false;
        }
        item.x = new_x;
        item.y = new_y;
        true
    }

    /// Resizes a panel so its bottom-right corner lands on (x, y)
    /// inclusive, clamped to a 2x1 minimum and the grid bounds.
    pub fn resize_panel(&mut self, panel: PanelId, x: u16, y: u16) -> bool {
        let rows = layout_rows(&DASHBOARD_LAYOUT);
        let Some(item) = self.layout.iter_mut().find(|item| item.id == panel) else {
            return false;
        };
        let new_w = (x.saturating_sub(item.x) + 1).clamp(2, GRID_COLS - item.x);
        let new_h = (y.saturating_sub(item.y) + 1).clamp(1, rows - item.y);
        if (new_w, new_h) == (item.w, item.h) {
            return false;
        }
        item.w = new_w;
        item.h = new_h;
        true
    }

    /// Rendering order: the focused panel last, so it draws on top when
    /// dragged over a neighbor.
    pub fn draw_order(&self) -> Vec<LayoutItem> {
        let mut items: Vec<LayoutItem> = self
            .layout
            .iter()
            .copied()
            .filter(|item| item.id != self.focus)
            .collect();
        if let Some(focused) = self.layout_item(self.focus) {
            items.push(*focused);
        }
        items
    }
}
