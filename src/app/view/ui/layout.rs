use ratatui::layout::Rect;

use crate::app::state::{LayoutItem, PanelId, GRID_COLS};

/// Maps grid-unit layout items onto the dashboard content area. Column
/// and row edges are computed from the full area so the cells tile it
/// without gaps; overlapping items are allowed and draw in order.
pub(crate) fn resolve_layout(items: &[LayoutItem], rows: u16, area: Rect) -> Vec<(PanelId, Rect)> {
    items
        .iter()
        .map(|item| {
            let left = column_edge(area, item.x);
            let right = column_edge(area, item.x + item.w);
            let top = row_edge(area, rows, item.y);
            let bottom = row_edge(area, rows, item.y + item.h);
            let rect = Rect {
                x: left,
                y: top,
                width: right.saturating_sub(left),
                height: bottom.saturating_sub(top),
            };
            (item.id, rect)
        })
        .collect()
}

fn column_edge(area: Rect, grid_x: u16) -> u16 {
    let offset = u32::from(grid_x.min(GRID_COLS)) * u32::from(area.width) / u32::from(GRID_COLS);
    area.x + offset as u16
}

fn row_edge(area: Rect, rows: u16, grid_y: u16) -> u16 {
    let offset = u32::from(grid_y.min(rows)) * u32::from(area.height) / u32::from(rows.max(1));
    area.y + offset as u16
}

/// Inverse mapping for mouse gestures: which grid cell a terminal cell
/// falls in. Returns `None` outside the content area.
pub(crate) fn grid_pos_at(area: Rect, rows: u16, column: u16, row: u16) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }
    let grid_x = u32::from(column - area.x) * u32::from(GRID_COLS) / u32::from(area.width);
    let grid_y = u32::from(row - area.y) * u32::from(rows.max(1)) / u32::from(area.height);
    Some((grid_x as u16, grid_y as u16))
}
