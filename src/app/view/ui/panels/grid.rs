use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::state::{DataGridState, GRID_COLUMNS, GRID_PAGE_SIZE};
use crate::app::view::theme::ui_colors;

use super::super::text::truncate_to_width;

/// Demonstration data grid: checkbox selection column plus the configured
/// columns, one page at a time, with a paging/selection footer.
pub(in crate::app::view::ui) fn render_data_grid_panel(
    f: &mut Frame,
    area: Rect,
    grid: &DataGridState,
    focused: bool,
) {
    if area.width == 0 || area.height < 2 {
        return;
    }
    let theme = ui_colors();

    let header = Row::new(
        std::iter::once(Cell::from("  "))
            .chain(GRID_COLUMNS.iter().map(|column| Cell::from(column.header))),
    )
    .style(
        Style::default()
            .fg(theme.table_header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let page_start = grid.page * GRID_PAGE_SIZE;
    let rows: Vec<Row> = grid
        .page_rows()
        .iter()
        .enumerate()
        .map(|(page_row, row)| {
            let row_index = page_start + page_row;
            let checkbox = if grid.selected.contains(&row.id) {
                "☑"
            } else {
                "☐"
            };
            let cells = std::iter::once(Cell::from(checkbox)).chain(
                GRID_COLUMNS.iter().enumerate().map(|(col, _)| {
                    let editing = grid
                        .edit
                        .as_ref()
                        .filter(|edit| edit.row == row_index && edit.col == col);
                    let (text, style) = if let Some(edit) = editing {
                        (
                            format!("{}▏", edit.value),
                            Style::default().add_modifier(Modifier::REVERSED),
                        )
                    } else {
                        let cursor_here =
                            focused && page_row == grid.cursor_row && col == grid.cursor_col;
                        let style = if cursor_here {
                            Style::default()
                                .fg(theme.table_cursor_fg)
                                .add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        (row.cell_text(col), style)
                    };
                    Cell::from(Span::styled(text, style))
                }),
            );
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(2))
        .chain(
            GRID_COLUMNS
                .iter()
                .map(|column| Constraint::Length(column.width)),
        )
        .collect();
    let table_area = Rect {
        height: area.height - 1,
        ..area
    };
    f.render_widget(Table::new(rows, widths).header(header), table_area);

    let footer = format!(
        "page {}/{}  selected {}  [ ] page  Space select  Enter edit",
        grid.page + 1,
        grid.page_count(),
        grid.selected.len()
    );
    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_to_width(&footer, area.width as usize),
            Style::default()
                .fg(theme.panel_hint_fg)
                .add_modifier(Modifier::DIM),
        ))),
        footer_area,
    );
}
