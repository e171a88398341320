use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

/// Column configuration in the shape the grid collaborator consumes:
/// field key, header label, width, editability, type.
pub struct GridColumn {
    pub field: &'static str,
    pub header: &'static str,
    pub width: u16,
    pub editable: bool,
    pub kind: ColumnKind,
}

pub const GRID_COLUMNS: [GridColumn; 4] = [
    GridColumn {
        field: "id",
        header: "ID",
        width: 6,
        editable: false,
        kind: ColumnKind::Number,
    },
    GridColumn {
        field: "firstName",
        header: "First name",
        width: 14,
        editable: true,
        kind: ColumnKind::Text,
    },
    GridColumn {
        field: "lastName",
        header: "Last name",
        width: 14,
        editable: true,
        kind: ColumnKind::Text,
    },
    GridColumn {
        field: "age",
        header: "Age",
        width: 7,
        editable: true,
        kind: ColumnKind::Number,
    },
];

pub const GRID_PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u16>,
}

impl GridRow {
    fn new(id: u64, first_name: Option<&str>, last_name: Option<&str>, age: Option<u16>) -> Self {
        Self {
            id,
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            age,
        }
    }

    pub fn cell_text(&self, column: usize) -> String {
        match column {
            0 => self.id.to_string(),
            1 => self.first_name.clone().unwrap_or_default(),
            2 => self.last_name.clone().unwrap_or_default(),
            3 => self.age.map(|age| age.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

fn demo_rows() -> Vec<GridRow> {
    vec![
        GridRow::new(1, Some("Jon"), Some("Snow"), Some(35)),
        GridRow::new(2, Some("Cersei"), Some("Lannister"), Some(42)),
        GridRow::new(3, Some("Jaime"), Some("Lannister"), Some(45)),
        GridRow::new(4, Some("Arya"), Some("Stark"), Some(16)),
        GridRow::new(5, Some("Daenerys"), Some("Targaryen"), None),
        GridRow::new(6, None, Some("Melisandre"), Some(150)),
        GridRow::new(7, Some("Ferrara"), Some("Clifford"), Some(44)),
        GridRow::new(8, Some("Rossini"), Some("Frances"), Some(36)),
        GridRow::new(9, Some("Harvey"), Some("Roxie"), Some(65)),
    ]
}

/// Demonstration table: fixed sample rows, checkbox selection, one page
/// of five rows at a time. Cell edits stay local to this state and are
/// never wired back into the session store.
pub struct DataGridState {
    pub rows: Vec<GridRow>,
    pub selected: BTreeSet<u64>,
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub page: usize,
    pub edit: Option<CellEdit>,
}

pub struct CellEdit {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

impl Default for DataGridState {
    fn default() -> Self {
        Self {
            rows: demo_rows(),
            selected: BTreeSet::new(),
            cursor_row: 0,
            cursor_col: 0,
            page: 0,
            edit: None,
        }
    }
}

impl DataGridState {
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(GRID_PAGE_SIZE).max(1)
    }

    pub fn page_rows(&self) -> &[GridRow] {
        let start = self.page * GRID_PAGE_SIZE;
        let end = (start + GRID_PAGE_SIZE).min(self.rows.len());
        &self.rows[start.min(self.rows.len())..end]
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 >= self.page_count() {
            return false;
        }
        self.page += 1;
        self.clamp_cursor();
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.clamp_cursor();
        true
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let rows = self.page_rows().len();
        if rows == 0 {
            return;
        }
        let row = self.cursor_row as isize + d_row;
        let col = self.cursor_col as isize + d_col;
        self.cursor_row = row.clamp(0, rows as isize - 1) as usize;
        self.cursor_col = col.clamp(0, GRID_COLUMNS.len() as isize - 1) as usize;
    }

    fn clamp_cursor(&mut self) {
        let rows = self.page_rows().len();
        if rows == 0 {
            self.cursor_row = 0;
        } else if self.cursor_row >= rows {
            self.cursor_row = rows - 1;
        }
    }

    fn cursor_row_index(&self) -> Option<usize> {
        let index = self.page * GRID_PAGE_SIZE + self.cursor_row;
        (index < self.rows.len()).then_some(index)
    }

    pub fn toggle_selected(&mut self) -> bool {
        let Some(index) = self.cursor_row_index() else {
            return false;
        };
        let id = self.rows[index].id;
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Enters edit mode on the cursor cell. Only columns configured as
    /// editable accept edits.
    pub fn begin_edit(&mut self) -> bool {
        let Some(index) = self.cursor_row_index() else {
            return false;
        };
        if !GRID_COLUMNS[self.cursor_col].editable {
            return false;
        }
        self.edit = Some(CellEdit {
            row: index,
            col: self.cursor_col,
            value: self.rows[index].cell_text(self.cursor_col),
        });
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    /// Applies the pending cell edit to the local row copy. Numeric
    /// columns keep their previous value when the input does not parse;
    /// an emptied cell becomes null.
    pub fn apply_edit(&mut self) -> bool {
        let Some(edit) = self.edit.take() else {
            return false;
        };
        let row = &mut self.rows[edit.row];
        let trimmed = edit.value.trim();
        match GRID_COLUMNS[edit.col].kind {
            ColumnKind::Text => {
                let value = (!trimmed.is_empty()).then(|| trimmed.to_string());
                match edit.col {
                    1 => row.first_name = value,
                    2 => row.last_name = value,
                    _ => {}
                }
            }
            ColumnKind::Number => {
                if trimmed.is_empty() {
                    row.age = None;
                } else if let Ok(age) = trimmed.parse::<u16>() {
                    row.age = Some(age);
                }
            }
        }
        true
    }
}
