/// Multi-line edit buffer behind the editor panel. This owns the pending
/// (staged, uncommitted) text; the session store only sees it through
/// explicit `stage` calls after each mutation.
#[derive(Default)]
pub struct EditorState {
    pub buffer: Vec<char>,
    pub cursor: usize,
    /// First visible line; the renderer keeps the cursor inside the
    /// viewport by adjusting this.
    pub scroll: usize,
    preferred_column: Option<usize>,
}

impl EditorState {
    pub fn from_text(value: &str) -> Self {
        let mut editor = Self::default();
        editor.set_from(value);
        editor.cursor = 0;
        editor
    }

    pub fn current(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn set_from(&mut self, value: &str) {
        self.buffer = value.chars().collect();
        self.cursor = self.buffer.len();
        self.scroll = 0;
        self.preferred_column = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
        self.preferred_column = None;
    }

    pub fn insert_str(&mut self, value: &str) {
        for ch in value.chars() {
            self.buffer.insert(self.cursor, ch);
            self.cursor += 1;
        }
        self.preferred_column = None;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        self.preferred_column = None;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.buffer.remove(self.cursor);
        self.preferred_column = None;
        true
    }

    pub fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        self.preferred_column = None;
        true
    }

    pub fn kill_to_end(&mut self) -> bool {
        let line_end = self.find_next_newline(self.cursor).unwrap_or(self.buffer.len());
        if line_end == self.cursor {
            return self.delete();
        }
        self.buffer.drain(self.cursor..line_end);
        self.preferred_column = None;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.preferred_column = None;
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
        self.preferred_column = None;
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.find_next_newline(self.cursor).unwrap_or(self.buffer.len());
        self.preferred_column = None;
    }

    pub fn move_up(&mut self) -> bool {
        let cursor = self.cursor.min(self.buffer.len());
        let current_start = self.line_start(cursor);
        if current_start == 0 {
            self.preferred_column = None;
            return false;
        }

        let column = self
            .preferred_column
            .unwrap_or(cursor.saturating_sub(current_start));
        let prev_end = current_start - 1;
        let prev_start = self.line_start(prev_end);
        let prev_len = prev_end.saturating_sub(prev_start);
        self.cursor = prev_start + column.min(prev_len);
        self.preferred_column = Some(column);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let len = self.buffer.len();
        let cursor = self.cursor.min(len);
        let current_start = self.line_start(cursor);
        let Some(current_end) = self.find_next_newline(current_start) else {
            self.preferred_column = None;
            return false;
        };

        let column = self
            .preferred_column
            .unwrap_or(cursor.saturating_sub(current_start));
        let next_start = current_end + 1;
        let next_end = self.find_next_newline(next_start).unwrap_or(len);
        let next_len = next_end.saturating_sub(next_start);
        self.cursor = next_start + column.min(next_len);
        self.preferred_column = Some(column);
        true
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        for ch in &self.buffer {
            if *ch == '\n' {
                lines.push(std::mem::take(&mut line));
            } else {
                line.push(*ch);
            }
        }
        lines.push(line);
        lines
    }

    pub fn cursor_line_col(&self) -> (usize, usize) {
        let cursor = self.cursor.min(self.buffer.len());
        let line = self.buffer[..cursor].iter().filter(|ch| **ch == '\n').count();
        let col = cursor - self.line_start(cursor);
        (line, col)
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos]
            .iter()
            .rposition(|ch| *ch == '\n')
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    fn find_next_newline(&self, start: usize) -> Option<usize> {
        self.buffer[start..]
            .iter()
            .position(|ch| *ch == '\n')
            .map(|offset| start + offset)
    }
}
