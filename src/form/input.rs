//! src/form/input.rs
//!
//! Editable text state for entry fields: value, char cursor, and the
//! display-width windowing used when a value outgrows its field.

use unicode_width::UnicodeWidthChar;

/// One editable entry. Single-line entries reject newlines; multi-line
/// entries accept them (used by the dialog description field).
#[derive(Clone, Debug, Default)]
pub struct InputState {
    value: String,
    /// Cursor as a char index into `value`, 0..=char_count.
    cursor: usize,
    multiline: bool,
}

impl InputState {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, ch: char) {
        if ch == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_at(self.cursor - 1);
        let end = self.byte_at(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Clear the entry and return the old value verbatim.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Cursor position as (line, char column within that line). Lines are
    /// split on `\n`; single-line values always report line 0.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.value.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// Window `line` into a field `width` cells wide so the cursor stays
/// visible. Returns the visible slice and the cursor's display column
/// within it.
pub fn window_line(line: &str, cursor_col: usize, width: u16) -> (String, u16) {
    let width = width as usize;
    if width == 0 {
        return (String::new(), 0);
    }
    let cols: Vec<usize> = line.chars().map(|c| c.width().unwrap_or(0)).collect();
    let cursor_disp: usize = cols.iter().take(cursor_col).sum();
    let start = cursor_disp.saturating_sub(width - 1);

    let mut out = String::new();
    let mut disp = 0usize;
    for (ch, w) in line.chars().zip(cols.iter().copied()) {
        if disp < start {
            disp += w;
            continue;
        }
        if disp + w > start + width {
            break;
        }
        out.push(ch);
        disp += w;
    }
    (out, (cursor_disp - start) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = InputState::single_line();
        for ch in "rust".chars() {
            input.insert(ch);
        }
        input.move_left();
        input.move_left();
        input.insert('e');
        assert_eq!(input.value(), "ruest");

        input.backspace();
        assert_eq!(input.value(), "rust");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn single_line_rejects_newline() {
        let mut input = InputState::single_line();
        input.insert('a');
        input.insert('\n');
        input.insert('b');
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn multiline_tracks_line_and_column() {
        let mut input = InputState::multi_line();
        for ch in "ab\ncd".chars() {
            input.insert(ch);
        }
        assert_eq!(input.cursor_line_col(), (1, 2));
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_line_col(), (0, 2));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut input = InputState::multi_line();
        for ch in "ab\nc".chars() {
            input.insert(ch);
        }
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn take_clears_and_returns_verbatim() {
        let mut input = InputState::single_line();
        for ch in "  spaced  ".chars() {
            input.insert(ch);
        }
        assert_eq!(input.take(), "  spaced  ");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn multibyte_edits_stay_on_char_boundaries() {
        let mut input = InputState::single_line();
        for ch in "héllo".chars() {
            input.insert(ch);
        }
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn window_line_scrolls_to_keep_cursor_visible() {
        let (shown, col) = window_line("abcdef", 2, 4);
        assert_eq!(shown, "abcd");
        assert_eq!(col, 2);

        let (shown, col) = window_line("abcdef", 6, 4);
        assert_eq!(shown, "def");
        assert_eq!(col, 3);
    }

    #[test]
    fn window_line_handles_wide_chars() {
        // each CJK char is 2 cells wide
        let (shown, col) = window_line("日本語", 3, 4);
        assert_eq!(shown, "語");
        assert_eq!(col, 3);
    }
}
