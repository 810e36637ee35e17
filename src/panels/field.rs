//! src/panels/field.rs
//!
//! Shared rendering for single- and multi-line entry fields.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::form::input::{InputState, window_line};

fn field_style() -> Style {
    Style::default().bg(Color::DarkGray)
}

/// Render a one-row entry; the focused entry also places the terminal
/// cursor.
pub fn single_line(f: &mut Frame<'_>, area: Rect, input: &InputState, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (text, cursor_x) = window_line(input.value(), input.cursor(), area.width);
    f.render_widget(Paragraph::new(text).style(field_style()), area);
    if focused {
        f.set_cursor_position(Position::new(area.x + cursor_x, area.y));
    }
}

/// Render a multi-row entry, scrolled so the cursor's line stays visible.
pub fn multi_line(f: &mut Frame<'_>, area: Rect, input: &InputState, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (cursor_line, cursor_col) = input.cursor_line_col();
    let rows = area.height as usize;
    let skip = (cursor_line + 1).saturating_sub(rows);

    let mut cursor = None;
    let mut shown: Vec<Line> = Vec::new();
    for (row, line) in input.value().split('\n').skip(skip).take(rows).enumerate() {
        let line_idx = row + skip;
        let col = if line_idx == cursor_line { cursor_col } else { 0 };
        let (text, cursor_x) = window_line(line, col, area.width);
        if line_idx == cursor_line {
            cursor = Some(Position::new(area.x + cursor_x, area.y + row as u16));
        }
        shown.push(Line::from(text));
    }
    f.render_widget(Paragraph::new(shown).style(field_style()), area);
    if focused {
        if let Some(pos) = cursor {
            f.set_cursor_position(pos);
        }
    }
}
