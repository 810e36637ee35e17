//! src/panels/dialog.rs
//!
//! Floating entry-dialog window: fixed size, label column on the left,
//! close control in the top border.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::field;
use crate::form::config::FormConfig;
use crate::form::dialog::DialogState;

/// Cells reserved for the label column inside a dialog.
pub const LABEL_COL: u16 = 13;

/// Fixed window rect for a dialog, centered with a cascade step per open
/// window, clipped to the frame.
pub fn window_rect(frame: Rect, config: &FormConfig, cascade: u16) -> Rect {
    let (w, h) = config.dialog_size;
    let (step_x, step_y) = config.dialog_cascade;
    let x = frame.x + frame.width.saturating_sub(w) / 2 + cascade * step_x;
    let y = frame.y + frame.height.saturating_sub(h) / 2 + cascade * step_y;
    Rect::new(x, y, w, h).intersection(frame)
}

/// The `[x]` close control in the window's top border.
pub fn close_rect(window: Rect) -> Rect {
    Rect::new(window.right().saturating_sub(4), window.y, 3, 1).intersection(window)
}

/// Rect of field `idx` within the dialog's inner area; fields stack with
/// their declared row counts.
pub fn field_rect(inner: Rect, dialog: &DialogState, idx: usize) -> Rect {
    let mut y = inner.y;
    for f in &dialog.fields[..idx] {
        y = y.saturating_add(f.rows);
    }
    Rect::new(
        inner.x + LABEL_COL.min(inner.width),
        y,
        inner.width.saturating_sub(LABEL_COL),
        dialog.fields[idx].rows,
    )
    .intersection(inner)
}

/// `active` marks the window that owns the keyboard.
pub struct DialogPanel<'a> {
    pub dialog: &'a DialogState,
    pub active: bool,
}

impl crate::ui::Panel for DialogPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        f.render_widget(Clear, area);

        let mut block = Block::default()
            .title(self.dialog.kind.title())
            .borders(Borders::ALL);
        if self.active {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new("[x]").style(Style::default().add_modifier(Modifier::BOLD)),
            close_rect(area),
        );

        let inner = area.inner(Margin::new(1, 1));
        for (idx, fld) in self.dialog.fields.iter().enumerate() {
            let rect = field_rect(inner, self.dialog, idx);
            if rect.height == 0 {
                continue;
            }
            let label_rect =
                Rect::new(inner.x, rect.y, LABEL_COL.min(inner.width), 1).intersection(inner);
            f.render_widget(Paragraph::new(fld.label), label_rect);

            let focused = self.active && idx == self.dialog.focus;
            if fld.input.multiline() {
                field::multi_line(f, rect, &fld.input, focused);
            } else {
                field::single_line(f, rect, &fld.input, focused);
            }
        }
    }
}
