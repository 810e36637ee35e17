//! src/panels/header.rs
//!
//! Personal-information section: labeled single-line entries.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    widgets::{Block, Borders, Paragraph},
};

use super::field;
use crate::form::section::{HEADER_FIELDS, SectionContent, SharedSection};

/// Cells reserved for the label column; entries start to its right.
pub const LABEL_COL: u16 = 12;

/// Rect of the entry on row `idx`, within the section's inner area.
pub fn field_rect(inner: Rect, idx: usize) -> Rect {
    Rect::new(
        inner.x + LABEL_COL,
        inner.y + idx as u16,
        inner.width.saturating_sub(LABEL_COL),
        1,
    )
    .intersection(inner)
}

/// `focused_field` marks the entry that owns the terminal cursor.
pub struct HeaderPanel {
    pub shared: SharedSection,
    pub focused_field: Option<usize>,
}

impl HeaderPanel {
    pub fn new(shared: SharedSection) -> Self {
        Self {
            shared,
            focused_field: None,
        }
    }
}

impl crate::ui::Panel for HeaderPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut s = self.shared.write().unwrap();
        s.last_area = Some(area);

        let block = Block::default()
            .title(s.kind.title())
            .borders(Borders::ALL);
        f.render_widget(block, area);
        let inner = area.inner(Margin::new(1, 1));

        let SectionContent::Fields(fields) = &s.content else {
            return;
        };
        for (idx, (label, input)) in HEADER_FIELDS.iter().zip(fields).enumerate() {
            if idx as u16 >= inner.height {
                break;
            }
            let label_rect = Rect::new(
                inner.x,
                inner.y + idx as u16,
                LABEL_COL.min(inner.width),
                1,
            );
            f.render_widget(Paragraph::new(*label), label_rect);
            field::single_line(f, field_rect(inner, idx), input, self.focused_field == Some(idx));
        }
    }
}
