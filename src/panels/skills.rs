//! src/panels/skills.rs
//!
//! Skills section: entry plus button on the top row, accumulated skill
//! labels below.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::field;
use crate::form::section::{SectionContent, SharedSection};

/// Width of `[ Add Skill ]`, right-aligned on the entry row.
pub const BUTTON_W: u16 = 13;

pub fn input_rect(inner: Rect) -> Rect {
    Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(BUTTON_W + 1),
        1,
    )
    .intersection(inner)
}

pub fn button_rect(inner: Rect) -> Rect {
    Rect::new(
        inner.x + inner.width.saturating_sub(BUTTON_W),
        inner.y,
        BUTTON_W,
        1,
    )
    .intersection(inner)
}

pub struct SkillsPanel {
    pub shared: SharedSection,
    pub input_focused: bool,
}

impl SkillsPanel {
    pub fn new(shared: SharedSection) -> Self {
        Self {
            shared,
            input_focused: false,
        }
    }
}

impl crate::ui::Panel for SkillsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut s = self.shared.write().unwrap();
        s.last_area = Some(area);

        let block = Block::default()
            .title(s.kind.title())
            .borders(Borders::ALL);
        f.render_widget(block, area);
        let inner = area.inner(Margin::new(1, 1));

        let SectionContent::SkillList { input, entries } = &s.content else {
            return;
        };
        field::single_line(f, input_rect(inner), input, self.input_focused);
        let button = Paragraph::new("[ Add Skill ]")
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(button, button_rect(inner));

        // newest entries stay visible if the section is ever squeezed
        let rows = inner.height.saturating_sub(1) as usize;
        let skip = entries.len().saturating_sub(rows);
        for (row, entry) in entries.iter().skip(skip).enumerate() {
            let line_rect = Rect::new(inner.x, inner.y + 1 + row as u16, inner.width, 1)
                .intersection(inner);
            f.render_widget(Paragraph::new(entry.as_str()), line_rect);
        }
    }
}
