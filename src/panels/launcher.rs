//! src/panels/launcher.rs
//!
//! Experience and Education sections: a titled box holding one button that
//! opens the matching entry dialog.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::section::SharedSection;

/// Rect of the `[ label ]` button within the section's inner area.
pub fn button_rect(inner: Rect, label: &str) -> Rect {
    let width = label.chars().count() as u16 + 4;
    Rect::new(inner.x, inner.y, width, 1).intersection(inner)
}

pub struct LauncherPanel {
    pub shared: SharedSection,
}

impl LauncherPanel {
    pub fn new(shared: SharedSection) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for LauncherPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut s = self.shared.write().unwrap();
        s.last_area = Some(area);

        let block = Block::default()
            .title(s.kind.title())
            .borders(Borders::ALL);
        f.render_widget(block, area);
        let inner = area.inner(Margin::new(1, 1));

        let Some(label) = s.kind.button_label() else {
            return;
        };
        let button = Paragraph::new(format!("[ {label} ]"))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(button, button_rect(inner, label));
    }
}
