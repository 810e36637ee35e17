//! src/panels/hint.rs
//!
//! Key-hint bar rendered under the form.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// One (key, action) pair per hint.
pub struct HintPanel {
    hints: Vec<(String, String)>,
}

impl HintPanel {
    pub fn new(hints: &[(&str, &str)]) -> Self {
        Self {
            hints: hints
                .iter()
                .map(|&(k, a)| (k.to_string(), a.to_string()))
                .collect(),
        }
    }
}

impl crate::ui::Panel for HintPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                key.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                action.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
