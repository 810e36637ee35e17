//! src/form/dialog.rs
//!
//! Secondary entry-collection windows. These are capture-only: field
//! values are never read back when a window closes.

use super::input::InputState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Experience,
    Education,
}

impl DialogKind {
    pub fn title(self) -> &'static str {
        match self {
            DialogKind::Experience => "Add Experience",
            DialogKind::Education => "Add Education",
        }
    }

    /// Label and visible row count for each field, in display order.
    pub fn field_specs(self) -> &'static [(&'static str, u16)] {
        match self {
            DialogKind::Experience => &[
                ("Company:", 1),
                ("Position:", 1),
                ("Duration:", 1),
                ("Description:", 4),
            ],
            DialogKind::Education => &[("Institution:", 1), ("Degree:", 1), ("Year:", 1)],
        }
    }
}

/// Stable handle for one open window; indices shift as windows close, ids
/// do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialogId(pub u32);

#[derive(Debug)]
pub struct DialogField {
    pub label: &'static str,
    pub rows: u16,
    pub input: InputState,
}

#[derive(Debug)]
pub struct DialogState {
    pub id: DialogId,
    pub kind: DialogKind,
    pub fields: Vec<DialogField>,
    pub focus: usize,

    /// Stacking step applied so simultaneous windows don't fully overlap.
    pub cascade: u16,
}

impl DialogState {
    pub fn new(id: DialogId, kind: DialogKind, cascade: u16) -> Self {
        let fields = kind
            .field_specs()
            .iter()
            .map(|&(label, rows)| DialogField {
                label,
                rows,
                input: if rows > 1 {
                    InputState::multi_line()
                } else {
                    InputState::single_line()
                },
            })
            .collect();
        Self {
            id,
            kind,
            fields,
            focus: 0,
            cascade,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        &mut self.fields[self.focus].input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_fields_match_the_entry_form() {
        let d = DialogState::new(DialogId(1), DialogKind::Experience, 0);
        let labels: Vec<_> = d.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Company:", "Position:", "Duration:", "Description:"]);
        assert!(d.fields[3].input.multiline());
        assert_eq!(d.fields[3].rows, 4);
    }

    #[test]
    fn education_fields_are_all_single_line() {
        let d = DialogState::new(DialogId(2), DialogKind::Education, 0);
        assert_eq!(d.fields.len(), 3);
        assert!(d.fields.iter().all(|f| !f.input.multiline()));
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut d = DialogState::new(DialogId(3), DialogKind::Education, 0);
        d.focus_prev();
        assert_eq!(d.focus, 2);
        d.focus_next();
        assert_eq!(d.focus, 0);
    }
}
