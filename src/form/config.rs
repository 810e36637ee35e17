//! src/form/config.rs
//!
//! Layout and sizing parameters for the form window.
//!
//! Centralized so the panels and the hit-testing code agree on geometry.

#[derive(Clone, Debug)]
pub struct FormConfig {
    /// Blank rows between stacked sections in flow layout.
    pub section_spacing: u16,

    /// Width and height, in cells, of the entry dialogs.
    pub dialog_size: (u16, u16),

    /// Per-window offset applied when several dialogs are open at once.
    pub dialog_cascade: (u16, u16),
}

impl FormConfig {
    /// Create a new `FormConfig`.
    pub fn new(section_spacing: u16, dialog_size: (u16, u16)) -> Self {
        Self {
            section_spacing,
            dialog_size,
            ..Self::default()
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            section_spacing: 1,
            dialog_size: (50, 15),
            dialog_cascade: (2, 1),
        }
    }
}
