//! src/form.rs
//!
//! Headless form state: sections, drag gestures, dialogs, and text entry.

pub mod config;
pub mod dialog;
pub mod input;
pub mod section;
pub mod state;

/// Re-exports
pub use config::FormConfig;
pub use dialog::{DialogId, DialogKind, DialogState};
pub use input::InputState;
pub use section::{
    DragSession, HEADER_FIELDS, Placement, SectionContent, SectionKind, SectionShared,
    SharedSection,
};
pub use state::{ActiveWindow, FormState};
