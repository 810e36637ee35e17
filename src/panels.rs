//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod dialog;
pub mod field;
pub mod header;
pub mod hint;
pub mod launcher;
pub mod skills;
pub mod title;

pub use dialog::DialogPanel;
pub use header::HeaderPanel;
pub use hint::HintPanel;
pub use launcher::LauncherPanel;
pub use skills::SkillsPanel;
pub use title::TitlePanel;
