//! src/form/section.rs
//!
//! Per-section shared state: placement, live drag session, and field
//! contents. The drag math lives here so it can be exercised without a
//! terminal.

use std::sync::{Arc, RwLock};

use ratatui::layout::Rect;

use super::input::InputState;

/// The four fixed sections of the form, in flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Experience,
    Education,
    Skills,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Header,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Header => "Personal Information",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
        }
    }

    /// Label of the section's button, if it has one.
    pub fn button_label(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Experience => Some("Add Experience"),
            SectionKind::Education => Some("Add Education"),
            SectionKind::Skills => Some("Add Skill"),
        }
    }
}

/// Labels of the header entries, in row order.
pub const HEADER_FIELDS: [&str; 3] = ["Full Name:", "Email:", "Phone:"];

/// Where a section sits: stacked by the container, or pinned wherever a
/// drag left it. Coordinates are signed; a pinned section may hang partly
/// or fully off-screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Flow,
    Pinned { x: i32, y: i32 },
}

/// Pointer offset captured at press time, relative to the section's
/// top-left corner. Lives for exactly one press-move-release gesture and
/// is overwritten by the next press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub grab_x: i32,
    pub grab_y: i32,
}

/// Field contents, by section flavor.
#[derive(Debug)]
pub enum SectionContent {
    /// Labeled single-line entries (Full Name, Email, Phone).
    Fields(Vec<InputState>),

    /// A single button that opens an entry dialog.
    AddButton,

    /// The entry feeding the list plus every skill added so far, in
    /// submission order. Entries are never edited or removed.
    SkillList {
        input: InputState,
        entries: Vec<String>,
    },
}

/// Authoritative per-section state shared between the event loop and the
/// panel that renders it.
#[derive(Debug)]
pub struct SectionShared {
    pub kind: SectionKind,
    pub placement: Placement,
    pub drag: Option<DragSession>,
    pub content: SectionContent,

    /// Area the section was last drawn at; written by its panel each frame
    /// and read back for mouse hit-testing.
    pub last_area: Option<Rect>,
}

impl SectionShared {
    pub fn new(kind: SectionKind) -> Self {
        let content = match kind {
            SectionKind::Header => {
                SectionContent::Fields(vec![InputState::single_line(); HEADER_FIELDS.len()])
            }
            SectionKind::Experience | SectionKind::Education => SectionContent::AddButton,
            SectionKind::Skills => SectionContent::SkillList {
                input: InputState::single_line(),
                entries: Vec::new(),
            },
        };
        Self {
            kind,
            placement: Placement::Flow,
            drag: None,
            content,
            last_area: None,
        }
    }

    /// Rows the section wants on screen, borders included. The skills
    /// section grows with its list.
    pub fn height(&self) -> u16 {
        match &self.content {
            SectionContent::Fields(fields) => fields.len() as u16 + 2,
            SectionContent::AddButton => 3,
            SectionContent::SkillList { entries, .. } => 3 + entries.len() as u16,
        }
    }

    /// Record the grab offset for a fresh gesture. The section does not
    /// move until the first movement report.
    pub fn begin_drag(&mut self, grab_x: u16, grab_y: u16) {
        self.drag = Some(DragSession {
            grab_x: grab_x as i32,
            grab_y: grab_y as i32,
        });
    }

    /// Reposition from an absolute pointer sample: new origin = pointer
    /// minus grab offset. No-op without a live gesture.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        if let Some(d) = self.drag {
            self.placement = Placement::Pinned {
                x: x - d.grab_x,
                y: y - d.grab_y,
            };
        }
    }

    /// Drop the gesture. The section stays wherever the last move left it.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// Alias: Arc<RwLock<SectionShared>>
pub type SharedSection = Arc<RwLock<SectionShared>>;
