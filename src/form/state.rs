//! src/form/state.rs
//!
//! The section manager: owns the four sections, the open dialog stack, and
//! keyboard focus. Every interactive behavior funnels through here so the
//! whole surface can be driven without a terminal attached.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::config::FormConfig;
use super::dialog::{DialogId, DialogKind, DialogState};
use super::input::InputState;
use super::section::{SectionContent, SectionKind, SectionShared, SharedSection};

/// Which window receives keystrokes. The last-opened dialog takes focus,
/// like a freshly raised secondary window; clicking the main window takes
/// it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveWindow {
    Main,
    Dialog(DialogId),
}

/// Tab order of the main window's entries.
const MAIN_FOCUS_ORDER: [(SectionKind, usize); 4] = [
    (SectionKind::Header, 0),
    (SectionKind::Header, 1),
    (SectionKind::Header, 2),
    (SectionKind::Skills, 0),
];

pub struct FormState {
    /// One entry per `SectionKind::ALL`, same order.
    sections: Vec<SharedSection>,

    /// Open dialogs in opening order; the last one draws on top.
    pub dialogs: Vec<DialogState>,

    pub config: FormConfig,

    active: ActiveWindow,
    main_focus: (SectionKind, usize),
    next_dialog: u32,
    opened: u16,
}

impl FormState {
    pub fn new(config: FormConfig) -> Self {
        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| Arc::new(RwLock::new(SectionShared::new(kind))))
            .collect();
        Self {
            sections,
            dialogs: Vec::new(),
            config,
            active: ActiveWindow::Main,
            main_focus: MAIN_FOCUS_ORDER[0],
            next_dialog: 0,
            opened: 0,
        }
    }

    pub fn sections(&self) -> &[SharedSection] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> &SharedSection {
        &self.sections[kind as usize]
    }

    // --- drag gestures -----------------------------------------------------

    pub fn begin_drag(&mut self, kind: SectionKind, grab_x: u16, grab_y: u16) {
        self.section(kind).write().unwrap().begin_drag(grab_x, grab_y);
        debug!(?kind, grab_x, grab_y, "drag started");
    }

    pub fn drag_to(&mut self, kind: SectionKind, x: i32, y: i32) {
        self.section(kind).write().unwrap().drag_to(x, y);
    }

    pub fn end_drag(&mut self, kind: SectionKind) {
        self.section(kind).write().unwrap().end_drag();
        debug!(?kind, "drag ended");
    }

    /// Release lands wherever the pointer is; drop every live gesture.
    pub fn end_all_drags(&mut self) {
        for shared in &self.sections {
            let mut s = shared.write().unwrap();
            if s.dragging() {
                debug!(kind = ?s.kind, "drag ended");
                s.end_drag();
            }
        }
    }

    /// The section currently mid-gesture, if any.
    pub fn active_drag(&self) -> Option<SectionKind> {
        self.sections.iter().find_map(|shared| {
            let s = shared.read().unwrap();
            s.dragging().then_some(s.kind)
        })
    }

    // --- skills ------------------------------------------------------------

    /// Append the skills entry to the list. Empty input is a silent no-op;
    /// anything else (all-whitespace included) is appended verbatim and
    /// the entry cleared.
    pub fn add_skill(&mut self) -> bool {
        let mut s = self.sections[SectionKind::Skills as usize].write().unwrap();
        let SectionContent::SkillList { input, entries } = &mut s.content else {
            return false;
        };
        if input.is_empty() {
            return false;
        }
        let skill = input.take();
        debug!(skill = %skill, "skill added");
        entries.push(skill);
        true
    }

    // --- dialogs -----------------------------------------------------------

    pub fn open_dialog(&mut self, kind: DialogKind) -> DialogId {
        let id = DialogId(self.next_dialog);
        self.next_dialog += 1;
        let cascade = self.opened % 6;
        self.opened += 1;
        self.dialogs.push(DialogState::new(id, kind, cascade));
        self.active = ActiveWindow::Dialog(id);
        debug!(?kind, ?id, "dialog opened");
        id
    }

    /// Dismiss a window. Its field values are dropped, not read back.
    pub fn close_dialog(&mut self, id: DialogId) -> bool {
        let before = self.dialogs.len();
        self.dialogs.retain(|d| d.id != id);
        if self.dialogs.len() == before {
            return false;
        }
        if self.active == ActiveWindow::Dialog(id) {
            self.active = self
                .dialogs
                .last()
                .map(|d| ActiveWindow::Dialog(d.id))
                .unwrap_or(ActiveWindow::Main);
        }
        debug!(?id, "dialog closed");
        true
    }

    pub fn close_top_dialog(&mut self) -> bool {
        match self.dialogs.last() {
            Some(d) => {
                let id = d.id;
                self.close_dialog(id)
            }
            None => false,
        }
    }

    pub fn dialog(&self, id: DialogId) -> Option<&DialogState> {
        self.dialogs.iter().find(|d| d.id == id)
    }

    pub fn dialog_mut(&mut self, id: DialogId) -> Option<&mut DialogState> {
        self.dialogs.iter_mut().find(|d| d.id == id)
    }

    // --- focus and text entry ----------------------------------------------

    pub fn active_window(&self) -> ActiveWindow {
        self.active
    }

    pub fn main_focus(&self) -> (SectionKind, usize) {
        self.main_focus
    }

    /// Focus an entry in the main window (also reclaims keyboard focus
    /// from any dialog). Non-entry targets are ignored.
    pub fn focus_main(&mut self, kind: SectionKind, field: usize) {
        if MAIN_FOCUS_ORDER.contains(&(kind, field)) {
            self.main_focus = (kind, field);
            self.active = ActiveWindow::Main;
        }
    }

    /// Clicking anywhere in the main window hands the keyboard back to it.
    pub fn activate_main(&mut self) {
        self.active = ActiveWindow::Main;
    }

    pub fn activate_dialog(&mut self, id: DialogId) {
        if self.dialogs.iter().any(|d| d.id == id) {
            self.active = ActiveWindow::Dialog(id);
        }
    }

    pub fn focus_dialog(&mut self, id: DialogId, field: usize) {
        if let Some(d) = self.dialog_mut(id) {
            if field < d.fields.len() {
                d.focus = field;
            }
            self.active = ActiveWindow::Dialog(id);
        }
    }

    pub fn focus_next(&mut self) {
        match self.active {
            ActiveWindow::Main => self.cycle_main(1),
            ActiveWindow::Dialog(id) => {
                if let Some(d) = self.dialog_mut(id) {
                    d.focus_next();
                }
            }
        }
    }

    pub fn focus_prev(&mut self) {
        match self.active {
            ActiveWindow::Main => self.cycle_main(MAIN_FOCUS_ORDER.len() - 1),
            ActiveWindow::Dialog(id) => {
                if let Some(d) = self.dialog_mut(id) {
                    d.focus_prev();
                }
            }
        }
    }

    fn cycle_main(&mut self, step: usize) {
        let at = MAIN_FOCUS_ORDER
            .iter()
            .position(|&f| f == self.main_focus)
            .unwrap_or(0);
        self.main_focus = MAIN_FOCUS_ORDER[(at + step) % MAIN_FOCUS_ORDER.len()];
    }

    /// Run `f` against whichever entry currently has keyboard focus.
    pub fn with_focused_input<R>(&mut self, f: impl FnOnce(&mut InputState) -> R) -> Option<R> {
        match self.active {
            ActiveWindow::Dialog(id) => {
                let d = self.dialogs.iter_mut().find(|d| d.id == id)?;
                Some(f(d.focused_input_mut()))
            }
            ActiveWindow::Main => {
                let (kind, field) = self.main_focus;
                let mut s = self.sections[kind as usize].write().unwrap();
                match &mut s.content {
                    SectionContent::Fields(fields) => fields.get_mut(field).map(f),
                    SectionContent::SkillList { input, .. } => Some(f(input)),
                    SectionContent::AddButton => None,
                }
            }
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.with_focused_input(|i| i.insert(ch));
    }

    pub fn backspace(&mut self) {
        self.with_focused_input(|i| i.backspace());
    }

    pub fn cursor_left(&mut self) {
        self.with_focused_input(|i| i.move_left());
    }

    pub fn cursor_right(&mut self) {
        self.with_focused_input(|i| i.move_right());
    }

    /// Enter: submits the skills entry, or inserts a newline into a
    /// multi-line dialog field. Anywhere else it does nothing.
    pub fn submit(&mut self) -> bool {
        match self.active {
            ActiveWindow::Main => {
                if self.main_focus == (SectionKind::Skills, 0) {
                    self.add_skill()
                } else {
                    false
                }
            }
            ActiveWindow::Dialog(id) => {
                if let Some(d) = self.dialog_mut(id) {
                    let input = d.focused_input_mut();
                    if input.multiline() {
                        input.insert('\n');
                    }
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::section::Placement;

    fn skills_entries(form: &FormState) -> Vec<String> {
        let s = form.section(SectionKind::Skills).read().unwrap();
        match &s.content {
            SectionContent::SkillList { entries, .. } => entries.clone(),
            _ => unreachable!(),
        }
    }

    fn type_skill(form: &mut FormState, text: &str) {
        form.focus_main(SectionKind::Skills, 0);
        for ch in text.chars() {
            form.insert_char(ch);
        }
    }

    #[test]
    fn empty_input_adds_nothing_and_keeps_the_entry() {
        let mut form = FormState::new(FormConfig::default());
        assert!(!form.add_skill());
        assert!(skills_entries(&form).is_empty());
    }

    #[test]
    fn skills_accumulate_verbatim_in_order() {
        let mut form = FormState::new(FormConfig::default());
        for skill in ["Rust", "  spaced  ", "SQL"] {
            type_skill(&mut form, skill);
            assert!(form.add_skill());
        }
        assert_eq!(skills_entries(&form), ["Rust", "  spaced  ", "SQL"]);
    }

    #[test]
    fn whitespace_only_counts_as_non_empty() {
        let mut form = FormState::new(FormConfig::default());
        type_skill(&mut form, "   ");
        assert!(form.add_skill());
        assert_eq!(skills_entries(&form), ["   "]);
    }

    #[test]
    fn add_skill_clears_the_entry() {
        let mut form = FormState::new(FormConfig::default());
        type_skill(&mut form, "Rust");
        form.add_skill();
        let cleared = form.with_focused_input(|i| i.value().to_string()).unwrap();
        assert_eq!(cleared, "");
    }

    #[test]
    fn enter_on_the_skills_entry_submits() {
        let mut form = FormState::new(FormConfig::default());
        type_skill(&mut form, "Go");
        assert!(form.submit());
        assert_eq!(skills_entries(&form), ["Go"]);
    }

    #[test]
    fn duplicate_skills_are_kept() {
        let mut form = FormState::new(FormConfig::default());
        for _ in 0..2 {
            type_skill(&mut form, "Rust");
            form.add_skill();
        }
        assert_eq!(skills_entries(&form), ["Rust", "Rust"]);
    }

    #[test]
    fn drag_state_is_per_section() {
        let mut form = FormState::new(FormConfig::default());
        form.begin_drag(SectionKind::Header, 2, 1);
        form.drag_to(SectionKind::Header, 30, 20);

        let education = form.section(SectionKind::Education).read().unwrap();
        assert_eq!(education.placement, Placement::Flow);
        assert!(education.drag.is_none());
        drop(education);

        assert_eq!(form.active_drag(), Some(SectionKind::Header));
        form.end_all_drags();
        assert_eq!(form.active_drag(), None);
    }

    #[test]
    fn dialogs_stack_and_close_independently() {
        let mut form = FormState::new(FormConfig::default());
        let first = form.open_dialog(DialogKind::Experience);
        let second = form.open_dialog(DialogKind::Experience);
        assert_eq!(form.dialogs.len(), 2);
        assert_eq!(form.active_window(), ActiveWindow::Dialog(second));

        // typing goes to the topmost window only
        form.insert_char('x');
        assert_eq!(form.dialog(second).unwrap().fields[0].input.value(), "x");
        assert_eq!(form.dialog(first).unwrap().fields[0].input.value(), "");

        assert!(form.close_dialog(second));
        assert_eq!(form.active_window(), ActiveWindow::Dialog(first));
        assert!(form.close_top_dialog());
        assert_eq!(form.active_window(), ActiveWindow::Main);
    }

    #[test]
    fn dialogs_never_touch_the_sections() {
        let mut form = FormState::new(FormConfig::default());
        form.focus_main(SectionKind::Header, 0);
        form.insert_char('A');
        type_skill(&mut form, "Rust");
        form.add_skill();

        let id = form.open_dialog(DialogKind::Education);
        for ch in "MIT".chars() {
            form.insert_char(ch);
        }
        form.close_dialog(id);

        let header = form.section(SectionKind::Header).read().unwrap();
        let SectionContent::Fields(fields) = &header.content else {
            unreachable!()
        };
        assert_eq!(fields[0].value(), "A");
        drop(header);
        assert_eq!(skills_entries(&form), ["Rust"]);
    }

    #[test]
    fn tab_cycles_name_email_phone_skills() {
        let mut form = FormState::new(FormConfig::default());
        assert_eq!(form.main_focus(), (SectionKind::Header, 0));
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.main_focus(), (SectionKind::Skills, 0));
        form.focus_next();
        assert_eq!(form.main_focus(), (SectionKind::Header, 0));
        form.focus_prev();
        assert_eq!(form.main_focus(), (SectionKind::Skills, 0));
    }

    #[test]
    fn enter_adds_a_newline_only_in_multiline_fields() {
        let mut form = FormState::new(FormConfig::default());
        let id = form.open_dialog(DialogKind::Experience);
        form.focus_dialog(id, 3);
        form.insert_char('a');
        form.submit();
        form.insert_char('b');
        assert_eq!(form.dialog(id).unwrap().fields[3].input.value(), "a\nb");

        form.focus_dialog(id, 0);
        form.insert_char('c');
        form.submit();
        assert_eq!(form.dialog(id).unwrap().fields[0].input.value(), "c");
    }
}
