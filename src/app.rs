//! src/app.rs
//!
//! CV form builder, terminal edition.
//!
//! Builds the four form sections, runs the UI main loop, and routes
//! terminal events into the form state.
//!
//! ## Overview
//! The application:
//! - Stacks the Header, Experience, Education, and Skills sections in a
//!   column filling the window width.
//! - Lets any section be dragged with the mouse; a dragged section leaves
//!   the column and pins wherever the pointer drops it.
//! - Opens floating "Add Experience" / "Add Education" entry windows, any
//!   number of them at once.
//! - Grows the skills list from its entry field, one label per submission.
//!
//! # Controls
//!
//! - **Mouse drag** on a section border or body — move the section.
//! - **Click** — focus an entry, push a button, close a dialog via `[x]`.
//! - **Tab / Shift-Tab** — cycle entries of the active window.
//! - **Enter** — add the typed skill, or a newline in a description field.
//! - **Esc** — close the topmost dialog.
//! - **Ctrl-Q** — quit and restore the terminal.
//!
//! # Implementation Note
//!
//! `App` only translates events and assembles panels; all interactive
//! state lives in `form::FormState`, which has no terminal dependency.

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Constraint, Direction, Margin, Position, Rect};
use ratatui::widgets::Clear;
use ratatui::{DefaultTerminal, Frame};
use tracing::info;

use crate::form::{
    ActiveWindow, DialogId, DialogKind, FormConfig, FormState, Placement, SectionContent,
    SectionKind, SharedSection,
};
use crate::panels::{self, DialogPanel, HeaderPanel, HintPanel, LauncherPanel, SkillsPanel, TitlePanel};
use crate::ui::{Node, Panel, Spacer, group, leaf, spaced};

const HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Enter", "add skill"),
    ("Mouse", "drag sections"),
    ("Esc", "close dialog"),
    ("Ctrl-Q", "quit"),
];

/// What the pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hit {
    Field(SectionKind, usize),
    Button(SectionKind),
    Body(SectionKind),
    DialogField(DialogId, usize),
    DialogClose(DialogId),
    DialogBody(DialogId),
}

pub struct App {
    pub form: FormState,
    last_frame: Rect,
    running: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            form: FormState::new(config),
            last_frame: Rect::ZERO,
            running: true,
        }
    }

    fn section_panel(&self, shared: &SharedSection) -> Box<dyn Panel> {
        let kind = shared.read().unwrap().kind;
        let main_active = self.form.active_window() == ActiveWindow::Main;
        let (focus_kind, focus_field) = self.form.main_focus();
        match kind {
            SectionKind::Header => {
                let mut p = HeaderPanel::new(shared.clone());
                p.focused_field =
                    (main_active && focus_kind == SectionKind::Header).then_some(focus_field);
                Box::new(p)
            }
            SectionKind::Experience | SectionKind::Education => {
                Box::new(LauncherPanel::new(shared.clone()))
            }
            SectionKind::Skills => {
                let mut p = SkillsPanel::new(shared.clone());
                p.input_focused = main_active && focus_kind == SectionKind::Skills;
                Box::new(p)
            }
        }
    }

    /// Assemble one frame: chrome and flow column first, then pinned
    /// sections, then dialogs on top.
    pub fn render(&mut self, f: &mut Frame<'_>) {
        self.last_frame = f.area();

        let mut constraints: Vec<Constraint> = Vec::new();
        let mut children: Vec<Node> = Vec::new();
        for shared in self.form.sections() {
            let (placement, height) = {
                let s = shared.read().unwrap();
                (s.placement, s.height())
            };
            if placement == Placement::Flow {
                constraints.push(Constraint::Length(height));
                children.push(leaf(self.section_panel(shared)));
            }
        }
        constraints.push(Constraint::Min(0));
        children.push(leaf(Box::new(Spacer)));

        let root = group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ],
            vec![
                leaf(Box::new(TitlePanel::new("CV Builder"))),
                spaced(
                    Direction::Vertical,
                    self.form.config.section_spacing,
                    constraints,
                    children,
                ),
                leaf(Box::new(HintPanel::new(HINTS))),
            ],
        );
        root.draw(f, f.area());

        for shared in self.form.sections() {
            let (placement, height) = {
                let s = shared.read().unwrap();
                (s.placement, s.height())
            };
            if let Placement::Pinned { x, y } = placement {
                let rect = pinned_rect(f.area(), x, y, f.area().width, height);
                if rect.width == 0 || rect.height == 0 {
                    // fully off-screen: nothing drawn, nothing to grab
                    shared.write().unwrap().last_area = None;
                    continue;
                }
                f.render_widget(Clear, rect);
                self.section_panel(shared).draw(f, rect);
            }
        }

        let config = self.form.config.clone();
        let active = self.form.active_window();
        for d in &self.form.dialogs {
            let rect = panels::dialog::window_rect(f.area(), &config, d.cascade);
            DialogPanel {
                dialog: d,
                active: active == ActiveWindow::Dialog(d.id),
            }
            .draw(f, rect);
        }
    }

    /// Topmost surface under the pointer: dialogs, then pinned sections,
    /// then the flow column.
    fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let pos = Position::new(x, y);

        for d in self.form.dialogs.iter().rev() {
            let win = panels::dialog::window_rect(self.last_frame, &self.form.config, d.cascade);
            if !win.contains(pos) {
                continue;
            }
            if panels::dialog::close_rect(win).contains(pos) {
                return Some(Hit::DialogClose(d.id));
            }
            let inner = win.inner(Margin::new(1, 1));
            for idx in 0..d.fields.len() {
                if panels::dialog::field_rect(inner, d, idx).contains(pos) {
                    return Some(Hit::DialogField(d.id, idx));
                }
            }
            return Some(Hit::DialogBody(d.id));
        }

        let mut order: Vec<&SharedSection> = Vec::new();
        let pinned = |s: &&SharedSection| {
            matches!(s.read().unwrap().placement, Placement::Pinned { .. })
        };
        order.extend(self.form.sections().iter().filter(pinned).rev());
        order.extend(self.form.sections().iter().filter(|s| !pinned(s)).rev());

        for shared in order {
            let s = shared.read().unwrap();
            let Some(area) = s.last_area else {
                continue;
            };
            if !area.contains(pos) {
                continue;
            }
            let inner = area.inner(Margin::new(1, 1));
            match &s.content {
                SectionContent::Fields(fields) => {
                    for idx in 0..fields.len() {
                        if panels::header::field_rect(inner, idx).contains(pos) {
                            return Some(Hit::Field(s.kind, idx));
                        }
                    }
                }
                SectionContent::AddButton => {
                    let label = s.kind.button_label().unwrap_or_default();
                    if panels::launcher::button_rect(inner, label).contains(pos) {
                        return Some(Hit::Button(s.kind));
                    }
                }
                SectionContent::SkillList { .. } => {
                    if panels::skills::input_rect(inner).contains(pos) {
                        return Some(Hit::Field(s.kind, 0));
                    }
                    if panels::skills::button_rect(inner).contains(pos) {
                        return Some(Hit::Button(s.kind));
                    }
                }
            }
            return Some(Hit::Body(s.kind));
        }
        None
    }

    pub fn handle_mouse(&mut self, ev: MouseEvent) {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_test(ev.column, ev.row) {
                    Some(Hit::Field(kind, idx)) => {
                        self.form.focus_main(kind, idx);
                        self.form.with_focused_input(|i| i.move_end());
                    }
                    Some(Hit::Button(SectionKind::Experience)) => {
                        self.form.activate_main();
                        self.form.open_dialog(DialogKind::Experience);
                    }
                    Some(Hit::Button(SectionKind::Education)) => {
                        self.form.activate_main();
                        self.form.open_dialog(DialogKind::Education);
                    }
                    Some(Hit::Button(SectionKind::Skills)) => {
                        self.form.activate_main();
                        self.form.add_skill();
                    }
                    Some(Hit::Button(_)) => {}
                    Some(Hit::Body(kind)) => {
                        self.form.activate_main();
                        let area = self.form.section(kind).read().unwrap().last_area;
                        if let Some(area) = area {
                            self.form
                                .begin_drag(kind, ev.column - area.x, ev.row - area.y);
                        }
                    }
                    Some(Hit::DialogClose(id)) => {
                        self.form.close_dialog(id);
                    }
                    Some(Hit::DialogField(id, idx)) => {
                        self.form.focus_dialog(id, idx);
                        self.form.with_focused_input(|i| i.move_end());
                    }
                    Some(Hit::DialogBody(id)) => self.form.activate_dialog(id),
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(kind) = self.form.active_drag() {
                    self.form.drag_to(kind, ev.column as i32, ev.row as i32);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.form.end_all_drags(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
                self.running = false;
            }
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.form.close_top_dialog();
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter => {
                self.form.submit();
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Left => self.form.cursor_left(),
            KeyCode::Right => self.form.cursor_right(),
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let frame_time = Duration::from_millis(33);
        while self.running {
            let frame_start = std::time::Instant::now();
            terminal.draw(|f| self.render(f))?;

            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_time {
                thread::sleep(frame_time - elapsed);
            }
        }
        Ok(())
    }
}

/// Visible part of a section pinned at (`x`, `y`); coordinates may be
/// negative or past the frame edge.
fn pinned_rect(frame: Rect, x: i32, y: i32, width: u16, height: u16) -> Rect {
    let right = frame.x as i32 + frame.width as i32;
    let bottom = frame.y as i32 + frame.height as i32;
    if x >= right || y >= bottom {
        return Rect::ZERO;
    }
    let clipped_x = x.max(frame.x as i32);
    let clipped_y = y.max(frame.y as i32);
    let w = (width as i32 - (clipped_x - x)).max(0) as u16;
    let h = (height as i32 - (clipped_y - y)).max(0) as u16;
    Rect::new(clipped_x as u16, clipped_y as u16, w, h).intersection(frame)
}

pub fn run() -> Result<()> {
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }
    info!("form window ready");

    let mut app = App::new();
    let result = app.main_loop(&mut terminal);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    info!("form window closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_rect_clips_negative_origins() {
        let frame = Rect::new(0, 0, 80, 40);
        assert_eq!(
            pinned_rect(frame, -5, -2, 20, 10),
            Rect::new(0, 0, 15, 8)
        );
    }

    #[test]
    fn pinned_rect_clips_past_the_edge() {
        let frame = Rect::new(0, 0, 80, 40);
        assert_eq!(
            pinned_rect(frame, 70, 38, 20, 10),
            Rect::new(70, 38, 10, 2)
        );
    }

    #[test]
    fn pinned_rect_vanishes_fully_off_screen() {
        let frame = Rect::new(0, 0, 80, 40);
        assert_eq!(pinned_rect(frame, 100, 5, 20, 10).width, 0);
        assert_eq!(pinned_rect(frame, -30, 5, 20, 10).width, 0);
    }
}
