//! CV form builder for the terminal: four fixed sections, free-form
//! mouse repositioning, floating entry dialogs, and a growing skill list.
//!
//! `form` holds every piece of interactive state and is fully headless;
//! `panels` and `app` put it on screen with ratatui.

pub mod app;
pub mod form;
pub mod logging;
pub mod panels;
pub mod ui;
