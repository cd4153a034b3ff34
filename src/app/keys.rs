//! Keyboard dispatch.
//!
//! Focus order: config panel, then an active text input, then the global
//! and per-view bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::view_state::{CrashField, DateField, View};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if self.config_panel.open {
            self.handle_config_key(key);
            return;
        }
        if self.crashes.editing.is_some() {
            self.handle_crash_input_key(key);
            return;
        }
        if self.visuals.editing.is_some() {
            self.handle_date_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(view) = View::from_index(c as usize - '1' as usize) {
                    self.navigate(view);
                }
            }
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),
            KeyCode::Char('r') => self.refresh_current(),
            KeyCode::Char('u') => self.cycle_user(true),
            KeyCode::Char('U') => self.cycle_user(false),
            KeyCode::Char('c') => self.open_config_panel(),
            KeyCode::Char('e') => self.export_current_list(),
            KeyCode::Char('E') => self.export_summary(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_row(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_row(),
            _ => self.handle_view_key(key),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match (self.router.current(), key.code) {
            (View::Crashes, KeyCode::Char('/')) => {
                self.crashes.editing = Some(CrashField::Query);
            }
            (View::Crashes, KeyCode::Char('a')) => self.apply_crash_filters(),
            (View::Crashes, KeyCode::Char('x')) => self.clear_crash_filters(),
            (View::Visuals, KeyCode::Char('f')) => self.visuals.editing = Some(DateField::From),
            (View::Visuals, KeyCode::Char('t')) => self.visuals.editing = Some(DateField::To),
            (View::Visuals, KeyCode::Char('a')) => self.load_all_charts(),
            (View::Visuals, KeyCode::Char('d')) => self.reset_visuals_range(),
            _ => {}
        }
    }

    fn handle_crash_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.crashes.editing = None,
            KeyCode::Enter => {
                self.crashes.editing = None;
                self.apply_crash_filters();
            }
            KeyCode::Tab => {
                self.crashes.editing = self.crashes.editing.map(|field| field.next());
            }
            KeyCode::Backspace => self.crash_backspace(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.type_crash_char(c);
            }
            _ => {}
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.visuals.editing = None,
            KeyCode::Enter => {
                self.visuals.editing = None;
                self.load_all_charts();
            }
            KeyCode::Tab => {
                self.visuals.editing = self.visuals.editing.map(|field| match field {
                    DateField::From => DateField::To,
                    DateField::To => DateField::From,
                });
            }
            KeyCode::Backspace => {
                self.visuals.backspace();
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.visuals.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_config_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_config_panel(),
            KeyCode::Enter => self.save_config(),
            KeyCode::Tab | KeyCode::BackTab => self.config_panel.toggle_field(),
            KeyCode::Backspace => self.config_panel.backspace(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.config_panel.input_char(c);
            }
            _ => {}
        }
    }

    fn select_next_row(&mut self) {
        match self.router.current() {
            View::Sessions => self.sessions.select_next(),
            View::Logs => self.logs.select_next(),
            View::Crashes => self.crashes.select_next(),
            View::Overview | View::Visuals => {}
        }
    }

    fn select_prev_row(&mut self) {
        match self.router.current() {
            View::Sessions => self.sessions.select_prev(),
            View::Logs => self.logs.select_prev(),
            View::Crashes => self.crashes.select_prev(),
            View::Overview | View::Visuals => {}
        }
    }
}
