//! Main application logic and key routing

use crate::config::TuiConfig;
use crate::state::{EmployeeForm, EntranceState, Level, Notifications};
use crate::tooltips;
use crate::validation;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application: owns all state and routes events
pub struct App {
    pub form: EmployeeForm,
    pub entrance: EntranceState,
    pub notifications: Notifications,
    pub config: TuiConfig,
    should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, now: Instant) -> Self {
        let form = EmployeeForm::new();
        // Buttons row animates in as the last row
        let row_count = form.field_count();
        let entrance = if config.skip_entrance_animation() {
            EntranceState::completed(row_count, now)
        } else {
            EntranceState::new(row_count, now)
        };
        Self {
            form,
            entrance,
            notifications: Notifications::new(),
            config,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fast ticks are needed while anything is animating or expiring
    pub fn needs_fast_poll(&self, now: Instant) -> bool {
        !self.entrance.is_complete(now) || !self.notifications.is_empty()
    }

    /// Per-tick housekeeping (toast expiry)
    pub fn tick(&mut self, now: Instant) {
        self.notifications.update(now);
    }

    /// Help text for the focused field, if configured and available
    pub fn focused_help(&self) -> Option<&'static str> {
        if !self.config.show_field_help() {
            return None;
        }
        self.form
            .active_field()
            .and_then(|f| tooltips::for_field(&f.name))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Any key fast-forwards the entrance animation
        if !self.entrance.is_complete(now) {
            self.entrance.skip();
            return;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit(now);
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left if self.form.is_buttons_row_active() => self.form.prev_button(),
            KeyCode::Right if self.form.is_buttons_row_active() => self.form.next_button(),
            KeyCode::Enter => {
                if self.form.is_buttons_row_active() {
                    match self.form.selected_button {
                        0 => self.cancel(now),
                        _ => self.submit(now),
                    }
                } else if self
                    .form
                    .active_field()
                    .is_some_and(|f| f.is_multiline)
                {
                    self.input_char('\n');
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.active_field_mut() {
                    field.pop_char();
                }
                self.revalidate_active();
            }
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_field_mut() {
            field.push_char(c);
        }
        self.revalidate_active();
    }

    fn revalidate_active(&mut self) {
        let today = Local::now().date_naive();
        self.form.validate_active_field(today);
    }

    /// Validate the whole form; save is cancelled when anything fails
    pub fn submit(&mut self, now: Instant) {
        let today = Local::now().date_naive();
        if self.form.validate(today) {
            tracing::info!("employee record accepted");
            self.notifications
                .show("Empleado guardado correctamente", Level::Success, now);
            self.form.reset();
        } else {
            tracing::debug!("employee record rejected by validation");
            self.notifications
                .show(validation::FIX_ERRORS_MESSAGE, Level::Error, now);
        }
    }

    fn cancel(&mut self, now: Instant) {
        self.form.reset();
        self.notifications
            .show("Formulario restablecido", Level::Info, now);
    }
}
