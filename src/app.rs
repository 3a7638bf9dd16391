//! Application state and core logic

use crate::config::SignupConfig;
use crate::countries;
use crate::state::{AppState, FieldId, View};
use crate::submit::{LogSink, OutputRecord, SubmitSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Consumer of validated submissions
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with the default log sink
    pub fn new(config: &SignupConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    /// Create a new App with a custom sink
    pub fn with_sink(config: &SignupConfig, sink: Box<dyn SubmitSink>) -> Self {
        let mut state = AppState::new();

        // Preselect the configured country when it names a known code
        if let Some(code) = config.default_country.as_deref() {
            if countries::by_code(code).is_some() {
                state.set_field(FieldId::Country, code.to_ascii_uppercase());
            }
        }
        if !config.mask_passwords() {
            state.form.unmask_passwords();
        }

        Self {
            state,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Dispatch a key event to the active view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::CountryPicker => {
                self.handle_picker_key(key);
                Ok(())
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
            }
            KeyCode::Enter => {
                if self.state.form.is_button_row_active() {
                    self.submit()?;
                } else if self.state.form.active_field_id() == Some(FieldId::Country) {
                    self.open_country_picker();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => match self.state.form.active_field_id() {
                Some(FieldId::Country) => {
                    self.state.set_field(FieldId::Country, "");
                }
                Some(_) => {
                    if let Some(field) = self.state.form.active_field_mut() {
                        field.pop_char();
                    }
                    self.state.revalidate();
                }
                None => {}
            },
            KeyCode::Char(c) => {
                if self.state.form.active_field_id() == Some(FieldId::Country) {
                    // The country row is picker-only; typing starts a search
                    self.open_country_picker();
                    self.state.picker.push_char(c);
                } else if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                    self.state.revalidate();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.close_country_picker();
            }
            KeyCode::Enter => {
                if let Some(country) = self.state.picker.selected_country() {
                    self.state.set_field(FieldId::Country, country.code);
                }
                self.close_country_picker();
            }
            KeyCode::Down => self.state.picker.move_down(),
            KeyCode::Up => self.state.picker.move_up(),
            KeyCode::Backspace => self.state.picker.pop_char(),
            KeyCode::Char(c) => self.state.picker.push_char(c),
            _ => {}
        }
    }

    /// Run full validation; emit to the sink only when the form is clean.
    fn submit(&mut self) -> Result<()> {
        self.state.revalidate();
        if !self.state.errors.is_empty() {
            // Abort and surface every outstanding error
            self.state.form.touch_all();
            self.state.status_message =
                Some("Fix the highlighted fields before registering".to_string());
            return Ok(());
        }

        let record = OutputRecord::from_values(&self.state.form.values());
        self.sink.submit(&record)?;
        self.state.submitted = true;
        self.state.status_message = Some("Registration submitted".to_string());
        Ok(())
    }

    fn open_country_picker(&mut self) {
        self.state.picker.reset();
        self.state.current_view = View::CountryPicker;
    }

    /// Leaving the picker counts as blurring the country field.
    fn close_country_picker(&mut self) {
        self.state.form.touch(FieldId::Country);
        self.state.current_view = View::Form;
    }
}
