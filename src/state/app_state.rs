//! Top-level application state

use crate::countries::{self, Country};
use crate::state::{FieldId, RegistrationForm};
use crate::validation::{validate, FieldErrors};

/// Which screen is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Modal country picker over the form
    CountryPicker,
}

/// Search and selection state for the country picker
#[derive(Debug, Clone, Default)]
pub struct CountryPickerState {
    pub query: String,
    /// Index into the current match list
    pub selected: usize,
}

impl CountryPickerState {
    /// Countries matching the current query.
    pub fn matches(&self) -> Vec<&'static Country> {
        countries::search(&self.query)
    }

    /// The highlighted country, if the match list is non-empty.
    pub fn selected_country(&self) -> Option<&'static Country> {
        self.matches().get(self.selected).copied()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn move_down(&mut self) {
        let count = self.matches().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }
}

/// All state the UI renders from
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    /// Recomputed from the form values on every change
    pub errors: FieldErrors,
    pub picker: CountryPickerState,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Set once a submission has been handed to the sink
    pub submitted: bool,
}

impl AppState {
    pub fn new() -> Self {
        let form = RegistrationForm::new();
        let errors = validate(&form.values());
        Self {
            current_view: View::Form,
            form,
            errors,
            picker: CountryPickerState::default(),
            status_message: None,
            submitted: false,
        }
    }

    /// Recompute errors from the current values.
    pub fn revalidate(&mut self) {
        self.errors = validate(&self.form.values());
    }

    /// Update a field through the single shared path and revalidate.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.form.set_field(id, value);
        self.revalidate();
    }

    /// Error message for the field, only once the user has blurred it.
    pub fn visible_error(&self, id: FieldId) -> Option<String> {
        if self.form.is_touched(id) {
            self.errors.message(id)
        } else {
            None
        }
    }

    /// Display string for the selected country (flag, name, code).
    pub fn country_display(&self) -> Option<String> {
        let code = &self.form.field(FieldId::Country).value;
        countries::by_code(code).map(|c| format!("{} {} ({})", c.flag, c.name, c.code))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
