//! Registration form state: values, focus, and touched tracking

use super::field::{FieldId, FormField};

/// Index of the Register button pseudo-row, one past the last field.
pub const BUTTON_ROW: usize = FieldId::ALL.len();

/// Raw values for every field.
///
/// Validation is a pure function of this snapshot; see
/// [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
}

/// The registration form: one field per [`FieldId`], the active row, and
/// which fields the user has interacted with and left.
///
/// Touched state gates only error visibility; it never affects validity.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: [FormField; 6],
    touched: [bool; 6],
    /// 0..=5 are fields, [`BUTTON_ROW`] is the Register button
    active_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: [
                FormField::text(),
                FormField::text(),
                FormField::text(),
                FormField::masked(),
                FormField::masked(),
                FormField::text(),
            ],
            touched: [false; 6],
            active_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    /// The field on the active row, or `None` on the button row.
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_index).copied()
    }

    /// Returns true if the Register button row is active.
    pub fn is_button_row_active(&self) -> bool {
        self.active_index == BUTTON_ROW
    }

    /// Single update path for every field, picker selections included.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields[id.index()].value = value.into();
    }

    /// Assemble the current values for validation and submission.
    pub fn values(&self) -> FormValues {
        FormValues {
            first_name: self.field(FieldId::FirstName).value.clone(),
            last_name: self.field(FieldId::LastName).value.clone(),
            email: self.field(FieldId::Email).value.clone(),
            password: self.field(FieldId::Password).value.clone(),
            confirm_password: self.field(FieldId::ConfirmPassword).value.clone(),
            country: self.field(FieldId::Country).value.clone(),
        }
    }

    /// Mark a field as interacted-with (it has lost focus at least once).
    pub fn touch(&mut self, id: FieldId) {
        self.touched[id.index()] = true;
    }

    /// Mark every field touched, making all current errors visible.
    pub fn touch_all(&mut self) {
        self.touched = [true; 6];
    }

    pub fn is_touched(&self, id: FieldId) -> bool {
        self.touched[id.index()]
    }

    /// Move to the next row, blurring the field being left.
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_index = (self.active_index + 1) % (BUTTON_ROW + 1);
    }

    /// Move to the previous row, blurring the field being left.
    pub fn prev_field(&mut self) {
        self.blur_active();
        if self.active_index == 0 {
            self.active_index = BUTTON_ROW;
        } else {
            self.active_index -= 1;
        }
    }

    /// Mutable access to the active text field, if any.
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_index)
    }

    /// Remove password masking (config preference).
    pub fn unmask_passwords(&mut self) {
        for field in &mut self.fields {
            field.masked = false;
        }
    }

    fn blur_active(&mut self) {
        if let Some(id) = self.active_field_id() {
            self.touch(id);
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
