//! Field identifiers and single-field widget state

/// The registration fields, in display and submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Country,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Country,
    ];

    /// Label shown above the input box.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::Country => "Country",
        }
    }

    /// Field name as it appears in validation messages.
    pub fn error_label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
            FieldId::Country => "Country",
        }
    }

    /// Position of the field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single text input with its value and masking behavior
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub value: String,
    /// Render the value as bullets (password fields)
    pub masked: bool,
}

impl FormField {
    /// Create a plain text field
    pub fn text() -> Self {
        Self::default()
    }

    /// Create a masked (password) field
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering (bullets for masked fields)
    pub fn display_value(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
