//! Declarative validation for the registration form
//!
//! [`validate`] is a pure function of the current [`FormValues`]: no UI
//! coupling, no hidden state, cheap enough to re-run on every keystroke.
//! Absence of a field in the result means the field is currently valid.

use crate::state::{FieldId, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters that satisfy the password special-character rule.
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Minimum password length.
const PASSWORD_MIN_LEN: usize = 8;

// local@domain.tld with no whitespace; intentionally permissive.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// A single rule violation, scoped to one field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("{label} must have min {min} chars")]
    TooShort { label: &'static str, min: usize },
    #[error("{label} must have max {max} chars")]
    TooLong { label: &'static str, max: usize },
    #[error("Enter a valid email")]
    InvalidEmail,
    #[error("Password should contain at least 8 characters, 1 uppercase, 1 lowercase, 1 number and 1 special character")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Per-field rule violations for one snapshot of the form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, id: FieldId) -> Option<&ValidationError> {
        self.errors.get(&id)
    }

    /// Human-readable message for the field, if it is in violation.
    pub fn message(&self, id: FieldId) -> Option<String> {
        self.errors.get(&id).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, id: FieldId, error: ValidationError) {
        self.errors.insert(id, error);
    }
}

/// Check every field rule plus the password/confirm cross-field rule.
///
/// The cross-field violation attaches to the confirm-password field, not to
/// the form as a whole. Per field, the required rule is checked before any
/// shape rule, so each field carries at most one error.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let first_len = values.first_name.chars().count();
    if values.first_name.is_empty() {
        errors.insert(FieldId::FirstName, ValidationError::Required);
    } else if first_len < 2 {
        errors.insert(
            FieldId::FirstName,
            ValidationError::TooShort {
                label: FieldId::FirstName.error_label(),
                min: 2,
            },
        );
    } else if first_len > 20 {
        errors.insert(
            FieldId::FirstName,
            ValidationError::TooLong {
                label: FieldId::FirstName.error_label(),
                max: 20,
            },
        );
    }

    // Last name is optional: only the upper bound applies.
    if values.last_name.chars().count() > 20 {
        errors.insert(
            FieldId::LastName,
            ValidationError::TooLong {
                label: FieldId::LastName.error_label(),
                max: 20,
            },
        );
    }

    if values.email.is_empty() {
        errors.insert(FieldId::Email, ValidationError::Required);
    } else if !EMAIL_SHAPE.is_match(&values.email) {
        errors.insert(FieldId::Email, ValidationError::InvalidEmail);
    }

    if values.password.is_empty() {
        errors.insert(FieldId::Password, ValidationError::Required);
    } else if !password_is_strong(&values.password) {
        errors.insert(FieldId::Password, ValidationError::WeakPassword);
    }

    if values.confirm_password.is_empty() {
        errors.insert(FieldId::ConfirmPassword, ValidationError::Required);
    } else if values.confirm_password != values.password {
        errors.insert(FieldId::ConfirmPassword, ValidationError::PasswordMismatch);
    }

    if values.country.is_empty() {
        errors.insert(FieldId::Country, ValidationError::Required);
    }

    errors
}

/// At least 8 chars, one digit, one special, one lowercase, one uppercase.
fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Values that pass every rule (the worked example from the form).
    fn valid_values() -> FormValues {
        FormValues {
            first_name: "Jo".to_string(),
            last_name: String::new(),
            email: "a@b.com".to_string(),
            password: "Aa1!aaaa".to_string(),
            confirm_password: "Aa1!aaaa".to_string(),
            country: "US".to_string(),
        }
    }

    mod first_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            let mut values = valid_values();
            values.first_name = String::new();
            assert_eq!(
                validate(&values).get(FieldId::FirstName),
                Some(&ValidationError::Required)
            );
        }

        #[test]
        fn test_one_char_is_too_short() {
            let mut values = valid_values();
            values.first_name = "J".to_string();
            assert_eq!(
                validate(&values).get(FieldId::FirstName),
                Some(&ValidationError::TooShort {
                    label: "First name",
                    min: 2
                })
            );
        }

        #[test]
        fn test_bounds_are_inclusive() {
            let mut values = valid_values();
            values.first_name = "Jo".to_string();
            assert!(validate(&values).get(FieldId::FirstName).is_none());
            values.first_name = "a".repeat(20);
            assert!(validate(&values).get(FieldId::FirstName).is_none());
        }

        #[test]
        fn test_twenty_one_chars_is_too_long() {
            let mut values = valid_values();
            values.first_name = "a".repeat(21);
            assert_eq!(
                validate(&values).get(FieldId::FirstName),
                Some(&ValidationError::TooLong {
                    label: "First name",
                    max: 20
                })
            );
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            let mut values = valid_values();
            values.first_name = "é".to_string(); // 2 bytes, 1 char
            assert!(matches!(
                validate(&values).get(FieldId::FirstName),
                Some(ValidationError::TooShort { .. })
            ));
        }

        #[test]
        fn test_message_text() {
            let mut values = valid_values();
            values.first_name = "J".to_string();
            assert_eq!(
                validate(&values).message(FieldId::FirstName),
                Some("First name must have min 2 chars".to_string())
            );
        }
    }

    mod last_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_valid() {
            let values = valid_values();
            assert!(validate(&values).get(FieldId::LastName).is_none());
        }

        #[test]
        fn test_twenty_chars_is_valid() {
            let mut values = valid_values();
            values.last_name = "a".repeat(20);
            assert!(validate(&values).get(FieldId::LastName).is_none());
        }

        #[test]
        fn test_twenty_one_chars_is_too_long() {
            let mut values = valid_values();
            values.last_name = "a".repeat(21);
            assert_eq!(
                validate(&values).message(FieldId::LastName),
                Some("Last name must have max 20 chars".to_string())
            );
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            let mut values = valid_values();
            values.email = String::new();
            assert_eq!(
                validate(&values).get(FieldId::Email),
                Some(&ValidationError::Required)
            );
        }

        #[test]
        fn test_valid_shapes() {
            let mut values = valid_values();
            for email in ["a@b.com", "first.last@example.co.uk", "x+tag@host.io"] {
                values.email = email.to_string();
                assert!(
                    validate(&values).get(FieldId::Email).is_none(),
                    "expected {email} to be valid"
                );
            }
        }

        #[test]
        fn test_invalid_shapes() {
            let mut values = valid_values();
            for email in ["plain", "no-at.com", "a@b", "a b@c.com", "a@b c.com"] {
                values.email = email.to_string();
                assert_eq!(
                    validate(&values).get(FieldId::Email),
                    Some(&ValidationError::InvalidEmail),
                    "expected {email} to be invalid"
                );
            }
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            let mut values = valid_values();
            values.password = String::new();
            values.confirm_password = String::new();
            assert_eq!(
                validate(&values).get(FieldId::Password),
                Some(&ValidationError::Required)
            );
        }

        #[test]
        fn test_each_missing_class_fails() {
            let mut values = valid_values();
            let weak = [
                "Aa1!aaa",   // 7 chars
                "Aa!aaaaa",  // no digit
                "Aa1aaaaa",  // no special
                "AA1!AAAA",  // no lowercase
                "aa1!aaaa",  // no uppercase
            ];
            for password in weak {
                values.password = password.to_string();
                values.confirm_password = password.to_string();
                assert_eq!(
                    validate(&values).get(FieldId::Password),
                    Some(&ValidationError::WeakPassword),
                    "expected {password} to be rejected"
                );
            }
        }

        #[test]
        fn test_minimal_strong_password_passes() {
            let mut values = valid_values();
            values.password = "Aa1!aaaa".to_string();
            values.confirm_password = "Aa1!aaaa".to_string();
            assert!(validate(&values).get(FieldId::Password).is_none());
        }

        #[test]
        fn test_all_special_chars_count() {
            let mut values = valid_values();
            for special in PASSWORD_SPECIALS.chars() {
                let password = format!("Aa1{special}aaaa");
                values.password = password.clone();
                values.confirm_password = password;
                assert!(validate(&values).get(FieldId::Password).is_none());
            }
        }
    }

    mod confirm_password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch_attaches_to_confirm_field() {
            let mut values = valid_values();
            values.confirm_password = "Aa1!aaab".to_string();
            let errors = validate(&values);
            assert_eq!(
                errors.get(FieldId::ConfirmPassword),
                Some(&ValidationError::PasswordMismatch)
            );
            assert!(errors.get(FieldId::Password).is_none());
        }

        #[test]
        fn test_mismatch_reported_even_when_password_is_weak() {
            let mut values = valid_values();
            values.password = "weak".to_string();
            values.confirm_password = "also-weak".to_string();
            assert_eq!(
                validate(&values).get(FieldId::ConfirmPassword),
                Some(&ValidationError::PasswordMismatch)
            );
        }

        #[test]
        fn test_equal_non_empty_has_no_error() {
            let values = valid_values();
            assert!(validate(&values).get(FieldId::ConfirmPassword).is_none());
        }

        #[test]
        fn test_empty_confirm_is_required_not_mismatch() {
            let mut values = valid_values();
            values.confirm_password = String::new();
            assert_eq!(
                validate(&values).get(FieldId::ConfirmPassword),
                Some(&ValidationError::Required)
            );
        }

        #[test]
        fn test_mismatch_message() {
            let mut values = valid_values();
            values.confirm_password = "Aa1!aaab".to_string();
            assert_eq!(
                validate(&values).message(FieldId::ConfirmPassword),
                Some("Passwords do not match".to_string())
            );
        }
    }

    mod country {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            let mut values = valid_values();
            values.country = String::new();
            assert_eq!(
                validate(&values).get(FieldId::Country),
                Some(&ValidationError::Required)
            );
        }

        #[test]
        fn test_code_is_valid() {
            let values = valid_values();
            assert!(validate(&values).get(FieldId::Country).is_none());
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_worked_example_is_clean() {
            assert!(validate(&valid_values()).is_empty());
        }

        #[test]
        fn test_pristine_form_has_errors_on_every_required_field() {
            let errors = validate(&FormValues::default());
            for id in [
                FieldId::FirstName,
                FieldId::Email,
                FieldId::Password,
                FieldId::ConfirmPassword,
                FieldId::Country,
            ] {
                assert_eq!(errors.get(id), Some(&ValidationError::Required));
            }
            assert!(errors.get(FieldId::LastName).is_none());
        }

        #[test]
        fn test_validation_is_deterministic() {
            let values = valid_values();
            assert_eq!(validate(&values), validate(&values));
        }
    }
}
