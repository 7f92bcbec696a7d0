//! Email and contact-number validation

use super::form::{FieldId, FormRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Compiled once at first use to avoid repeated compilation.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email regex is valid")
});

/// Validation failure scoped to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldId, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Live per-keystroke email check. Returns the error message to display,
/// or `None` once the address is valid.
pub fn live_email_error(value: &str) -> Option<String> {
    if is_valid_email(value) {
        None
    } else {
        Some("Please enter your correct email address".to_string())
    }
}

/// Live per-keystroke contact-number check. Only warns once the number has
/// grown past ten digits; typing is never blocked.
pub fn live_contact_number_error(value: &str) -> Option<String> {
    if value.len() > 10 {
        Some("Mobile number should be exactly 10 digits".to_string())
    } else {
        None
    }
}

/// Submit-time validation. Short-circuits on the first failing rule:
/// email before contact number, never aggregating errors.
pub fn validate_for_submit(record: &FormRecord) -> Result<(), FieldError> {
    if !is_valid_email(&record.email) {
        return Err(FieldError::new(
            FieldId::Email,
            "Invalid email format. Please enter a valid email address.",
        ));
    }

    if record.contact_number.len() != 10 {
        return Err(FieldError::new(
            FieldId::ContactNumber,
            "Mobile number must be exactly 10 digits",
        ));
    }

    Ok(())
}
