use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::types::{FieldKind, FieldName};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum length of the message body, in UTF-16 code units as a browser
/// counts `value.length`
pub const MIN_MESSAGE_LEN: usize = 10;

/// Why a field was rejected. The display text is shown to the user as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long.")]
    TooShort,
}

/// Validate one field value. The value is trimmed first and the first
/// failing rule wins.
pub fn validate(field: FieldName, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    if value.is_empty() {
        return if field.required() {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    if field.kind() == FieldKind::Email && !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }

    if field == FieldName::Message && value.encode_utf16().count() < MIN_MESSAGE_LEN {
        return Err(FieldError::TooShort);
    }

    Ok(())
}
