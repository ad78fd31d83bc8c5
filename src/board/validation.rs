//! Field validation for board entries.
//!
//! Rules are declared with `validator` derives on [`NewBoardEntry`] and on
//! the HTTP request body; this module holds the custom checks they share and
//! turns a `ValidationErrors` value into the field → messages report that
//! clients receive.
//!
//! [`NewBoardEntry`]: super::NewBoardEntry

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

/// Message for a field that was not supplied at all.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message for a field that is empty or whitespace only.
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Field-level error report: field name → human-readable reasons.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Validate that a string is not empty after trimming whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(BLANK_MESSAGE.into()));
    }
    Ok(())
}

/// Flatten validation errors into a field → messages report.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut report = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors.iter().map(|e| message_for(field, e)).collect();
        report.insert(field.to_string(), messages);
    }

    report
}

/// Human-readable message for one failed rule.
///
/// An explicit message wins. Otherwise `required` and `length` errors get
/// their standard wording, with the bound taken from the error's `max`
/// parameter, and anything else names the field.
fn message_for(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "required" => REQUIRED_MESSAGE.to_string(),
        "length" => match error.params.get("max") {
            Some(max) => format!("Ensure this field has no more than {max} characters."),
            None => format!("Invalid value for {field}"),
        },
        _ => format!("Invalid value for {field}"),
    }
}
