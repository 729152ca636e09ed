//! Validation utilities for user input
//!
//! Only form completeness is checked locally. Everything else (email shape,
//! password policy, duplicate requests, ownership) is the backend's call.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate that every `(label, value)` pair is filled in
pub fn validate_required(fields: &[(&str, &str)]) -> ValidationResult {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => ValidationResult::err(format!("{} is required", label)),
        None => ValidationResult::ok(),
    }
}
