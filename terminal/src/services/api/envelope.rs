//! # Response Envelope
//!
//! Every backend response is `{"ok": bool, ...}`. This module is the single place
//! where that envelope is unwrapped into a typed payload or an [`AppError`].
//!
//! ## Classification
//!
//! | Body                              | Result                       |
//! |-----------------------------------|------------------------------|
//! | `{"ok": true, ...payload}`        | `Ok(payload)`                |
//! | `{"ok": false, "error": "..."}`   | `Err(AppError::Rejected)`    |
//! | not JSON / no `ok` flag           | `Err(AppError::Transport)`   |
//!
//! The HTTP status is only used for diagnostics: the backend answers 400/401/404
//! with proper envelopes, and those are application-level failures.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{AppError, Result};

/// Parse a response body as JSON, classifying garbage as a transport failure.
pub(crate) fn parse_body(status: StatusCode, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|_| {
        if status.is_success() {
            AppError::Transport(format!("HTTP {}: response is not JSON", status.as_u16()))
        } else {
            AppError::Transport(format!("HTTP {} without a response envelope", status.as_u16()))
        }
    })
}

/// The envelope's `ok` flag, or a transport failure when there is none
pub(crate) fn ok_flag(status: StatusCode, value: &Value) -> Result<bool> {
    value.get("ok").and_then(Value::as_bool).ok_or_else(|| {
        AppError::Transport(format!("HTTP {} without a response envelope", status.as_u16()))
    })
}

/// Application-level failure carried by an `{ok: false}` envelope.
///
/// A missing `error` leaves the message empty so the caller can supply its own
/// wording (see [`AppError::or_message`]).
pub(crate) fn rejection(status: StatusCode, value: &Value) -> AppError {
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();
    if message.is_empty() {
        tracing::debug!(status = status.as_u16(), "Rejection without a message");
    }
    AppError::Rejected(message)
}

/// Unwrap an envelope into its typed payload.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value = parse_body(status, body)?;
    if !ok_flag(status, &value)? {
        return Err(rejection(status, &value));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::Transport(format!("unexpected response payload: {}", e)))
}
