//! # Common Error Types
//!
//! Consolidated error handling for the book exchange client.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the client.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Rejected**: The backend answered with an `{ok: false, error}` envelope
//! - **Transport**: The call never produced an envelope (network, timeout, 5xx page)
//! - **Validation**: A local precondition failed before any network call
//! - **State**: The action needs application state that is not there (e.g. a session)
//!
//! Application-level rejections are always recoverable in place: the view shows the
//! message and keeps its state. Transport failures are reported once per call and
//! never retried automatically; the user retries.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use bookswap_terminal::core::error::AppError;
//!
//! fn require_title(title: &str) -> Result<&str, AppError> {
//!     if title.trim().is_empty() {
//!         return Err(AppError::Validation("Title is required".to_string()));
//!     }
//!     Ok(title.trim())
//! }
//!
//! assert!(require_title("  ").is_err());
//! ```

use thiserror::Error;

/// Shown for an `{ok: false}` answer without an `error` string
pub const UNEXPLAINED_REJECTION: &str = "Request failed";

/// Application-wide error type.
///
/// Every variant carries a human-readable message. The type is `Clone` so results
/// can travel through the event channel back to the views.
///
/// # Example
///
/// ```rust
/// use bookswap_terminal::core::error::AppError;
///
/// let rejected = AppError::Rejected("Invalid email or password".to_string());
/// let transport = AppError::Transport("connection refused".to_string());
///
/// assert_eq!(rejected.to_string(), "Invalid email or password");
/// assert_eq!(transport.to_string(), "Network error: connection refused");
/// assert!(transport.is_transport());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Application-level failure reported by the backend envelope.
    ///
    /// The message is the backend's `error` string and is shown verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Transport-level failure.
    ///
    /// Used when no envelope could be read:
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - Non-2xx responses without a JSON envelope
    /// - Bodies that are not JSON at all
    #[error("Network error: {0}")]
    Transport(String),

    /// Local input validation error.
    ///
    /// Raised before any network call, e.g. submitting a trade request with
    /// no offered book selected.
    #[error("{0}")]
    Validation(String),

    /// Application state error.
    ///
    /// Used when an action needs state that does not exist, such as a
    /// request id that is not in any list.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// True for failures that never reached the application layer
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }

    /// Message suitable for inline display in a view.
    ///
    /// Transport failures get a generic retry hint so a view never goes silent. A
    /// rejection the backend sent without a message reads as a generic failure.
    pub fn user_message(&self) -> String {
        if self.is_transport() {
            return format!("{}. Try again.", self);
        }
        match self {
            AppError::Rejected(message) if message.is_empty() => UNEXPLAINED_REJECTION.to_string(),
            _ => self.to_string(),
        }
    }

    /// Fill in `fallback` for a rejection that carried no message
    pub fn or_message(self, fallback: &str) -> Self {
        match self {
            AppError::Rejected(message) if message.is_empty() => AppError::Rejected(fallback.to_string()),
            other => other,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport("request timed out".to_string())
        } else if err.is_connect() {
            AppError::Transport(format!("server unreachable ({})", err))
        } else {
            AppError::Transport(err.to_string())
        }
    }
}
