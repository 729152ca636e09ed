//! # Logging Infrastructure
//!
//! File-based structured logging for the interactive client.
//!
//! The front end owns stdout, so log output goes to a daily-rotated file and never
//! interleaves with rendered screens.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookswap_terminal::debug::{self, LogConfig};
//!
//! // Initialize at start-up and keep the guard alive until exit
//! let _guard = debug::init(&LogConfig::from_env());
//!
//! tracing::info!(endpoint = "/exchange", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `bookswap_terminal=info,warn`)
//! - `BOOKSWAP_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, LogGuard};
