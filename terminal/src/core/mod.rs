//! # Core Abstractions
//!
//! Core traits, configuration and error types used throughout the client.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//! - **[`config`]**: Session client configuration (`ClientConfig`)
//!
//! ## Dependency Injection
//!
//! Views only ever see an `Arc<dyn ApiService>`:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookswap_terminal::core::{ApiService, ClientConfig};
//!
//! // In production: the reqwest-backed session client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(ClientConfig::from_env())?);
//!
//! // In tests: a fake that records calls
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::ApiService;
