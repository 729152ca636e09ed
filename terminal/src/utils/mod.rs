//! # Utility Functions
//!
//! Shared utility functions used across the terminal client.
//!
//! ## Modules
//!
//! - **[`details`]**: Book detail decoder for loosely-encoded request payloads
//! - **[`format`]**: Display formatting (avatars, dashes, timestamps)
//! - **[`validation`]**: Local form validation (required fields, email shape)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (label truncation, similarity percentages)
//! - [`crate::core`]: Core abstractions and error types

pub mod details;
pub mod format;
pub mod validation;
