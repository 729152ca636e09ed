//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the book exchange client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Session, login and registration DTOs
//!   - **[`dto::books`]**: A user's own book collection
//!   - **[`dto::exchange`]**: Listing candidates and trade request creation
//!   - **[`dto::requests`]**: Trade requests and their status
//!   - **[`dto::profile`]**: Account attributes and profile updates
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::truncate_label`]**: Shorten long titles and genres with an ellipsis
//!   - **[`utils::format_similarity`]**: Render a similarity score as a percentage
//!
//! ## Wire Format
//!
//! Every backend response is wrapped in the same envelope:
//!
//! ```text
//! { "ok": true,  ...payload }
//! { "ok": false, "error": "Invalid email or password" }
//! ```
//!
//! The DTOs in this crate describe the payload half of that envelope. Unwrapping the
//! envelope itself is the job of the client's session layer.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::exchange::CreateTradeRequest;
//!
//! let request = CreateTradeRequest {
//!     requested_book: "Dune".to_string(),
//!     owner_email: "alice@example.com".to_string(),
//!     offered_book: "Emma".to_string(),
//! };
//! let json = serde_json::to_value(&request).unwrap();
//! assert_eq!(json["owner_email"], "alice@example.com");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
