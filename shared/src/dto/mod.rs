//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Session identity, login, logout and registration
//! - [`books`] - Own collection cards and add/remove payloads
//! - [`exchange`] - Listing candidates, search results and trade request creation
//! - [`requests`] - Trade requests (incoming/outgoing) and their status
//! - [`profile`] - Profile record and partial profile updates
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior, matches the backend)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Lists**: Default to empty when the backend leaves them out
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/exchange/request
//! Content-Type: application/json
//!
//! {
//!   "requested_book": "Dune",
//!   "owner_email": "alice@example.com",
//!   "offered_book": "Emma"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "ok": true }
//! ```

pub mod auth;
pub mod books;
pub mod exchange;
pub mod profile;
pub mod requests;

pub use auth::*;
pub use books::*;
pub use exchange::*;
pub use profile::*;
pub use requests::*;
