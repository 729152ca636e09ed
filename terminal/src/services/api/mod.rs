//! # Backend API Client Module
//!
//! HTTP session client for the book exchange backend. Every call carries the
//! session cookie automatically and every response is unwrapped from the shared
//! `{ok, ...}` envelope.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, verb helpers, ApiService impl
//! ├── envelope.rs  - `{ok, error}` envelope decoding
//! ├── auth.rs      - Session endpoints (me, login, register, logout)
//! ├── profile.rs   - Profile endpoints (get, patch)
//! ├── books.rs     - Own collection endpoints (list, add, remove)
//! ├── exchange.rs  - Listing, search and trade request creation
//! └── requests.rs  - Trade request lists and transitions
//! ```

pub mod auth;
pub mod books;
pub mod client;
pub(crate) mod envelope;
pub mod exchange;
pub mod profile;
pub mod requests;

pub use client::ApiClient;
