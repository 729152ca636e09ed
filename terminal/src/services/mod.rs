//! # Services Module
//!
//! External service integrations for the book exchange client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/     - Backend HTTP session client
//!                (session, profile, collection, exchange, trade requests)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            bookswap terminal            │
//! │                                         │
//! │   views ──► Arc<dyn ApiService>         │
//! │                   │                     │
//! │             ┌─────▼──────┐              │
//! │             │ ApiClient  │ cookie store │
//! │             └─────┬──────┘              │
//! └───────────────────┼─────────────────────┘
//!                     │ HTTP/JSON
//!                     ▼
//!            ┌─────────────────┐
//!            │  Backend API    │
//!            └─────────────────┘
//! ```

pub mod api;

pub use api::ApiClient;
