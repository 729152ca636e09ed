//! # BookSwap Terminal - Library Root
//!
//! Interactive terminal client for a peer-to-peer book exchange. Users list books they
//! own, browse other users' listings ranked by similarity, and trade book-for-book
//! through a request/accept/reject workflow.
//!
//! The client is a presentation layer: authentication, matching and persistence all
//! live in the backend it talks to over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bookswap-terminal (this crate)            │
//! ├────────────────────────────────────────────────────────┤
//! │  repl          - Command parsing and dispatch          │
//! │  ui            - Text rendering of the mounted screen  │
//! │  app           - State, handlers, request lifecycle    │
//! │  services::api - Session client (reqwest + cookies)    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP, JSON envelopes {ok, ...}
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Event-driven: handlers spawn backend calls, results come back as `AppEvent`s
//!   - `lifecycle`: trade request state machine and the single busy guard
//! - **core**: Error type, configuration and the `ApiService` seam
//! - **services**: `api` session client, one file per endpoint group
//! - **ui**: Text screens and widgets
//! - **utils**: Detail decoder, formatting, validation
//! - **debug**: File logging setup
//! - **repl**: Command line front end
//!
//! ## Concurrency
//!
//! Commands run on the main task and never block on the network. Each backend call is
//! its own Tokio task. Results are applied one at a time on the main task, and results
//! for a view the user has navigated away from are dropped.
//!
//! ## Usage
//!
//! ### As a Binary
//!
//! ```bash
//! cargo run --bin bookswap -- --api-url http://localhost:5000/api
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookswap_terminal::{App, ApiClient, ClientConfig};
//!
//! # fn main() -> bookswap_terminal::Result<()> {
//! let api = Arc::new(ApiClient::new(ClientConfig::from_env())?);
//! let app = App::new(api);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod repl;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, ApiService, ClientConfig, Result};
pub use services::ApiClient;
