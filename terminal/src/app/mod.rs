//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the client, coordinating between the text
//! front end, async task handlers, and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Loop (REPL)                         │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - handle_*() - user commands                        │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - session context, one view state per screen        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - one spawned task per backend call                        │
//! │  - result sent back as AppEvent tagged with its ViewToken   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Main application orchestrator with event handling
//! - **[`AppState`]**: Shared application state (see [`state`] module)
//! - **[`AppEvent`]**: Event enum for async task results (see [`events`] module)
//! - **[`lifecycle`]**: Trade request state machine and the busy guard
//!
//! ## View Mounting
//!
//! Navigating resets the target screen's state and bumps the view generation. Every
//! view-scoped result carries the token it was started under; results for a view that
//! is no longer mounted are dropped. Nothing is cancelled in flight.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookswap_terminal::app::App;
//! use bookswap_terminal::core::ClientConfig;
//! use bookswap_terminal::services::ApiClient;
//!
//! # async fn run() -> bookswap_terminal::core::Result<()> {
//! let api = Arc::new(ApiClient::new(ClientConfig::from_env())?);
//! let mut app = App::new(api);
//! app.start();
//!
//! while let Some(event) = app.next_event().await {
//!     app.handle_event(event);
//! }
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
pub mod lifecycle;
mod state;
#[cfg(test)]
pub(crate) mod test_support;

pub use event_handler::REGISTERED;
pub use events::AppEvent;
pub use handlers::exchange::{PICK_OFFER_PROMPT, REQUEST_SENT};
pub use handlers::profile::PROFILE_SAVED;
pub use lifecycle::{BusyTransition, ListKind, RequestControl};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::TransitionAction;

use crate::core::service::ApiService;

/// Main application orchestrator that coordinates commands, async tasks, and state.
///
/// Commands update state synchronously and spawn backend calls on the Tokio runtime.
/// Results come back through an unbounded channel and are applied by
/// [`App::handle_event`]. Locks on the shared state are held only for the duration of
/// a single update.
pub struct App {
    /// Shared application state.
    ///
    /// - Use `read()` for rendering
    /// - Use `write()` for updates
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender, cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance on the Login screen with no session.
    pub fn new(api_client: Arc<dyn ApiService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - Event channel created");

        App {
            state: Arc::new(RwLock::new(AppState::new(api_client))),
            event_rx,
            event_tx,
        }
    }

    /// Bootstrap the session with `/me`. The initial route is decided once it answers.
    pub fn start(&self) {
        handlers::navigation::bootstrap_session(self.state.clone(), self.event_tx.clone());
    }

    /// Wait for the next async result
    pub async fn next_event(&self) -> Option<AppEvent> {
        self.event_rx.recv().await.ok()
    }

    /// Apply every result already waiting in the channel (non-blocking).
    ///
    /// Returns the number of events applied.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: Processed events");
        }
        processed
    }

    /// Handle one async result
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Currently mounted screen
    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    // ========== Command Methods - Delegating to Handlers ==========

    /// Mount `screen`, subject to the session guard. Returns the screen mounted.
    pub fn navigate(&mut self, screen: Screen) -> Screen {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen)
    }

    /// Reload the mounted view
    pub fn handle_refresh(&mut self) {
        let token = self.state.read().view;
        handlers::navigation::load_view(self.state.clone(), self.event_tx.clone(), token);
    }

    /// Submit the login form
    pub fn handle_login_submit(&mut self, email: String, password: String) {
        handlers::auth::handle_login_submit(self.state.clone(), self.event_tx.clone(), email, password);
    }

    /// Set one register field
    pub fn handle_register_field(&mut self, field: RegisterField, value: String) {
        handlers::auth::handle_register_field(self.state.clone(), field, value);
    }

    /// Stage a title for the initial collection
    pub fn handle_stage_book(&mut self, title: String) {
        handlers::auth::handle_stage_book(self.state.clone(), title);
    }

    /// Drop a staged title
    pub fn handle_unstage_book(&mut self, title: String) {
        handlers::auth::handle_unstage_book(self.state.clone(), title);
    }

    /// Submit the register form
    pub fn handle_register_submit(&mut self) {
        handlers::auth::handle_register_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Log out
    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone(), self.event_tx.clone());
    }

    /// Search listings; a blank query reloads the default listing
    pub fn handle_search(&mut self, query: String) {
        handlers::exchange::handle_search(self.state.clone(), self.event_tx.clone(), query);
    }

    /// Clear the query and reload the default listing
    pub fn handle_reset_search(&mut self) {
        handlers::exchange::handle_reset(self.state.clone(), self.event_tx.clone());
    }

    /// Pick the offered book for a listing
    pub fn handle_offer_select(&mut self, index: usize, title: String) {
        handlers::exchange::handle_offer_select(self.state.clone(), index, title);
    }

    /// Send a trade request for a listing
    pub fn handle_request_submit(&mut self, index: usize) {
        handlers::exchange::handle_request_submit(self.state.clone(), self.event_tx.clone(), index);
    }

    /// Add a title to the own collection
    pub fn handle_add_book(&mut self, title: String) {
        handlers::books::handle_add_book(self.state.clone(), self.event_tx.clone(), title);
    }

    /// Remove a title from the own collection
    pub fn handle_remove_book(&mut self, title: String) {
        handlers::books::handle_remove_book(self.state.clone(), self.event_tx.clone(), title);
    }

    /// Accept, reject or cancel a request
    pub fn handle_transition(&mut self, list: ListKind, id: String, action: TransitionAction) {
        handlers::requests::handle_transition(self.state.clone(), self.event_tx.clone(), list, id, action);
    }

    /// Enter profile edit mode
    pub fn handle_edit_profile(&mut self) {
        handlers::profile::handle_edit(self.state.clone());
    }

    /// Stage one profile field
    pub fn handle_profile_field(&mut self, field: ProfileField, value: String) {
        handlers::profile::handle_set_field(self.state.clone(), field, value);
    }

    /// Save staged profile edits
    pub fn handle_save_profile(&mut self) {
        handlers::profile::handle_save(self.state.clone(), self.event_tx.clone());
    }

    /// Leave edit mode without saving
    pub fn handle_discard_profile(&mut self) {
        handlers::profile::handle_discard(self.state.clone(), self.event_tx.clone());
    }
}
