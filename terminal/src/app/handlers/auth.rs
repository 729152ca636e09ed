//! # Authentication Handlers
//!
//! Handlers for login, registration and logout.

use crate::app::events::AppEvent;
use crate::app::handlers::spawn_event;
use crate::app::state::{AppState, Notice, RegisterField};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle login submit
///
/// Email and password are required locally; a missing one makes no network call.
///
/// Internal handler function - use [`crate::app::App::handle_login_submit`] instead.
pub(crate) fn handle_login_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let (api_client, email, password) = {
        let mut state = state.write();
        state.login.email = email.trim().to_string();
        state.login.password = password;

        let validation = state.login.validate();
        if let Some(error) = validation.error {
            state.login.notice = Some(Notice::error(error));
            return;
        }
        if state.login.busy {
            return;
        }
        state.login.busy = true;
        state.login.notice = Some(Notice::info("Logging in..."));
        (
            state.api_client.clone(),
            state.login.email.clone(),
            state.login.password.clone(),
        )
    };

    spawn_event(&event_tx, async move {
        AppEvent::LoginResult(api_client.login(email, password).await)
    });
}

/// Set one register field
///
/// Internal handler function - use [`crate::app::App::handle_register_field`] instead.
pub(crate) fn handle_register_field(state: Arc<RwLock<AppState>>, field: RegisterField, value: String) {
    state.write().register.set(field, value);
}

/// Stage a title for the initial collection
///
/// Internal handler function - use [`crate::app::App::handle_stage_book`] instead.
pub(crate) fn handle_stage_book(state: Arc<RwLock<AppState>>, title: String) {
    let mut state = state.write();
    if !state.register.stage_book(&title) {
        state.register.notice = Some(Notice::error(format!(
            "\"{}\" is empty or already listed",
            title.trim()
        )));
    } else {
        state.register.notice = None;
    }
}

/// Drop a staged title
///
/// Internal handler function - use [`crate::app::App::handle_unstage_book`] instead.
pub(crate) fn handle_unstage_book(state: Arc<RwLock<AppState>>, title: String) {
    let mut state = state.write();
    if !state.register.unstage_book(&title) {
        state.register.notice = Some(Notice::error(format!("\"{}\" is not listed", title.trim())));
    }
}

/// Handle register submit
///
/// Internal handler function - use [`crate::app::App::handle_register_submit`] instead.
pub(crate) fn handle_register_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, request) = {
        let mut state = state.write();
        let validation = state.register.validate();
        if let Some(error) = validation.error {
            state.register.notice = Some(Notice::error(error));
            return;
        }
        if state.register.busy {
            return;
        }
        state.register.busy = true;
        state.register.notice = Some(Notice::info("Registering..."));
        (state.api_client.clone(), state.register.to_request())
    };

    tracing::info!(
        email = %request.email,
        books = request.selected_books.len(),
        "Submitting registration"
    );
    spawn_event(&event_tx, async move {
        AppEvent::RegisterResult(api_client.register(request).await)
    });
}

/// Handle logout
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if !state.is_authenticated() {
            state.banner = Some(Notice::error("Not logged in"));
            return;
        }
        state.banner = None;
        state.api_client.clone()
    };

    spawn_event(&event_tx, async move {
        AppEvent::LoggedOut(api_client.logout().await)
    });
}
