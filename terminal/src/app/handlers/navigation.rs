//! # Navigation Handlers
//!
//! Screen changes with the session guard, view mounting and the start-up bootstrap.

use crate::app::events::AppEvent;
use crate::app::handlers::{books, exchange, profile, requests, spawn_event};
use crate::app::state::{AppState, Screen, ViewToken};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ask the backend who we are
///
/// Internal handler function - use [`crate::app::App::start`] instead.
pub(crate) fn bootstrap_session(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    spawn_event(&event_tx, async move {
        AppEvent::SessionLoaded(api_client.me().await)
    });
    tracing::debug!("Session bootstrap started");
}

/// Handle screen change with the session guard
///
/// Mounts a fresh view: the target's state is reset, the generation is bumped so
/// results of the previous mount get dropped, and the initial load is started.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) -> Screen {
    let token = {
        let mut state = state.write();
        let target = state.resolve_route(screen);
        if target != screen {
            tracing::info!(
                requested = screen.title(),
                target = target.title(),
                "Route redirected"
            );
        }

        state.reset_view(target);
        state.current_screen = target;
        state.view = ViewToken {
            screen: target,
            generation: state.view.generation + 1,
        };
        state.view
    };

    load_view(state, event_tx, token);
    token.screen
}

/// Start the initial load of the mounted view
///
/// Internal handler function - use [`crate::app::App::handle_refresh`] instead.
pub(crate) fn load_view(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, token: ViewToken) {
    match token.screen {
        Screen::Login | Screen::Register => {}
        Screen::Exchange => exchange::load(state, event_tx, token),
        Screen::MyBooks => books::load(state, event_tx, token),
        Screen::Requests => {
            requests::load(state, event_tx, token);
        }
        Screen::Profile => profile::load(state, event_tx, token),
    }
}
