//! # My Books Handlers
//!
//! Own collection load, add and remove.

use crate::app::events::AppEvent;
use crate::app::handlers::spawn_event;
use crate::app::state::{AppState, Notice, ViewToken};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Load the own collection
pub(crate) fn load(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, token: ViewToken) {
    let api_client = {
        let mut state = state.write();
        state.books.loading = true;
        state.api_client.clone()
    };
    spawn_event(&event_tx, async move {
        AppEvent::MyBooksLoaded(token, api_client.my_books().await)
    });
}

/// Add a title to the own collection
///
/// The title is trimmed; a blank title makes no call.
///
/// Internal handler function - use [`crate::app::App::handle_add_book`] instead.
pub(crate) fn handle_add_book(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, title: String) {
    let (api_client, token, title) = {
        let mut state = state.write();
        state.books.new_title = title;
        let title = state.books.new_title.trim().to_string();
        if title.is_empty() {
            return;
        }
        state.books.notice = None;
        (state.api_client.clone(), state.view, title)
    };

    tracing::info!(title = %title, "Adding book");
    spawn_event(&event_tx, async move {
        AppEvent::BookAdded(token, api_client.add_book(title).await)
    });
}

/// Remove a title from the own collection
///
/// Internal handler function - use [`crate::app::App::handle_remove_book`] instead.
pub(crate) fn handle_remove_book(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    title: String,
) {
    let (api_client, token) = {
        let mut state = state.write();
        if !state.books.cards.iter().any(|card| card.title == title) {
            state.books.notice = Some(Notice::error(format!("\"{title}\" is not in your books")));
            return;
        }
        state.books.notice = None;
        (state.api_client.clone(), state.view)
    };

    tracing::info!(title = %title, "Removing book");
    spawn_event(&event_tx, async move {
        AppEvent::BookRemoved(token, api_client.remove_book(title).await)
    });
}
