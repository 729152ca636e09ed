//! # Exchange Handlers
//!
//! Listing load, keyword search and trade request submission.

use crate::app::events::AppEvent;
use crate::app::handlers::spawn_event;
use crate::app::state::{AppState, Notice, ViewToken};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::CreateTradeRequest;
use std::sync::Arc;

/// Prompt shown when a request is submitted without an offered book
pub const PICK_OFFER_PROMPT: &str = "Pick a book to offer.";

/// Shown once the backend accepted a trade request
pub const REQUEST_SENT: &str = "Request sent!";

/// Load own collection and the default candidate listing
pub(crate) fn load(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, token: ViewToken) {
    let api_client = {
        let mut state = state.write();
        state.exchange.loading = true;
        state.api_client.clone()
    };
    spawn_event(&event_tx, async move {
        AppEvent::ExchangeLoaded(token, api_client.get_exchange().await)
    });
}

/// Handle search submit
///
/// An empty or whitespace query reloads the default listing instead of searching.
/// Anything else is sent as typed.
///
/// Internal handler function - use [`crate::app::App::handle_search`] instead.
pub(crate) fn handle_search(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, query: String) {
    let token = {
        let mut state = state.write();
        state.exchange.query = query.clone();
        state.exchange.notice = None;
        state.view
    };

    if query.trim().is_empty() {
        tracing::debug!("Blank search, reloading default listing");
        load(state, event_tx, token);
        return;
    }

    let api_client = {
        let mut state = state.write();
        state.exchange.loading = true;
        state.api_client.clone()
    };
    tracing::info!(query = %query, "Searching listings");
    spawn_event(&event_tx, async move {
        AppEvent::SearchResult(token, api_client.search_exchange(&query).await)
    });
}

/// Clear the query and reload the default listing
///
/// Internal handler function - use [`crate::app::App::handle_reset_search`] instead.
pub(crate) fn handle_reset(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let token = {
        let mut state = state.write();
        state.exchange.query.clear();
        state.exchange.notice = None;
        state.view
    };
    load(state, event_tx, token);
}

/// Pick the offered book for the candidate at `index`
///
/// Only titles from the user's own collection can be picked.
///
/// Internal handler function - use [`crate::app::App::handle_offer_select`] instead.
pub(crate) fn handle_offer_select(state: Arc<RwLock<AppState>>, index: usize, title: String) {
    let mut state = state.write();
    if index >= state.exchange.candidates.len() {
        state.exchange.notice = Some(Notice::error(format!("No listing #{}", index + 1)));
        return;
    }
    let title = title.trim();
    if !state.exchange.my_titles.iter().any(|t| t == title) {
        state.exchange.notice = Some(Notice::error(format!("\"{title}\" is not in your books")));
        return;
    }
    state.exchange.offer_selection.insert(index, title.to_string());
    state.exchange.notice = None;
}

/// Submit a trade request for the candidate at `index`
///
/// Without a picked offer nothing is sent and the user is prompted.
///
/// Internal handler function - use [`crate::app::App::handle_request_submit`] instead.
pub(crate) fn handle_request_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    index: usize,
) {
    let (api_client, token, request) = {
        let mut state = state.write();
        let Some(candidate) = state.exchange.candidates.get(index).cloned() else {
            state.exchange.notice = Some(Notice::error(format!("No listing #{}", index + 1)));
            return;
        };
        let Some(offered) = state.exchange.selected_offer(index).map(str::to_string) else {
            state.exchange.notice = Some(Notice::error(PICK_OFFER_PROMPT));
            return;
        };
        state.exchange.notice = None;
        (
            state.api_client.clone(),
            state.view,
            CreateTradeRequest {
                requested_book: candidate.book_title,
                owner_email: candidate.user_email,
                offered_book: offered,
            },
        )
    };

    tracing::info!(
        requested = %request.requested_book,
        offered = %request.offered_book,
        owner = %request.owner_email,
        "Sending trade request"
    );
    spawn_event(&event_tx, async move {
        AppEvent::TradeRequestSent(token, api_client.send_trade_request(request).await)
    });
}
