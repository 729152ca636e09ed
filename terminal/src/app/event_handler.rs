//! # Event Handler
//!
//! Applies async results from background tasks to application state.
//!
//! View-scoped events whose [`ViewToken`](crate::app::ViewToken) no longer matches the
//! mounted view are dropped unapplied. Locks are taken per event and never held
//! across a handler call that takes them again.

use shared::{
    ExchangeListing, ListingCandidate, MyBooksResponse, RequestLists, SessionUser,
    TransitionAction, UserProfile,
};

use crate::app::handlers::{self, exchange::REQUEST_SENT, profile::PROFILE_SAVED};
use crate::app::lifecycle;
use crate::app::state::{Notice, ProfileForm, ViewToken};
use crate::app::{App, AppEvent, Screen};
use crate::core::error::Result;

/// Message shown on the login form after a successful registration
pub const REGISTERED: &str = "Registered! Please login.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle one async result
    fn handle_event_impl(&mut self, event: AppEvent) {
        if let Some(token) = event.view_token() {
            if !self.state.read().is_current(token) {
                tracing::debug!(
                    event = event.name(),
                    screen = token.screen.title(),
                    generation = token.generation,
                    "Dropping result for unmounted view"
                );
                return;
            }
        }
        tracing::debug!(event = event.name(), "Applying event");

        match event {
            AppEvent::SessionLoaded(result) => self.handle_session_loaded(result),
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult(result) => self.handle_register_result(result),
            AppEvent::LoggedOut(result) => self.handle_logged_out(result),
            AppEvent::ExchangeLoaded(_, result) => self.handle_exchange_loaded(result),
            AppEvent::SearchResult(_, result) => self.handle_search_result(result),
            AppEvent::TradeRequestSent(_, result) => self.handle_trade_request_sent(result),
            AppEvent::MyBooksLoaded(_, result) => self.handle_my_books_loaded(result),
            AppEvent::BookAdded(token, result) => self.handle_book_added(token, result),
            AppEvent::BookRemoved(token, result) => self.handle_book_removed(token, result),
            AppEvent::RequestsLoaded(_, seq, result) => self.handle_requests_loaded(seq, result),
            AppEvent::TransitionResult {
                token,
                id,
                action,
                result,
            } => self.handle_transition_result(token, id, action, result),
            AppEvent::ProfileLoaded(_, result) => self.handle_profile_loaded(result),
            AppEvent::ProfileSaved(_, result) => self.handle_profile_saved(result),
        }
    }
}

impl App {
    fn handle_session_loaded(&mut self, result: Result<Option<SessionUser>>) {
        let requested = {
            let mut state = self.state.write();
            state.session_loaded = true;
            match result {
                Ok(user) => {
                    tracing::info!(authenticated = user.is_some(), "Session bootstrapped");
                    state.session.update(user);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Session bootstrap failed");
                    state.banner = Some(Notice::from_error(&e));
                }
            }
            state.current_screen
        };
        self.navigate(requested);
    }

    fn handle_login_result(&mut self, result: Result<SessionUser>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");
        match result {
            Ok(user) => {
                {
                    let mut state = self.state.write();
                    state.session.update(Some(user));
                    state.banner = None;
                }
                self.navigate(Screen::Exchange);
            }
            Err(e) => {
                let mut state = self.state.write();
                state.login.busy = false;
                state.login.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!("Registration accepted");
                self.navigate(Screen::Login);
                self.state.write().login.notice = Some(Notice::info(REGISTERED));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration failed");
                let mut state = self.state.write();
                state.register.busy = false;
                state.register.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn handle_logged_out(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.state.write().session.update(None);
                self.navigate(Screen::Login);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logout failed");
                self.state.write().banner = Some(Notice::from_error(&e));
            }
        }
    }

    fn handle_exchange_loaded(&mut self, result: Result<ExchangeListing>) {
        let mut state = self.state.write();
        state.exchange.loading = false;
        match result {
            Ok(listing) => {
                tracing::info!(
                    own = listing.my_titles.len(),
                    candidates = listing.books.len(),
                    "Exchange listing loaded"
                );
                state.exchange.my_titles = listing.my_titles;
                state.exchange.my_cards = listing.my_cards;
                state.exchange.candidates = listing.books;
                state.exchange.offer_selection.clear();
            }
            Err(e) => state.exchange.notice = Some(Notice::from_error(&e)),
        }
    }

    fn handle_search_result(&mut self, result: Result<Vec<ListingCandidate>>) {
        let mut state = self.state.write();
        state.exchange.loading = false;
        match result {
            Ok(candidates) => {
                tracing::info!(results = candidates.len(), "Search answered");
                state.exchange.candidates = candidates;
                state.exchange.offer_selection.clear();
            }
            Err(e) => state.exchange.notice = Some(Notice::from_error(&e)),
        }
    }

    fn handle_trade_request_sent(&mut self, result: Result<()>) {
        let mut state = self.state.write();
        state.exchange.notice = Some(match result {
            Ok(()) => Notice::info(REQUEST_SENT),
            Err(e) => Notice::from_error(&e),
        });
    }

    fn handle_my_books_loaded(&mut self, result: Result<MyBooksResponse>) {
        let mut state = self.state.write();
        state.books.loading = false;
        match result {
            Ok(books) => state.books.cards = books.cards,
            Err(e) => state.books.notice = Some(Notice::from_error(&e)),
        }
    }

    fn handle_book_added(&mut self, token: ViewToken, result: Result<Vec<String>>) {
        match result {
            Ok(titles) => {
                tracing::info!(books = titles.len(), "Book added");
                self.state.write().books.new_title.clear();
                handlers::books::load(self.state.clone(), self.event_tx.clone(), token);
            }
            Err(e) => self.state.write().books.notice = Some(Notice::from_error(&e)),
        }
    }

    fn handle_book_removed(&mut self, token: ViewToken, result: Result<Vec<String>>) {
        match result {
            Ok(titles) => {
                tracing::info!(books = titles.len(), "Book removed");
                handlers::books::load(self.state.clone(), self.event_tx.clone(), token);
            }
            Err(e) => self.state.write().books.notice = Some(Notice::from_error(&e)),
        }
    }

    /// Answers to superseded reloads are dropped
    fn handle_requests_loaded(&mut self, seq: u64, result: Result<RequestLists>) {
        let mut state = self.state.write();
        if seq != state.requests.reload_seq {
            tracing::debug!(seq, latest = state.requests.reload_seq, "Dropping superseded requests reload");
            return;
        }
        state.requests.loading = false;
        if state.requests.settle_after.is_some_and(|after| seq >= after) {
            state.requests.busy = None;
            state.requests.settle_after = None;
        }
        match result {
            Ok(lists) => {
                tracing::info!(
                    incoming = lists.incoming.len(),
                    outgoing = lists.outgoing.len(),
                    "Requests loaded"
                );
                state.requests.incoming = lists.incoming;
                state.requests.outgoing = lists.outgoing;
            }
            Err(e) => state.requests.notice = Some(Notice::from_error(&e)),
        }
    }

    /// Success reloads both lists and keeps the busy marker until they arrive.
    /// Failure clears the marker and leaves the lists as they were.
    fn handle_transition_result(
        &mut self,
        token: ViewToken,
        id: String,
        action: TransitionAction,
        result: Result<()>,
    ) {
        match result {
            Ok(()) => {
                tracing::info!(id = %id, action = %action, "Transition accepted");
                let seq = handlers::requests::load(self.state.clone(), self.event_tx.clone(), token);
                self.state.write().requests.settle_after = Some(seq);
            }
            Err(e) => {
                tracing::warn!(id = %id, action = %action, error = %e, "Transition failed");
                let e = e.or_message(lifecycle::failure_label(action));
                let mut state = self.state.write();
                state.requests.busy = None;
                state.requests.settle_after = None;
                state.requests.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn handle_profile_loaded(&mut self, result: Result<UserProfile>) {
        let mut state = self.state.write();
        state.profile.loading = false;
        match result {
            Ok(user) => state.profile.user = Some(user),
            Err(e) => state.profile.notice = Some(Notice::from_error(&e)),
        }
    }

    /// Success adopts the returned record, not the staged form
    fn handle_profile_saved(&mut self, result: Result<UserProfile>) {
        let mut state = self.state.write();
        state.profile.busy = false;
        match result {
            Ok(user) => {
                tracing::info!("Profile saved");
                state.profile.form = ProfileForm::from_profile(&user);
                state.profile.user = Some(user);
                state.profile.editing = false;
                state.profile.notice = Some(Notice::info(PROFILE_SAVED));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile save failed");
                state.profile.notice = Some(Notice::from_error(&e));
            }
        }
    }
}
