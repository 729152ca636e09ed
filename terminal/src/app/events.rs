//! # Application Events
//!
//! Event types for async task communication between background tasks and the main loop.
//!
//! View-scoped results carry the [`ViewToken`] of the mount that started them, so a
//! response arriving after the user navigated away can be dropped unapplied.

use shared::{
    ExchangeListing, ListingCandidate, MyBooksResponse, RequestLists, SessionUser,
    TransitionAction, UserProfile,
};

use crate::app::state::ViewToken;
use crate::core::error::Result;

/// Async task results sent to the main loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `/me` bootstrap answered
    SessionLoaded(Result<Option<SessionUser>>),
    /// Login completed
    LoginResult(Result<SessionUser>),
    /// Registration completed
    RegisterResult(Result<()>),
    /// Logout completed
    LoggedOut(Result<()>),
    /// Default exchange listing loaded
    ExchangeLoaded(ViewToken, Result<ExchangeListing>),
    /// Keyword search answered
    SearchResult(ViewToken, Result<Vec<ListingCandidate>>),
    /// Trade request submitted
    TradeRequestSent(ViewToken, Result<()>),
    /// Own collection loaded
    MyBooksLoaded(ViewToken, Result<MyBooksResponse>),
    /// Title added to own collection
    BookAdded(ViewToken, Result<Vec<String>>),
    /// Title removed from own collection
    BookRemoved(ViewToken, Result<Vec<String>>),
    /// Incoming and outgoing lists loaded, tagged with the reload sequence number
    RequestsLoaded(ViewToken, u64, Result<RequestLists>),
    /// Accept/reject/cancel answered
    TransitionResult {
        token: ViewToken,
        id: String,
        action: TransitionAction,
        result: Result<()>,
    },
    /// Profile loaded
    ProfileLoaded(ViewToken, Result<UserProfile>),
    /// Profile save answered
    ProfileSaved(ViewToken, Result<UserProfile>),
}

impl AppEvent {
    /// Mount the event belongs to, `None` for app-wide events
    pub fn view_token(&self) -> Option<ViewToken> {
        match self {
            AppEvent::SessionLoaded(_)
            | AppEvent::LoginResult(_)
            | AppEvent::RegisterResult(_)
            | AppEvent::LoggedOut(_) => None,
            AppEvent::ExchangeLoaded(token, _)
            | AppEvent::SearchResult(token, _)
            | AppEvent::TradeRequestSent(token, _)
            | AppEvent::MyBooksLoaded(token, _)
            | AppEvent::BookAdded(token, _)
            | AppEvent::BookRemoved(token, _)
            | AppEvent::RequestsLoaded(token, ..)
            | AppEvent::TransitionResult { token, .. }
            | AppEvent::ProfileLoaded(token, _)
            | AppEvent::ProfileSaved(token, _) => Some(*token),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::SessionLoaded(_) => "SessionLoaded",
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::RegisterResult(_) => "RegisterResult",
            AppEvent::LoggedOut(_) => "LoggedOut",
            AppEvent::ExchangeLoaded(..) => "ExchangeLoaded",
            AppEvent::SearchResult(..) => "SearchResult",
            AppEvent::TradeRequestSent(..) => "TradeRequestSent",
            AppEvent::MyBooksLoaded(..) => "MyBooksLoaded",
            AppEvent::BookAdded(..) => "BookAdded",
            AppEvent::BookRemoved(..) => "BookRemoved",
            AppEvent::RequestsLoaded(..) => "RequestsLoaded",
            AppEvent::TransitionResult { .. } => "TransitionResult",
            AppEvent::ProfileLoaded(..) => "ProfileLoaded",
            AppEvent::ProfileSaved(..) => "ProfileSaved",
        }
    }
}
