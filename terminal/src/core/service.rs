//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    CreateTradeRequest, ExchangeListing, ListingCandidate, MyBooksResponse, ProfileUpdate,
    RegisterRequest, RequestLists, SessionUser, TransitionAction, UserProfile,
};

use crate::core::error::Result;

/// Trait for backend API operations
///
/// Every screen talks to the backend through this trait. The session credential is
/// ambient: implementations attach it to every call, callers never pass it.
///
/// Application-level failures come back as [`crate::core::AppError::Rejected`],
/// transport failures as [`crate::core::AppError::Transport`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Current session identity, `None` while anonymous
    async fn me(&self) -> Result<Option<SessionUser>>;

    /// Log in and establish the session
    async fn login(&self, email: String, password: String) -> Result<SessionUser>;

    /// Create an account
    async fn register(&self, request: RegisterRequest) -> Result<()>;

    /// End the session
    async fn logout(&self) -> Result<()>;

    /// Current user's profile record
    async fn get_profile(&self) -> Result<UserProfile>;

    /// Apply a profile update, returning the backend's canonical record
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile>;

    /// Own collection plus ranked listing candidates
    async fn get_exchange(&self) -> Result<ExchangeListing>;

    /// Keyword search over listing candidates
    async fn search_exchange(&self, query: &str) -> Result<Vec<ListingCandidate>>;

    /// Create a trade request
    async fn send_trade_request(&self, request: CreateTradeRequest) -> Result<()>;

    /// Own collection
    async fn my_books(&self) -> Result<MyBooksResponse>;

    /// Add a title to the own collection, returning the resulting titles
    async fn add_book(&self, title: String) -> Result<Vec<String>>;

    /// Remove a title from the own collection, returning the resulting titles
    async fn remove_book(&self, title: String) -> Result<Vec<String>>;

    /// Incoming and outgoing trade requests
    async fn get_requests(&self) -> Result<RequestLists>;

    /// Accept, reject or cancel a trade request
    async fn transition_request(&self, id: &str, action: TransitionAction) -> Result<()>;
}
