//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Instant;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    CreateTradeRequest, ExchangeListing, ListingCandidate, MyBooksResponse, ProfileUpdate,
    RegisterRequest, RequestLists, SessionUser, TransitionAction, UserProfile,
};

use super::envelope;
use crate::core::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for communicating with the backend API server.
///
/// The underlying `reqwest::Client` keeps a cookie store, so the session cookie set by
/// `POST /login` rides along on every later call without callers touching it.
/// Clones of the client share the same connection pool and cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .user_agent(format!("BookSwap/{} (Terminal)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// `GET` an enveloped payload
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.get(self.url(path)), "GET", path).await
    }

    /// `GET` with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.send(self.client.get(self.url(path)).query(query), "GET", path)
            .await
    }

    /// `POST` a JSON body
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.client.post(self.url(path)).json(body), "POST", path)
            .await
    }

    /// `POST` without a body (logout, request transitions)
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.post(self.url(path)), "POST", path).await
    }

    /// `PATCH` a JSON body
    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.client.patch(self.url(path)).json(body), "PATCH", path)
            .await
    }

    /// Send a request and return the raw status and body text.
    pub(crate) async fn send_raw(
        &self,
        request: RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<(reqwest::StatusCode, String)> {
        let start = Instant::now();
        tracing::debug!(method, endpoint = %path, "API call started");

        let response = request.send().await.map_err(|e| {
            tracing::error!(method, endpoint = %path, error = %e, "API network error");
            AppError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(method, endpoint = %path, error = %e, "API body read error");
            AppError::from(e)
        })?;

        tracing::info!(
            method,
            endpoint = %path,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "API call completed"
        );
        Ok((status, body))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<T> {
        let (status, body) = self.send_raw(request, method, path).await?;
        envelope::decode(status, &body).map_err(|e| {
            match &e {
                AppError::Rejected(message) => {
                    tracing::warn!(method, endpoint = %path, status = status.as_u16(), error = %message, "API call rejected");
                }
                other => {
                    tracing::error!(method, endpoint = %path, status = status.as_u16(), error = %other, "API response unusable");
                }
            }
            e
        })
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn me(&self) -> Result<Option<SessionUser>> {
        ApiClient::me(self).await
    }

    async fn login(&self, email: String, password: String) -> Result<SessionUser> {
        ApiClient::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<()> {
        ApiClient::register(self, request).await
    }

    async fn logout(&self) -> Result<()> {
        ApiClient::logout(self).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        ApiClient::get_profile(self).await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        ApiClient::update_profile(self, update).await
    }

    async fn get_exchange(&self) -> Result<ExchangeListing> {
        ApiClient::get_exchange(self).await
    }

    async fn search_exchange(&self, query: &str) -> Result<Vec<ListingCandidate>> {
        ApiClient::search_exchange(self, query).await
    }

    async fn send_trade_request(&self, request: CreateTradeRequest) -> Result<()> {
        ApiClient::send_trade_request(self, request).await
    }

    async fn my_books(&self) -> Result<MyBooksResponse> {
        ApiClient::my_books(self).await
    }

    async fn add_book(&self, title: String) -> Result<Vec<String>> {
        ApiClient::add_book(self, title).await
    }

    async fn remove_book(&self, title: String) -> Result<Vec<String>> {
        ApiClient::remove_book(self, title).await
    }

    async fn get_requests(&self) -> Result<RequestLists> {
        ApiClient::get_requests(self).await
    }

    async fn transition_request(&self, id: &str, action: TransitionAction) -> Result<()> {
        ApiClient::transition_request(self, id, action).await
    }
}
