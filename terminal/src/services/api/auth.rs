//! # Authentication Endpoints
//!
//! Session bootstrap, login, registration and logout.

use shared::{Empty, LoginRequest, LoginResponse, MeResponse, RegisterRequest, SessionUser};

use super::client::ApiClient;
use super::envelope;
use crate::core::error::{AppError, Result};

impl ApiClient {
    /// Current session identity.
    ///
    /// An anonymous session answers `{"ok": false, "user": null}`; that is a valid
    /// answer (`None`), not a failure.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<Option<SessionUser>> {
        let (status, body) = self
            .send_raw(self.client.get(self.url("/me")), "GET", "/me")
            .await?;
        let value = envelope::parse_body(status, &body)?;
        envelope::ok_flag(status, &value)?;

        let me: MeResponse = serde_json::from_value(value)
            .map_err(|e| AppError::Transport(format!("unexpected response payload: {}", e)))?;
        tracing::debug!(authenticated = me.user.is_some(), "Session checked");
        Ok(me.user)
    }

    /// Login with email and password.
    ///
    /// On success the backend sets the session cookie, which the cookie store keeps.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: String, password: String) -> Result<SessionUser> {
        tracing::info!("Attempting login");
        let request = LoginRequest { email, password };
        let response: LoginResponse = self.post("/login", &request).await?;
        tracing::info!(name = %response.user.name, "Login successful");
        Ok(response.user)
    }

    /// Register a new account.
    #[tracing::instrument(skip(self, request), fields(email = %request.email, books = request.selected_books.len()))]
    pub async fn register(&self, request: RegisterRequest) -> Result<()> {
        let _: Empty = self.post("/register", &request).await?;
        tracing::info!("Registration successful");
        Ok(())
    }

    /// End the session.
    pub async fn logout(&self) -> Result<()> {
        let _: Empty = self.post_empty("/logout").await?;
        tracing::info!("Logged out");
        Ok(())
    }
}
