//! # Profile Endpoints

use shared::{ProfileResponse, ProfileUpdate, UserProfile};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Current user's profile record.
    pub async fn get_profile(&self) -> Result<UserProfile> {
        let response: ProfileResponse = self.get("/profile").await?;
        Ok(response.user)
    }

    /// Apply a partial profile update and return the backend's canonical record.
    #[tracing::instrument(skip(self, update), fields(password_change = update.new_password.is_some() || update.current_password.is_some()))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        let response: ProfileResponse = self.patch("/profile", &update).await?;
        Ok(response.user)
    }
}
