//! # Own Collection Endpoints

use shared::{BookTitlesResponse, MyBooksResponse, TitleRequest};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Own collection as display cards.
    pub async fn my_books(&self) -> Result<MyBooksResponse> {
        self.get("/books/me").await
    }

    /// Add a title; returns the collection's titles afterwards.
    #[tracing::instrument(skip(self))]
    pub async fn add_book(&self, title: String) -> Result<Vec<String>> {
        let response: BookTitlesResponse = self.post("/books/me/add", &TitleRequest { title }).await?;
        Ok(response.books)
    }

    /// Remove a title; returns the collection's titles afterwards.
    #[tracing::instrument(skip(self))]
    pub async fn remove_book(&self, title: String) -> Result<Vec<String>> {
        let response: BookTitlesResponse = self
            .post("/books/me/remove", &TitleRequest { title })
            .await?;
        Ok(response.books)
    }
}
