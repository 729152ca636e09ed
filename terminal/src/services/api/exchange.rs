//! # Exchange Endpoints
//!
//! Listing candidates, keyword search and trade request creation.

use shared::{CreateTradeRequest, Empty, ExchangeListing, ListingCandidate, SearchResponse};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Own collection plus candidates ranked by similarity.
    pub async fn get_exchange(&self) -> Result<ExchangeListing> {
        let listing: ExchangeListing = self.get("/exchange").await?;
        tracing::debug!(
            my_titles = listing.my_titles.len(),
            candidates = listing.books.len(),
            "Exchange listing loaded"
        );
        Ok(listing)
    }

    /// Keyword search over candidates. The query is sent exactly as given.
    #[tracing::instrument(skip(self))]
    pub async fn search_exchange(&self, query: &str) -> Result<Vec<ListingCandidate>> {
        let response: SearchResponse = self
            .get_with_query("/exchange/search", &[("q", query)])
            .await?;
        tracing::debug!(results = response.books.len(), "Search completed");
        Ok(response.books)
    }

    /// Create a trade request offering one of the user's books for a candidate.
    #[tracing::instrument(skip(self, request), fields(requested = %request.requested_book, owner = %request.owner_email, offered = %request.offered_book))]
    pub async fn send_trade_request(&self, request: CreateTradeRequest) -> Result<()> {
        let _: Empty = self.post("/exchange/request", &request).await?;
        tracing::info!("Trade request sent");
        Ok(())
    }
}
