//! # Trade Request Endpoints

use shared::{Empty, RequestLists, TransitionAction};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Incoming and outgoing trade requests.
    pub async fn get_requests(&self) -> Result<RequestLists> {
        let lists: RequestLists = self.get("/requests").await?;
        tracing::debug!(
            incoming = lists.incoming.len(),
            outgoing = lists.outgoing.len(),
            "Trade requests loaded"
        );
        Ok(lists)
    }

    /// `POST /requests/{id}/{accept|reject|cancel}`
    #[tracing::instrument(skip(self))]
    pub async fn transition_request(&self, id: &str, action: TransitionAction) -> Result<()> {
        let path = format!("/requests/{}/{}", id, action.as_str());
        let _: Empty = self.post_empty(&path).await?;
        tracing::info!("Trade request transition accepted by backend");
        Ok(())
    }
}
