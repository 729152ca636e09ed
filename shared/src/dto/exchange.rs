use serde::{Deserialize, Serialize};

use super::books::BookCard;

/// A book from another user's collection, surfaced by the listing or a search.
///
/// Candidates are transient: they are recomputed by the backend for every
/// listing or search and never persisted client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingCandidate {
    #[serde(default)]
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub user_city: String,
    pub book_title: String,
    #[serde(default)]
    pub image_url: String,
    /// Similarity to the viewer's collection, 0.0 to 1.0. Search results carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl ListingCandidate {
    /// Similarity score, treating a missing score as zero
    pub fn similarity(&self) -> f64 {
        self.similarity.unwrap_or(0.0)
    }

    /// Owner display, e.g. `Alice (Lyon)`; the city is omitted when unknown
    pub fn owner_label(&self) -> String {
        if self.user_city.is_empty() {
            self.user_name.clone()
        } else {
            format!("{} ({})", self.user_name, self.user_city)
        }
    }
}

/// Payload of `GET /exchange`: own collection plus ranked candidates
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExchangeListing {
    #[serde(default)]
    pub my_titles: Vec<String>,
    #[serde(default)]
    pub my_cards: Vec<BookCard>,
    #[serde(default)]
    pub books: Vec<ListingCandidate>,
}

/// Payload of `GET /exchange/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub books: Vec<ListingCandidate>,
}

/// Body of `POST /exchange/request`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTradeRequest {
    /// Title of the book the owner has
    pub requested_book: String,
    pub owner_email: String,
    /// Title of the book the requester offers in return
    pub offered_book: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_without_similarity_defaults_to_zero() {
        let candidate: ListingCandidate = serde_json::from_value(serde_json::json!({
            "user_name": "Alice",
            "user_email": "alice@example.com",
            "user_city": "",
            "book_title": "Dune",
            "image_url": "default_image_url.jpg"
        }))
        .unwrap();

        assert_eq!(candidate.similarity, None);
        assert_eq!(candidate.similarity(), 0.0);
    }

    #[test]
    fn test_owner_label() {
        let mut candidate = ListingCandidate {
            user_name: "Alice".to_string(),
            user_city: "Lyon".to_string(),
            ..Default::default()
        };
        assert_eq!(candidate.owner_label(), "Alice (Lyon)");

        candidate.user_city.clear();
        assert_eq!(candidate.owner_label(), "Alice");
    }

    #[test]
    fn test_listing_tolerates_missing_lists() {
        let listing: ExchangeListing = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(listing.my_titles.is_empty());
        assert!(listing.books.is_empty());
    }
}
