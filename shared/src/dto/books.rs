use serde::{Deserialize, Serialize};

/// A book in a user's collection.
///
/// Titles are unique within one owner's collection and act as the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Cover image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl BookCard {
    /// Author, if the backend knows a non-empty one
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// Genre, if the backend knows a non-empty one
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

/// Payload of `GET /books/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MyBooksResponse {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub cards: Vec<BookCard>,
}

/// Body of `POST /books/me/add` and `POST /books/me/remove`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleRequest {
    pub title: String,
}

/// Payload of add/remove: the collection's titles after the change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookTitlesResponse {
    #[serde(default)]
    pub books: Vec<String>,
}
