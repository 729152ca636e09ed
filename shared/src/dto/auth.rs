use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request.
///
/// `selected_books` seeds the new account's collection with book titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub password: String,
    pub selected_books: Vec<String>,
}

/// Identity held by the backend session (`/me`, `/login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Payload of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// Payload of `GET /me`; `user` is null while anonymous
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Payload-less success (`{"ok": true}`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}
