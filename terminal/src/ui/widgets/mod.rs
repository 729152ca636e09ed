//! # Reusable Text Widgets
//!
//! Common pieces used across screens.

pub mod book_card;
pub mod header;
pub mod notice;
pub mod request_card;
