//! # Formatting Utilities
//!
//! Display helpers specific to the terminal screens. Label truncation and similarity
//! percentages live in [`shared::utils`].
//!
//! ## Functions
//!
//! - [`or_dash`] - Render empty attributes as `-`
//! - [`avatar_url`] - Avatar reference with a generated initials fallback
//! - [`format_timestamp`] - Short UTC timestamp for request cards

use chrono::{DateTime, Utc};

/// Initials avatar service used when a profile has no avatar of its own
pub const AVATAR_FALLBACK_BASE: &str = "https://api.dicebear.com/8.x/initials/svg?seed=";

/// Render an empty attribute as `-`
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Avatar reference for a profile.
///
/// Uses the stored avatar when there is one, otherwise a generated initials image
/// seeded by the name (or the email when the name is empty).
///
/// # Examples
///
/// ```rust
/// use bookswap_terminal::utils::format::avatar_url;
///
/// assert_eq!(avatar_url("https://img/me.png", "Ana", "ana@example.com"), "https://img/me.png");
/// assert_eq!(
///     avatar_url("", "Ana Lima", "ana@example.com"),
///     "https://api.dicebear.com/8.x/initials/svg?seed=Ana%20Lima"
/// );
/// ```
pub fn avatar_url(avatar: &str, name: &str, email: &str) -> String {
    if !avatar.is_empty() {
        return avatar.to_string();
    }
    let seed = if name.is_empty() { email } else { name };
    format!("{}{}", AVATAR_FALLBACK_BASE, urlencoding::encode(seed))
}

/// Format a timestamp as `YYYY-MM-DD HH:MM UTC`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
