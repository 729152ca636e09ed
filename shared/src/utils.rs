//! # Shared Utility Functions
//!
//! Display helpers used by every client screen.
//!
//! ## Label Formatting
//!
//! - [`truncate_label`] - Shorten a label to a maximum length with an ellipsis
//! - [`short_label`] - [`truncate_label`] with the default 30-character limit
//!
//! ## Score Formatting
//!
//! - [`format_similarity`] - Render a 0.0–1.0 similarity score as a percentage
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_similarity, short_label};
//!
//! assert_eq!(format_similarity(0.8123), "81.2%");
//! assert_eq!(short_label("Dune"), "Dune");
//! ```

/// Default maximum length of titles and genres in lists and pickers
pub const LABEL_MAX_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// Shorten `label` to at most `max_chars` characters.
///
/// Labels longer than `max_chars` keep their first `max_chars - 3` characters
/// followed by `...`. Counting is done in characters, not bytes, so multi-byte
/// titles never split inside a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_label;
///
/// assert_eq!(truncate_label("The Hitchhiker's Guide", 10), "The Hit...");
/// assert_eq!(truncate_label("Emma", 10), "Emma");
/// ```
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut short: String = label.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Shorten a label with the default [`LABEL_MAX_CHARS`] limit.
pub fn short_label(label: &str) -> String {
    truncate_label(label, LABEL_MAX_CHARS)
}

/// Format a similarity score (0.0–1.0) as a percentage with one decimal.
///
/// Non-finite scores render as `0.0%`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_similarity;
///
/// assert_eq!(format_similarity(1.0), "100.0%");
/// assert_eq!(format_similarity(0.0), "0.0%");
/// ```
pub fn format_similarity(score: f64) -> String {
    let score = if score.is_finite() { score } else { 0.0 };
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        let genre = "Science Fiction, Space Opera, Adventure";
        let short = short_label(genre);
        assert_eq!(short, "Science Fiction, Space Oper...");
        assert_eq!(short.chars().count(), 30);
    }

    #[test]
    fn test_truncate_label_at_limit_is_untouched() {
        let exact = "a".repeat(30);
        assert_eq!(short_label(&exact), exact);
    }

    #[test]
    fn test_truncate_label_multibyte() {
        assert_eq!(truncate_label("Les Misérables et Notre-Dame", 10), "Les Mis...");
        assert_eq!(truncate_label("Éàüöîéàüöîé", 10), "Éàüöîéà...");
    }

    #[test]
    fn test_format_similarity() {
        assert_eq!(format_similarity(0.8123), "81.2%");
        assert_eq!(format_similarity(0.0), "0.0%");
        assert_eq!(format_similarity(f64::NAN), "0.0%");
    }
}
