//! # Book Card Widget
//!
//! One book of a collection or one listing candidate.

use std::fmt::{self, Write};

use shared::{format_similarity, short_label, BookCard, ListingCandidate};

/// Own-collection card. `truncate_genre` shortens long genres to the label limit.
pub fn render_card(out: &mut String, card: &BookCard, truncate_genre: bool) -> fmt::Result {
    writeln!(out, "  * {}", card.title)?;
    if let Some(author) = card.author() {
        writeln!(out, "      Author: {author}")?;
    }
    if let Some(genre) = card.genre() {
        let genre = if truncate_genre {
            short_label(genre)
        } else {
            genre.to_string()
        };
        writeln!(out, "      Genre: {genre}")?;
    }
    Ok(())
}

/// Candidate card with its position, owner, similarity and the picked offer
pub fn render_candidate(
    out: &mut String,
    index: usize,
    candidate: &ListingCandidate,
    offer: Option<&str>,
) -> fmt::Result {
    writeln!(out, "  {:>2}. {}", index + 1, candidate.book_title)?;
    writeln!(out, "      Owner: {}", candidate.owner_label())?;
    writeln!(
        out,
        "      Similarity {}",
        format_similarity(candidate.similarity())
    )?;
    match offer {
        Some(title) => writeln!(out, "      Offering: {}", short_label(title)),
        None => writeln!(out, "      Offering: (select your book)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_truncates_long_genre() {
        let card = BookCard {
            title: "Dune".into(),
            author: Some("Frank Herbert".into()),
            genre: Some("Science Fiction, Space Opera, Adventure".into()),
            img: None,
        };
        let mut out = String::new();
        render_card(&mut out, &card, true).unwrap();
        assert!(out.contains("Author: Frank Herbert"));
        assert!(out.contains("Genre: Science Fiction, Space Oper..."));
    }

    #[test]
    fn test_candidate_shows_owner_and_similarity() {
        let candidate = ListingCandidate {
            user_name: "Bob".into(),
            user_email: "bob@example.com".into(),
            user_city: "Oslo".into(),
            book_title: "Dune".into(),
            image_url: String::new(),
            similarity: Some(0.8123),
        };
        let mut out = String::new();
        render_candidate(&mut out, 0, &candidate, None).unwrap();
        assert!(out.contains(" 1. Dune"));
        assert!(out.contains("Owner: Bob (Oslo)"));
        assert!(out.contains("Similarity 81.2%"));
        assert!(out.contains("(select your book)"));
    }
}
