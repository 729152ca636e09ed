//! # Exchange Screen
//!
//! Own books on top, candidate listings below with the offer picked for each.

use std::fmt::{self, Write};

use crate::app::ExchangeState;
use crate::ui::widgets::{book_card, notice};

pub fn render(out: &mut String, state: &ExchangeState) -> fmt::Result {
    writeln!(out, "Book Exchange")?;
    if !state.query.trim().is_empty() {
        writeln!(out, "Search: \"{}\"", state.query)?;
    }
    writeln!(out)?;
    notice::render_opt(out, state.notice.as_ref())?;
    if state.loading {
        writeln!(out, "Loading...")?;
        writeln!(out)?;
    }

    writeln!(out, "Your Books ({})", state.my_cards.len())?;
    if state.my_cards.is_empty() {
        writeln!(out, "  You have no books yet.")?;
    }
    for card in &state.my_cards {
        book_card::render_card(out, card, true)?;
    }
    writeln!(out)?;

    writeln!(out, "Books from Other Users ({})", state.candidates.len())?;
    if state.candidates.is_empty() {
        writeln!(out, "  No matches yet. Try Reset or another search.")?;
    }
    for (index, candidate) in state.candidates.iter().enumerate() {
        book_card::render_candidate(out, index, candidate, state.selected_offer(index))?;
    }
    Ok(())
}
