//! # My Books Screen

use std::fmt::{self, Write};

use crate::app::MyBooksState;
use crate::ui::widgets::{book_card, notice};

pub fn render(out: &mut String, state: &MyBooksState) -> fmt::Result {
    writeln!(out, "My Books")?;
    writeln!(out)?;
    notice::render_opt(out, state.notice.as_ref())?;
    if state.loading {
        writeln!(out, "Loading...")?;
    } else if state.cards.is_empty() {
        writeln!(out, "  No books yet. `add <title>` to add one.")?;
    }
    for card in &state.cards {
        book_card::render_card(out, card, false)?;
    }
    Ok(())
}
