//! # Requests Screen
//!
//! Incoming and outgoing columns of request cards.

use std::fmt::{self, Write};

use shared::TradeRequest;

use crate::app::{ListKind, RequestsState};
use crate::ui::widgets::{notice, request_card};

pub fn render(out: &mut String, state: &RequestsState) -> fmt::Result {
    writeln!(out, "Requests")?;
    writeln!(out)?;
    notice::render_opt(out, state.notice.as_ref())?;
    if state.loading {
        writeln!(out, "Loading...")?;
        writeln!(out)?;
    }
    render_column(out, state, ListKind::Incoming, &state.incoming)?;
    writeln!(out)?;
    render_column(out, state, ListKind::Outgoing, &state.outgoing)
}

fn render_column(
    out: &mut String,
    state: &RequestsState,
    list: ListKind,
    requests: &[TradeRequest],
) -> fmt::Result {
    writeln!(out, "{}", list.title())?;
    if requests.is_empty() {
        return writeln!(out, "  None");
    }
    for request in requests {
        request_card::render(out, request, list, state.busy.as_ref())?;
    }
    Ok(())
}
