//! # Request Card Widget
//!
//! One trade request: parties, status badge, offered ⇄ requested books and the
//! transition controls the lifecycle allows.

use std::fmt::{self, Write};

use shared::TradeRequest;

use crate::app::lifecycle::{controls_for, BusyTransition, ListKind};
use crate::utils::details::{decode_details, BookDetails};
use crate::utils::format::format_timestamp;

/// Decoded `(offered, requested)` books of a request.
///
/// A request without a details payload falls back to its plain title field.
pub fn card_books(request: &TradeRequest) -> (BookDetails, BookDetails) {
    let offered = match &request.offered_book_details {
        Some(details) => decode_details(Some(details)),
        None => BookDetails::titled(request.offered_book.clone()),
    };
    let requested = match &request.requested_book_details {
        Some(details) => decode_details(Some(details)),
        None => BookDetails::titled(request.requested_book.clone()),
    };
    (offered, requested)
}

pub fn render(
    out: &mut String,
    request: &TradeRequest,
    list: ListKind,
    busy: Option<&BusyTransition>,
) -> fmt::Result {
    let (offered, requested) = card_books(request);

    writeln!(
        out,
        "  #{}  From: {}  •  To: {}  [{}]",
        request.id, request.from_user, request.to_user, request.status
    )?;
    if let Some(at) = request.created_at() {
        writeln!(out, "      {}", format_timestamp(&at))?;
    }
    writeln!(out, "      Offered:   {}", offered.title)?;
    if !offered.author.is_empty() {
        writeln!(out, "                 Author: {}", offered.author)?;
    }
    writeln!(out, "        ⇄")?;
    writeln!(out, "      Requested: {}", requested.title)?;
    if !requested.author.is_empty() {
        writeln!(out, "                 Author: {}", requested.author)?;
    }

    let controls = controls_for(request, list, busy);
    if !controls.is_empty() {
        let rendered: Vec<String> = controls
            .iter()
            .map(|control| {
                if control.enabled {
                    format!("[{}]", control.label)
                } else {
                    format!("({})", control.label)
                }
            })
            .collect();
        writeln!(out, "      {}", rendered.join(" "))?;
    }
    Ok(())
}
