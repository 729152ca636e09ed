//! # Text Rendering
//!
//! Renders the mounted screen as plain text for the interactive front end.
//!
//! Rendering is a pure function of an [`AppState`] snapshot: it takes a read lock,
//! writes into a `String` and releases the lock before anything is printed.

pub mod screens;
pub mod widgets;

use std::fmt::{self, Write};

use crate::app::{App, AppState, Screen};

/// Render the current screen of `app`
pub fn render(app: &App) -> String {
    let state = app.state.read();
    render_state(&state)
}

/// Render the current screen from a state snapshot
pub fn render_state(state: &AppState) -> String {
    let mut out = String::new();
    if let Err(e) = write_screen(&mut out, state) {
        tracing::error!(error = %e, "Screen rendering failed");
    }
    out
}

fn write_screen(out: &mut String, state: &AppState) -> fmt::Result {
    widgets::header::render(out, state)?;
    if let Some(banner) = &state.banner {
        widgets::notice::render(out, banner)?;
    }
    if !state.session_loaded {
        return writeln!(out, "Checking session...");
    }

    match state.current_screen {
        Screen::Login => screens::auth::render_login(out, &state.login),
        Screen::Register => screens::auth::render_register(out, &state.register),
        Screen::Exchange => screens::exchange::render(out, &state.exchange),
        Screen::MyBooks => screens::my_books::render(out, &state.books),
        Screen::Requests => screens::requests::render(out, &state.requests),
        Screen::Profile => screens::profile::render(out, &state.profile),
    }
}

/// Command reference shown by `help`
pub fn help_text(screen: Screen) -> String {
    let mut out = String::from(
        "Commands:\n  \
         help                         show this help\n  \
         quit                         exit\n  \
         go <screen>                  login | register | exchange | books | requests | profile\n  \
         refresh                      reload the current screen\n  \
         logout                       end the session\n",
    );
    let screen_help = match screen {
        Screen::Login => "  login <email> <password>     log in\n",
        Screen::Register => {
            "  set <field> <value>          name | email | city | address | phone | password\n  \
             book <title>                 stage a book for your collection\n  \
             book -<title>                unstage a book\n  \
             register                     create the account\n"
        }
        Screen::Exchange => {
            "  search [query]               search listings (blank reloads all)\n  \
             reset                        clear the search\n  \
             offer <n> <your title>       pick the book you offer for listing n\n  \
             request <n>                  send a trade request for listing n\n"
        }
        Screen::MyBooks => {
            "  add <title>                  add a book\n  \
             remove <title>               remove a book\n"
        }
        Screen::Requests => {
            "  accept <id>                  accept an incoming request\n  \
             reject <id>                  reject an incoming request\n  \
             cancel <id>                  cancel an outgoing request\n"
        }
        Screen::Profile => {
            "  edit                         start editing\n  \
             set <field> <value>          name | city | address | phone | avatar | current | new\n  \
             save                         save changes\n  \
             discard                      leave edit mode without saving\n"
        }
    };
    out.push_str(screen_help);
    out
}
