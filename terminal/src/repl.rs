//! # Command Line Front End
//!
//! Parses one line of user input into a [`Command`] and applies it to the [`App`].
//!
//! Listings are addressed by the 1-based number shown on screen, requests by id.
//! `set` edits the register form on the Register screen and the staged profile on
//! the Profile screen.

use std::str::FromStr;

use shared::TransitionAction;

use crate::app::{App, ListKind, ProfileField, RegisterField, Screen};
use crate::core::error::{AppError, Result};

/// One parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Go(Screen),
    Refresh,
    Login { email: String, password: String },
    Register,
    Logout,
    Set { field: String, value: String },
    Book(String),
    Unbook(String),
    Search(String),
    Reset,
    /// 0-based listing index and the offered title
    Offer { index: usize, title: String },
    /// 0-based listing index
    Request(usize),
    Add(String),
    Remove(String),
    Transition { id: String, action: TransitionAction },
    Edit,
    Save,
    Discard,
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "go" => Command::Go(required(rest, "go <screen>")?.parse()?),
            "refresh" => Command::Refresh,
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(email), Some(password)) => Command::Login {
                        email: email.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err(usage("login <email> <password>")),
                }
            }
            "register" => Command::Register,
            "logout" => Command::Logout,
            "set" => {
                let (field, value) = required(rest, "set <field> <value>")?
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "book" => {
                let title = required(rest, "book <title>")?;
                match title.strip_prefix('-') {
                    Some(title) => Command::Unbook(title.trim().to_string()),
                    None => Command::Book(title.to_string()),
                }
            }
            "search" => Command::Search(rest.to_string()),
            "reset" => Command::Reset,
            "offer" => {
                let (n, title) = required(rest, "offer <n> <title>")?
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage("offer <n> <title>"))?;
                Command::Offer {
                    index: listing_index(n)?,
                    title: title.trim().to_string(),
                }
            }
            "request" => Command::Request(listing_index(required(rest, "request <n>")?)?),
            "add" => Command::Add(rest.to_string()),
            "remove" => Command::Remove(required(rest, "remove <title>")?.trim_end().to_string()),
            "accept" | "reject" | "cancel" => {
                let action = match word.to_lowercase().as_str() {
                    "accept" => TransitionAction::Accept,
                    "reject" => TransitionAction::Reject,
                    _ => TransitionAction::Cancel,
                };
                let id = required(rest, "accept|reject|cancel <id>")?;
                Command::Transition {
                    id: id.trim_end().to_string(),
                    action,
                }
            }
            "edit" => Command::Edit,
            "save" => Command::Save,
            "discard" => Command::Discard,
            "" => return Err(AppError::Validation("Type `help` for commands".to_string())),
            other => return Err(AppError::Validation(format!("Unknown command: {other}"))),
        };
        Ok(command)
    }
}

fn usage(text: &str) -> AppError {
    AppError::Validation(format!("Usage: {text}"))
}

fn required<'a>(rest: &'a str, text: &str) -> Result<&'a str> {
    if rest.trim().is_empty() {
        Err(usage(text))
    } else {
        Ok(rest)
    }
}

/// Convert a 1-based listing number to an index
fn listing_index(n: &str) -> Result<usize> {
    match n.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(AppError::Validation(format!("Not a listing number: {}", n.trim()))),
    }
}

/// Apply a command to the app.
///
/// Screen-specific commands issued on the wrong screen are refused.
pub fn execute(app: &mut App, command: Command) -> Result<Flow> {
    let screen = app.current_screen();
    let expect = |wanted: Screen| -> Result<()> {
        if screen == wanted {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Only on {}; `go {}` first",
                wanted.title(),
                wanted.command_name()
            )))
        }
    };

    match command {
        Command::Help => return Ok(Flow::ShowHelp),
        Command::Quit => return Ok(Flow::Quit),
        Command::Go(target) => {
            app.navigate(target);
        }
        Command::Refresh => app.handle_refresh(),
        Command::Login { email, password } => {
            expect(Screen::Login)?;
            app.handle_login_submit(email, password);
        }
        Command::Register => {
            expect(Screen::Register)?;
            app.handle_register_submit();
        }
        Command::Logout => app.handle_logout(),
        Command::Set { field, value } => match screen {
            Screen::Register => app.handle_register_field(field.parse::<RegisterField>()?, value),
            Screen::Profile => app.handle_profile_field(field.parse::<ProfileField>()?, value),
            _ => {
                return Err(AppError::Validation(
                    "`set` works on the Register and Profile screens".to_string(),
                ))
            }
        },
        Command::Book(title) => {
            expect(Screen::Register)?;
            app.handle_stage_book(title);
        }
        Command::Unbook(title) => {
            expect(Screen::Register)?;
            app.handle_unstage_book(title);
        }
        Command::Search(query) => {
            expect(Screen::Exchange)?;
            app.handle_search(query);
        }
        Command::Reset => {
            expect(Screen::Exchange)?;
            app.handle_reset_search();
        }
        Command::Offer { index, title } => {
            expect(Screen::Exchange)?;
            app.handle_offer_select(index, title);
        }
        Command::Request(index) => {
            expect(Screen::Exchange)?;
            app.handle_request_submit(index);
        }
        Command::Add(title) => {
            expect(Screen::MyBooks)?;
            app.handle_add_book(title);
        }
        Command::Remove(title) => {
            expect(Screen::MyBooks)?;
            app.handle_remove_book(title);
        }
        Command::Transition { id, action } => {
            expect(Screen::Requests)?;
            let list = match action {
                TransitionAction::Accept | TransitionAction::Reject => ListKind::Incoming,
                TransitionAction::Cancel => ListKind::Outgoing,
            };
            app.handle_transition(list, id, action);
        }
        Command::Edit => {
            expect(Screen::Profile)?;
            app.handle_edit_profile();
        }
        Command::Save => {
            expect(Screen::Profile)?;
            app.handle_save_profile();
        }
        Command::Discard => {
            expect(Screen::Profile)?;
            app.handle_discard_profile();
        }
    }
    Ok(Flow::Continue)
}
