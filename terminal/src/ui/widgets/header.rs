//! # Header Widget
//!
//! Navigation bar with the signed-in user and the reachable screens.

use std::fmt::{self, Write};

use crate::app::{AppState, Screen};

/// Render the header line and a rule under it
pub fn render(out: &mut String, state: &AppState) -> fmt::Result {
    let tabs: Vec<String> = Screen::all()
        .iter()
        .filter(|screen| state.resolve_route(**screen) == **screen)
        .map(|screen| {
            if *screen == state.current_screen {
                format!("[{}]", screen.title())
            } else {
                screen.title().to_string()
            }
        })
        .collect();

    let who = match state.session.user() {
        Some(user) if !user.name.is_empty() => format!("{} <{}>", user.name, user.email),
        Some(user) => user.email.clone(),
        None => "not signed in".to_string(),
    };

    writeln!(out, "BookSwap | {} | {}", tabs.join("  "), who)?;
    writeln!(out, "{}", "=".repeat(60))
}
