//! # Screen Modules
//!
//! Each screen module renders one [`Screen`](crate::app::Screen) from its slice of
//! [`AppState`](crate::app::AppState).
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(out: &mut String, state: &ExchangeState) -> fmt::Result {
//!     // read the view state, write lines
//! }
//! ```
//!
//! Screens never act. Commands go through the `App::handle_*` methods.

pub mod auth;
pub mod exchange;
pub mod my_books;
pub mod profile;
pub mod requests;
