//! # Notice Widget

use std::fmt::{self, Write};

use crate::app::Notice;

pub fn render(out: &mut String, notice: &Notice) -> fmt::Result {
    let marker = if notice.is_error() { '!' } else { '>' };
    writeln!(out, "{} {}", marker, notice.text)
}

/// Render an optional notice followed by a blank line
pub fn render_opt(out: &mut String, notice: Option<&Notice>) -> fmt::Result {
    if let Some(notice) = notice {
        render(out, notice)?;
        writeln!(out)?;
    }
    Ok(())
}
