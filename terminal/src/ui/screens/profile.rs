//! # Profile Screen
//!
//! Read-only card, or the edit form while editing.

use std::fmt::{self, Write};

use crate::app::{ProfileForm, ProfileState};
use crate::ui::widgets::notice;
use crate::utils::format::{avatar_url, or_dash};

pub fn render(out: &mut String, state: &ProfileState) -> fmt::Result {
    writeln!(out, "Profile")?;
    writeln!(out)?;

    let Some(user) = &state.user else {
        if state.loading {
            writeln!(out, "Loading...")?;
        }
        return notice::render_opt(out, state.notice.as_ref());
    };

    writeln!(out, "  Avatar:  {}", avatar_url(&user.avatar_url, &user.name, &user.email))?;
    writeln!(out, "  Name:    {}", or_dash(&user.name))?;
    writeln!(out, "  Email:   {}", or_dash(&user.email))?;
    writeln!(out, "  City:    {}", or_dash(&user.city))?;
    writeln!(out, "  Address: {}", or_dash(&user.address))?;
    writeln!(out, "  Phone:   {}", or_dash(&user.phone))?;

    if state.editing {
        writeln!(out)?;
        render_form(out, &state.form)?;
        if state.busy {
            writeln!(out, "Saving...")?;
        }
    }

    if let Some(message) = &state.notice {
        writeln!(out)?;
        notice::render(out, message)?;
    }
    Ok(())
}

fn render_form(out: &mut String, form: &ProfileForm) -> fmt::Result {
    writeln!(out, "Editing (`save` or `discard`)")?;
    writeln!(out, "  name:    {}", form.name)?;
    writeln!(out, "  city:    {}", form.city)?;
    writeln!(out, "  address: {}", form.address)?;
    writeln!(out, "  phone:   {}", form.phone)?;
    writeln!(out, "  avatar:  {}", form.avatar_url)?;
    writeln!(out, "  Change password (optional)")?;
    writeln!(out, "  current: {}", "*".repeat(form.current_password.chars().count()))?;
    writeln!(out, "  new:     {}", "*".repeat(form.new_password.chars().count()))
}
