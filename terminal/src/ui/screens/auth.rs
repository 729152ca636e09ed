//! # Auth Screens
//!
//! Login and register forms.

use std::fmt::{self, Write};

use crate::app::{LoginForm, RegisterForm};
use crate::ui::widgets::notice;

pub fn render_login(out: &mut String, form: &LoginForm) -> fmt::Result {
    writeln!(out, "Login")?;
    writeln!(out)?;
    notice::render_opt(out, form.notice.as_ref())?;
    writeln!(out, "  Email:    {}", form.email)?;
    writeln!(out, "  Password: {}", "*".repeat(form.password.chars().count()))?;
    writeln!(out)?;
    writeln!(out, "New here? `go register`")
}

pub fn render_register(out: &mut String, form: &RegisterForm) -> fmt::Result {
    writeln!(out, "Register")?;
    writeln!(out)?;
    notice::render_opt(out, form.notice.as_ref())?;
    writeln!(out, "  Name:     {}", form.name)?;
    writeln!(out, "  Email:    {}", form.email)?;
    writeln!(out, "  City:     {}", form.city)?;
    writeln!(out, "  Address:  {}", form.address)?;
    writeln!(out, "  Phone:    {}", form.phone)?;
    writeln!(out, "  Password: {}", "*".repeat(form.password.chars().count()))?;
    writeln!(out)?;
    if form.selected_books.is_empty() {
        writeln!(out, "  Books: none staged")?;
    } else {
        writeln!(out, "  Books:")?;
        for title in &form.selected_books {
            writeln!(out, "    - {title}")?;
        }
    }
    if form.busy {
        writeln!(out)?;
        writeln!(out, "Registering...")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_masks_password() {
        let form = LoginForm {
            email: "ann@example.com".into(),
            password: "secret".into(),
            ..Default::default()
        };
        let mut out = String::new();
        render_login(&mut out, &form).unwrap();
        assert!(out.contains("******"));
        assert!(!out.contains("secret"));
    }
}
