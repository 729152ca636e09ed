//! # Application State Types
//!
//! All state-related types for the application, including screens, the session
//! context, per-screen view state and the forms behind them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use shared::{
    BookCard, ListingCandidate, ProfileUpdate, RegisterRequest, SessionUser, TradeRequest,
    UserProfile,
};

use crate::app::lifecycle::BusyTransition;
use crate::core::error::AppError;
use crate::core::service::ApiService;
use crate::utils::validation::{validate_required, ValidationResult};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Email + password login
    Login,
    /// Account creation with an initial book list
    Register,
    /// Own collection, candidate listings and search
    Exchange,
    /// Own collection management
    MyBooks,
    /// Incoming and outgoing trade requests
    Requests,
    /// Account attributes and password change
    Profile,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Login,
            Screen::Register,
            Screen::Exchange,
            Screen::MyBooks,
            Screen::Requests,
            Screen::Profile,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::Exchange => "Exchange",
            Screen::MyBooks => "My Books",
            Screen::Requests => "Requests",
            Screen::Profile => "Profile",
        }
    }

    /// Name accepted by `go <screen>`
    pub fn command_name(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::Exchange => "exchange",
            Screen::MyBooks => "books",
            Screen::Requests => "requests",
            Screen::Profile => "profile",
        }
    }

    /// Check if a screen requires an authenticated session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Register)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Screen {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Screen::all()
            .iter()
            .copied()
            .find(|screen| {
                screen.command_name() == wanted
                    || screen.title().to_lowercase().replace(' ', "") == wanted.replace(' ', "")
            })
            .ok_or_else(|| AppError::Validation(format!("Unknown screen: {}", s.trim())))
    }
}

/// Identifies one mount of a screen.
///
/// Every navigation bumps the generation. Async results carry the token they were
/// started under and are dropped when it no longer matches the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewToken {
    pub screen: Screen,
    pub generation: u64,
}

/// Process-wide current identity.
///
/// Lifecycle: anonymous → authenticated → anonymous. [`Session::update`] is the only
/// mutator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the current identity
    pub fn update(&mut self, user: Option<SessionUser>) {
        match (&self.user, &user) {
            (None, Some(u)) => tracing::info!(email = %u.email, "Session authenticated"),
            (Some(u), None) => tracing::info!(email = %u.email, "Session cleared"),
            _ => {}
        }
        self.user = user;
    }
}

/// Kind of inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Inline message shown under a form or list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Error notice for a failed call, transport failures get the retry hint
    pub fn from_error(error: &AppError) -> Self {
        Self::error(error.user_message())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub notice: Option<Notice>,
    pub busy: bool,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return ValidationResult::err("Email and password required");
        }
        ValidationResult::ok()
    }
}

/// Register form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    City,
    Address,
    Phone,
    Password,
}

impl FromStr for RegisterField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(RegisterField::Name),
            "email" => Ok(RegisterField::Email),
            "city" => Ok(RegisterField::City),
            "address" => Ok(RegisterField::Address),
            "phone" => Ok(RegisterField::Phone),
            "password" => Ok(RegisterField::Password),
            other => Err(AppError::Validation(format!("Unknown field: {other}"))),
        }
    }
}

/// Register form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub password: String,
    /// Initial collection, titles unique
    pub selected_books: Vec<String>,
    pub notice: Option<Notice>,
    pub busy: bool,
}

impl RegisterForm {
    pub fn set(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::City => self.city = value,
            RegisterField::Address => self.address = value,
            RegisterField::Phone => self.phone = value,
            RegisterField::Password => self.password = value,
        }
    }

    /// Stage a title for the initial collection. Returns false for blanks and duplicates.
    pub fn stage_book(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() || self.selected_books.iter().any(|t| t == title) {
            return false;
        }
        self.selected_books.push(title.to_string());
        true
    }

    pub fn unstage_book(&mut self, title: &str) -> bool {
        let before = self.selected_books.len();
        self.selected_books.retain(|t| t != title.trim());
        self.selected_books.len() != before
    }

    /// Every field is required; the email's shape is left to the backend
    pub fn validate(&self) -> ValidationResult {
        validate_required(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("City", self.city.as_str()),
            ("Address", self.address.as_str()),
            ("Phone", self.phone.as_str()),
            ("Password", self.password.as_str()),
        ])
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            city: self.city.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            selected_books: self.selected_books.clone(),
        }
    }
}

/// Exchange screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeState {
    pub my_titles: Vec<String>,
    pub my_cards: Vec<BookCard>,
    pub candidates: Vec<ListingCandidate>,
    pub query: String,
    /// Offered title picked per candidate index
    pub offer_selection: HashMap<usize, String>,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl ExchangeState {
    pub fn selected_offer(&self, index: usize) -> Option<&str> {
        self.offer_selection
            .get(&index)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// My Books screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyBooksState {
    pub cards: Vec<BookCard>,
    /// Title input, cleared once the add succeeds
    pub new_title: String,
    pub notice: Option<Notice>,
    pub loading: bool,
}

/// Requests screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestsState {
    pub incoming: Vec<TradeRequest>,
    pub outgoing: Vec<TradeRequest>,
    /// At most one transition in flight
    pub busy: Option<BusyTransition>,
    /// Sequence number of the latest list reload issued
    pub reload_seq: u64,
    /// Reload issued after the busy transition succeeded; the marker clears once it lands
    pub settle_after: Option<u64>,
    pub notice: Option<Notice>,
    pub loading: bool,
}

/// Editable profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    City,
    Address,
    Phone,
    AvatarUrl,
    CurrentPassword,
    NewPassword,
}

impl FromStr for ProfileField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ProfileField::Name),
            "city" => Ok(ProfileField::City),
            "address" => Ok(ProfileField::Address),
            "phone" => Ok(ProfileField::Phone),
            "avatar" | "avatar_url" => Ok(ProfileField::AvatarUrl),
            "current_password" | "current" => Ok(ProfileField::CurrentPassword),
            "new_password" | "new" => Ok(ProfileField::NewPassword),
            other => Err(AppError::Validation(format!("Unknown field: {other}"))),
        }
    }
}

/// Staged profile edits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub avatar_url: String,
    pub current_password: String,
    pub new_password: String,
}

impl ProfileForm {
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            city: user.city.clone(),
            address: user.address.clone(),
            phone: user.phone.clone(),
            avatar_url: user.avatar_url.clone(),
            current_password: String::new(),
            new_password: String::new(),
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::City => self.city = value,
            ProfileField::Address => self.address = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::AvatarUrl => self.avatar_url = value,
            ProfileField::CurrentPassword => self.current_password = value,
            ProfileField::NewPassword => self.new_password = value,
        }
    }

    /// Update payload. The password pair is sent only when either half is filled in;
    /// no password policy is checked here.
    pub fn to_update(&self) -> ProfileUpdate {
        let with_passwords = !self.current_password.is_empty() || !self.new_password.is_empty();
        ProfileUpdate {
            name: self.name.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            avatar_url: self.avatar_url.clone(),
            current_password: with_passwords.then(|| self.current_password.clone()),
            new_password: with_passwords.then(|| self.new_password.clone()),
        }
    }
}

/// Profile screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub user: Option<UserProfile>,
    pub editing: bool,
    pub form: ProfileForm,
    pub busy: bool,
    pub notice: Option<Notice>,
    pub loading: bool,
}

/// Main application state
pub struct AppState {
    pub session: Session,
    /// Set once the `/me` bootstrap has answered
    pub session_loaded: bool,
    pub current_screen: Screen,
    pub view: ViewToken,
    /// App-wide message (logout failures, bootstrap errors)
    pub banner: Option<Notice>,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub exchange: ExchangeState,
    pub books: MyBooksState,
    pub requests: RequestsState,
    pub profile: ProfileState,
    pub api_client: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>) -> Self {
        Self {
            session: Session::default(),
            session_loaded: false,
            current_screen: Screen::Login,
            view: ViewToken {
                screen: Screen::Login,
                generation: 0,
            },
            banner: None,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            exchange: ExchangeState::default(),
            books: MyBooksState::default(),
            requests: RequestsState::default(),
            profile: ProfileState::default(),
            api_client,
        }
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Screen that navigating to `screen` actually lands on
    pub fn resolve_route(&self, screen: Screen) -> Screen {
        match (screen.requires_session(), self.is_authenticated()) {
            (true, false) => Screen::Login,
            (false, true) => Screen::Exchange,
            _ => screen,
        }
    }

    /// Check whether an async result still belongs to the mounted view
    pub fn is_current(&self, token: ViewToken) -> bool {
        self.view == token
    }

    /// Discard all per-view state of `screen`
    pub fn reset_view(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.login = LoginForm::default(),
            Screen::Register => self.register = RegisterForm::default(),
            Screen::Exchange => self.exchange = ExchangeState::default(),
            Screen::MyBooks => self.books = MyBooksState::default(),
            Screen::Requests => self.requests = RequestsState::default(),
            Screen::Profile => self.profile = ProfileState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_from_str() {
        assert_eq!("books".parse::<Screen>().unwrap(), Screen::MyBooks);
        assert_eq!("My Books".parse::<Screen>().unwrap(), Screen::MyBooks);
        assert_eq!(" Requests ".parse::<Screen>().unwrap(), Screen::Requests);
        assert!("wallet".parse::<Screen>().is_err());
    }

    #[test]
    fn test_session_update_is_the_only_mutator() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        session.update(Some(SessionUser {
            email: "a@x.io".to_string(),
            name: "Ann".to_string(),
        }));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@x.io"));
        session.update(None);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_register_staging_deduplicates() {
        let mut form = RegisterForm::default();
        assert!(form.stage_book(" Dune "));
        assert!(!form.stage_book("Dune"));
        assert!(!form.stage_book("   "));
        assert!(form.stage_book("Emma"));
        assert_eq!(form.selected_books, vec!["Dune", "Emma"]);
        assert!(form.unstage_book("Dune"));
        assert_eq!(form.selected_books, vec!["Emma"]);
    }

    #[test]
    fn test_register_requires_every_field() {
        let mut form = RegisterForm::default();
        form.set(RegisterField::Name, "Ann".into());
        form.set(RegisterField::Email, "ann@example.com".into());
        assert!(!form.validate().is_valid);

        form.set(RegisterField::City, "Oslo".into());
        form.set(RegisterField::Address, "Main St 1".into());
        form.set(RegisterField::Phone, "555".into());
        form.set(RegisterField::Password, "pw".into());
        assert!(form.validate().is_valid);
    }

    #[test]
    fn test_register_leaves_email_shape_to_backend() {
        let mut form = RegisterForm::default();
        for (field, value) in [
            (RegisterField::Name, "Ann"),
            (RegisterField::Email, "a@b@c"),
            (RegisterField::City, "Oslo"),
            (RegisterField::Address, "Main St 1"),
            (RegisterField::Phone, "555"),
            (RegisterField::Password, "pw"),
        ] {
            form.set(field, value.into());
        }
        assert!(form.validate().is_valid);
    }

    #[test]
    fn test_profile_update_omits_untouched_passwords() {
        let user = UserProfile {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            city: "Oslo".into(),
            ..Default::default()
        };
        let mut form = ProfileForm::from_profile(&user);
        form.set(ProfileField::City, "Bergen".into());

        let update = form.to_update();
        assert_eq!(update.city, "Bergen");
        assert_eq!(update.current_password, None);
        assert_eq!(update.new_password, None);
    }

    #[test]
    fn test_profile_update_passes_half_password_pair_through() {
        let mut form = ProfileForm::default();
        form.set(ProfileField::NewPassword, "secret".into());
        let update = form.to_update();
        assert_eq!(update.current_password.as_deref(), Some(""));
        assert_eq!(update.new_password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_exchange_selected_offer_ignores_blank() {
        let mut state = ExchangeState::default();
        state.offer_selection.insert(0, String::new());
        state.offer_selection.insert(1, "Emma".into());
        assert_eq!(state.selected_offer(0), None);
        assert_eq!(state.selected_offer(1), Some("Emma"));
        assert_eq!(state.selected_offer(2), None);
    }
}
