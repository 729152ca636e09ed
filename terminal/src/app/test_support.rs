//! In-memory [`ApiService`] for driving the app in tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    BookCard, CreateTradeRequest, ExchangeListing, ListingCandidate, MyBooksResponse,
    ProfileUpdate, RegisterRequest, RequestLists, RequestStatus, SessionUser, TradeRequest,
    TransitionAction, UserProfile,
};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Canned answers plus a log of every call made
pub(crate) struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub me: Mutex<Result<Option<SessionUser>>>,
    pub login: Mutex<Result<SessionUser>>,
    pub register: Mutex<Result<()>>,
    pub logout: Mutex<Result<()>>,
    pub exchange: Mutex<Result<ExchangeListing>>,
    pub search: Mutex<Result<Vec<ListingCandidate>>>,
    pub trade: Mutex<Result<()>>,
    pub books: Mutex<Result<MyBooksResponse>>,
    pub book_change: Mutex<Result<Vec<String>>>,
    pub requests: Mutex<Result<RequestLists>>,
    pub transition: Mutex<Result<()>>,
    pub profile: Mutex<Result<UserProfile>>,
    pub profile_saved: Mutex<Result<UserProfile>>,
    pub last_update: Mutex<Option<ProfileUpdate>>,
    pub last_trade: Mutex<Option<CreateTradeRequest>>,
}

pub(crate) fn user() -> SessionUser {
    SessionUser {
        email: "ann@example.com".to_string(),
        name: "Ann".to_string(),
    }
}

pub(crate) fn candidate(title: &str, owner: &str) -> ListingCandidate {
    ListingCandidate {
        user_name: owner.to_string(),
        user_email: format!("{}@example.com", owner.to_lowercase()),
        user_city: "Oslo".to_string(),
        book_title: title.to_string(),
        image_url: String::new(),
        similarity: Some(0.5),
    }
}

pub(crate) fn trade(id: &str, status: RequestStatus) -> TradeRequest {
    TradeRequest {
        id: id.to_string(),
        from_user: "bob@example.com".to_string(),
        to_user: "ann@example.com".to_string(),
        requested_book: "Dune".to_string(),
        offered_book: "Emma".to_string(),
        status,
        requested_book_details: None,
        offered_book_details: None,
        timestamp: None,
    }
}

pub(crate) fn profile() -> UserProfile {
    UserProfile {
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        city: "Oslo".to_string(),
        address: "Main St 1".to_string(),
        phone: "555".to_string(),
        avatar_url: String::new(),
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            me: Mutex::new(Ok(None)),
            login: Mutex::new(Ok(user())),
            register: Mutex::new(Ok(())),
            logout: Mutex::new(Ok(())),
            exchange: Mutex::new(Ok(ExchangeListing {
                my_titles: vec!["Emma".to_string()],
                my_cards: vec![BookCard {
                    title: "Emma".to_string(),
                    ..Default::default()
                }],
                books: vec![candidate("Dune", "Bob")],
            })),
            search: Mutex::new(Ok(Vec::new())),
            trade: Mutex::new(Ok(())),
            books: Mutex::new(Ok(MyBooksResponse::default())),
            book_change: Mutex::new(Ok(Vec::new())),
            requests: Mutex::new(Ok(RequestLists::default())),
            transition: Mutex::new(Ok(())),
            profile: Mutex::new(Ok(profile())),
            profile_saved: Mutex::new(Ok(profile())),
            last_update: Mutex::new(None),
            last_trade: Mutex::new(None),
        }
    }
}

impl FakeApi {
    pub fn authenticated() -> Self {
        let api = Self::default();
        *api.me.lock() = Ok(Some(user()));
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn me(&self) -> Result<Option<SessionUser>> {
        self.record("me");
        self.me.lock().clone()
    }

    async fn login(&self, email: String, _password: String) -> Result<SessionUser> {
        self.record(format!("login:{email}"));
        self.login.lock().clone()
    }

    async fn register(&self, request: RegisterRequest) -> Result<()> {
        self.record(format!("register:{}", request.email));
        self.register.lock().clone()
    }

    async fn logout(&self) -> Result<()> {
        self.record("logout");
        self.logout.lock().clone()
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        self.record("get_profile");
        self.profile.lock().clone()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        self.record("update_profile");
        *self.last_update.lock() = Some(update);
        self.profile_saved.lock().clone()
    }

    async fn get_exchange(&self) -> Result<ExchangeListing> {
        self.record("get_exchange");
        self.exchange.lock().clone()
    }

    async fn search_exchange(&self, query: &str) -> Result<Vec<ListingCandidate>> {
        self.record(format!("search:{query}"));
        self.search.lock().clone()
    }

    async fn send_trade_request(&self, request: CreateTradeRequest) -> Result<()> {
        self.record("send_trade_request");
        *self.last_trade.lock() = Some(request);
        self.trade.lock().clone()
    }

    async fn my_books(&self) -> Result<MyBooksResponse> {
        self.record("my_books");
        self.books.lock().clone()
    }

    async fn add_book(&self, title: String) -> Result<Vec<String>> {
        self.record(format!("add_book:{title}"));
        self.book_change.lock().clone()
    }

    async fn remove_book(&self, title: String) -> Result<Vec<String>> {
        self.record(format!("remove_book:{title}"));
        self.book_change.lock().clone()
    }

    async fn get_requests(&self) -> Result<RequestLists> {
        self.record("get_requests");
        self.requests.lock().clone()
    }

    async fn transition_request(&self, id: &str, action: TransitionAction) -> Result<()> {
        self.record(format!("transition:{id}:{action}"));
        self.transition.lock().clone()
    }
}

/// Shorthand for a backend rejection
pub(crate) fn rejected(message: &str) -> AppError {
    AppError::Rejected(message.to_string())
}
