//! Tests for the session client against a mock backend.
//!
//! Every test mounts the endpoints it needs on a fresh `wiremock` server rooted at
//! `/api`, the way the real backend is mounted.

use bookswap_terminal::{ApiClient, AppError, ClientConfig};
use serde_json::json;
use shared::{CreateTradeRequest, ProfileUpdate, RequestStatus, TransitionAction};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(format!("{}/api", server.uri()))).unwrap()
}

// =============================================================================
// Session
// =============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn test_anonymous_me_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false, "user": null})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.me().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_me_user_is_not_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "user": {"name": "Ann"}})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.me().await.unwrap_err();
        assert!(err.is_transport(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_login_cookie_is_carried_on_later_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"email": "ann@example.com", "password": "pw"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                    .set_body_json(json!({
                        "ok": true,
                        "user": {"email": "ann@example.com", "name": "Ann"}
                    })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "user": {"email": "ann@example.com", "name": "Ann"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client.login("ann@example.com".into(), "pw".into()).await.unwrap();
        assert_eq!(user.name, "Ann");

        let me = client.me().await.unwrap().expect("authenticated");
        assert_eq!(me.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_bad_credentials_are_rejected_not_transport() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"ok": false, "error": "Invalid email or password"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("ann@example.com".into(), "bad".into()).await.unwrap_err();
        assert_eq!(err, AppError::Rejected("Invalid email or password".into()));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_register_sends_initial_books() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(json!({
                "name": "Ann",
                "email": "ann@example.com",
                "city": "Oslo",
                "address": "Main St 1",
                "phone": "555",
                "password": "pw",
                "selected_books": ["Dune", "Emma"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .register(shared::RegisterRequest {
                name: "Ann".into(),
                email: "ann@example.com".into(),
                city: "Oslo".into(),
                address: "Main St 1".into(),
                phone: "555".into(),
                password: "pw".into(),
                selected_books: vec!["Dune".into(), "Emma".into()],
            })
            .await
            .unwrap();
    }
}

// =============================================================================
// Transport Failures
// =============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn test_server_error_without_envelope_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/exchange"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_exchange().await.unwrap_err();
        assert!(err.is_transport(), "got {err:?}");
        assert!(err.user_message().ends_with("Try again."));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9/api").with_timeout_secs(2)).unwrap();
        let err = client.get_requests().await.unwrap_err();
        assert!(err.is_transport(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_json_without_ok_flag_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.get_profile().await.unwrap_err().is_transport());
    }
}

// =============================================================================
// Exchange & Books
// =============================================================================

mod exchange {
    use super::*;

    #[tokio::test]
    async fn test_search_sends_exact_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/exchange/search"))
            .and(query_param("q", "Dune Messiah"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "books": [{
                    "user_name": "Bob",
                    "user_email": "bob@example.com",
                    "user_city": "Oslo",
                    "book_title": "Dune Messiah",
                    "image_url": ""
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let books = client.search_exchange("Dune Messiah").await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].similarity(), 0.0);
        assert_eq!(books[0].owner_label(), "Bob (Oslo)");
    }

    #[tokio::test]
    async fn test_default_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/exchange"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "my_titles": ["Emma"],
                "my_cards": [{"title": "Emma", "author": "Jane Austen", "genre": "", "img": ""}],
                "books": [{
                    "user_name": "Bob",
                    "user_email": "bob@example.com",
                    "user_city": "",
                    "book_title": "Dune",
                    "image_url": "https://covers/dune.jpg",
                    "similarity": 0.8123
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let listing = client.get_exchange().await.unwrap();
        assert_eq!(listing.my_titles, vec!["Emma"]);
        assert_eq!(listing.my_cards[0].author(), Some("Jane Austen"));
        assert_eq!(listing.my_cards[0].genre(), None);
        assert_eq!(shared::format_similarity(listing.books[0].similarity()), "81.2%");
        assert_eq!(listing.books[0].owner_label(), "Bob");
    }

    #[tokio::test]
    async fn test_trade_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/exchange/request"))
            .and(body_json(json!({
                "requested_book": "Dune",
                "owner_email": "bob@example.com",
                "offered_book": "Emma"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "id": "r1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .send_trade_request(CreateTradeRequest {
                requested_book: "Dune".into(),
                owner_email: "bob@example.com".into(),
                offered_book: "Emma".into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_book_returns_titles() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/books/me/add"))
            .and(body_json(json!({"title": "Dune"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "books": ["Emma", "Dune"]})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.add_book("Dune".into()).await.unwrap(), vec!["Emma", "Dune"]);
    }
}

// =============================================================================
// Requests
// =============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_requests_with_loose_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "incoming": [{
                    "id": "a1",
                    "from_user": "bob@example.com",
                    "to_user": "ann@example.com",
                    "requested_book": "Dune",
                    "offered_book": "Emma",
                    "status": "pending",
                    "requested_book_details": "{'title': 'Dune', 'author': 'Herbert', 'image': None}",
                    "offered_book_details": {"title": "Emma", "img": "https://covers/emma.jpg"},
                    "timestamp": "Tue, 07 Jan 2025 10:30:00 GMT"
                }],
                "outgoing": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let lists = client.get_requests().await.unwrap();
        let request = &lists.incoming[0];
        assert_eq!(request.status, RequestStatus::Pending);
        assert!(request.created_at().is_some());

        let requested = bookswap_terminal::utils::details::decode_details(
            request.requested_book_details.as_ref(),
        );
        assert_eq!(requested.author, "Herbert");
        let offered = bookswap_terminal::utils::details::decode_details(
            request.offered_book_details.as_ref(),
        );
        assert_eq!(offered.image, "https://covers/emma.jpg");
        assert!(lists.outgoing.is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_status_keeps_both_lists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "incoming": [{
                    "id": "a1",
                    "from_user": "bob@example.com",
                    "to_user": "ann@example.com",
                    "requested_book": "Dune",
                    "offered_book": "Emma",
                    "status": "pending"
                }],
                "outgoing": [{
                    "id": "b2",
                    "from_user": "ann@example.com",
                    "to_user": "bob@example.com",
                    "requested_book": "Emma",
                    "offered_book": "Dune",
                    "status": "completed"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let lists = client.get_requests().await.unwrap();
        assert_eq!(lists.incoming[0].status, RequestStatus::Pending);
        assert_eq!(lists.outgoing[0].status, RequestStatus::Unknown);
        assert!(lists.outgoing[0].status.is_terminal());
    }

    #[tokio::test]
    async fn test_transition_rejection_without_message_is_blank() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/requests/a1/accept"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"ok": false})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.transition_request("a1", TransitionAction::Accept).await.unwrap_err();
        assert_eq!(err, AppError::Rejected(String::new()));
        assert_eq!(
            err.or_message(bookswap_terminal::app::lifecycle::failure_label(TransitionAction::Accept)),
            AppError::Rejected("Accept failed".into())
        );
    }

    #[tokio::test]
    async fn test_transition_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/requests/a1/cancel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.transition_request("a1", TransitionAction::Cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_transition_rejection_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/requests/a1/accept"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"ok": false, "error": "Request is not pending"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.transition_request("a1", TransitionAction::Accept).await.unwrap_err();
        assert_eq!(err, AppError::Rejected("Request is not pending".into()));
    }
}

// =============================================================================
// Profile
// =============================================================================

mod profile {
    use super::*;

    #[tokio::test]
    async fn test_patch_without_password_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/profile"))
            .and(body_json(json!({
                "name": "Ann",
                "city": "Bergen",
                "address": "Main St 1",
                "phone": "555",
                "avatar_url": ""
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "user": {
                    "name": "Ann",
                    "email": "ann@example.com",
                    "city": "Bergen",
                    "address": "Main St 1",
                    "phone": "555",
                    "avatar_url": ""
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client
            .update_profile(ProfileUpdate {
                name: "Ann".into(),
                city: "Bergen".into(),
                address: "Main St 1".into(),
                phone: "555".into(),
                avatar_url: String::new(),
                current_password: None,
                new_password: None,
            })
            .await
            .unwrap();
        assert_eq!(user.city, "Bergen");
        assert_eq!(user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_wrong_current_password_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/profile"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"ok": false, "error": "Current password is incorrect"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .update_profile(ProfileUpdate {
                current_password: Some("wrong".into()),
                new_password: Some("new".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Rejected("Current password is incorrect".into()));
    }
}
