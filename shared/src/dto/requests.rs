use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status of a trade request.
///
/// Exactly one status holds at any time. `Pending` is the only non-terminal
/// status; once a request leaves it, it never changes again. Status names this
/// client does not know decode as `Unknown` and are treated as terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub fn is_pending(self) -> bool {
        self == RequestStatus::Pending
    }

    pub fn is_terminal(self) -> bool {
        !self.is_pending()
    }

    /// Lowercase wire name, also used as the status badge
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::Unknown => "unknown",
        }
    }
}

/// Transition applied to a pending trade request.
///
/// Accept and reject belong to the owner (`to_user`), cancel to the requester
/// (`from_user`); the backend enforces who may call which.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransitionAction {
    Accept,
    Reject,
    Cancel,
}

impl TransitionAction {
    /// Path segment of `POST /requests/{id}/{action}`
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionAction::Accept => "accept",
            TransitionAction::Reject => "reject",
            TransitionAction::Cancel => "cancel",
        }
    }

    /// Status a pending request ends in after this transition
    pub fn target_status(self) -> RequestStatus {
        match self {
            TransitionAction::Accept => RequestStatus::Accepted,
            TransitionAction::Reject => RequestStatus::Rejected,
            TransitionAction::Cancel => RequestStatus::Cancelled,
        }
    }
}

impl std::fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestStatus {
    /// Status after applying `action`, or `None` when the request is already terminal
    pub fn apply(self, action: TransitionAction) -> Option<RequestStatus> {
        if self.is_pending() {
            Some(action.target_status())
        } else {
            None
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book-for-book trade request.
///
/// `from_user` offers `offered_book` to `to_user` in exchange for `requested_book`.
/// The `*_details` fields are denormalized book metadata whose encoding is not
/// guaranteed (structured object, python-style dict text, or absent), so they are
/// kept as raw JSON and decoded for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub id: String,
    pub from_user: String,
    pub to_user: String,
    #[serde(default)]
    pub requested_book: String,
    #[serde(default)]
    pub offered_book: String,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_book_details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_book_details: Option<Value>,
    /// Creation time as sent by the backend (HTTP-date or RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl TradeRequest {
    /// Parsed creation time, if the backend sent one in a known format
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Payload of `GET /requests`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestLists {
    #[serde(default)]
    pub incoming: Vec<TradeRequest>,
    #[serde(default)]
    pub outgoing: Vec<TradeRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let status: RequestStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, RequestStatus::Cancelled);
        assert_eq!(serde_json::to_string(&RequestStatus::Accepted).unwrap(), "\"accepted\"");
    }

    #[test]
    fn test_unrecognized_status_is_terminal() {
        let lists: RequestLists = serde_json::from_value(serde_json::json!({
            "incoming": [],
            "outgoing": [{
                "id": "3",
                "from_user": "alice@example.com",
                "to_user": "bob@example.com",
                "status": "completed"
            }]
        }))
        .unwrap();

        let status = lists.outgoing[0].status;
        assert_eq!(status, RequestStatus::Unknown);
        assert!(status.is_terminal());
        assert_eq!(status.apply(TransitionAction::Cancel), None);
    }

    #[test]
    fn test_only_pending_is_non_terminal() {
        assert!(RequestStatus::Pending.is_pending());
        assert!(RequestStatus::Accepted.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_terminal_status_rejects_every_transition() {
        assert_eq!(
            RequestStatus::Pending.apply(TransitionAction::Accept),
            Some(RequestStatus::Accepted)
        );
        for action in [TransitionAction::Accept, TransitionAction::Reject, TransitionAction::Cancel] {
            assert_eq!(RequestStatus::Accepted.apply(action), None);
            assert_eq!(RequestStatus::Cancelled.apply(action), None);
        }
    }

    #[test]
    fn test_request_keeps_details_raw() {
        let request: TradeRequest = serde_json::from_value(serde_json::json!({
            "id": "7",
            "from_user": "bob@example.com",
            "to_user": "alice@example.com",
            "requested_book": "Dune",
            "offered_book": "Emma",
            "status": "pending",
            "requested_book_details": "{'title': 'Dune', 'author': 'Herbert', 'image': None}",
            "offered_book_details": {"title": "Emma", "author": "Austen", "image": ""}
        }))
        .unwrap();

        assert!(request.requested_book_details.as_ref().unwrap().is_string());
        assert!(request.offered_book_details.as_ref().unwrap().is_object());
        assert!(request.created_at().is_none());
    }

    #[test]
    fn test_created_at_parses_http_date() {
        let request = TradeRequest {
            id: "1".to_string(),
            from_user: "a".to_string(),
            to_user: "b".to_string(),
            requested_book: String::new(),
            offered_book: String::new(),
            status: RequestStatus::Pending,
            requested_book_details: None,
            offered_book_details: None,
            timestamp: Some("Tue, 14 Oct 2025 10:00:00 GMT".to_string()),
        };

        let created = request.created_at().unwrap();
        assert_eq!(created.to_rfc3339(), "2025-10-14T10:00:00+00:00");
    }
}
