//! # Trade Request Lifecycle
//!
//! State machine for a single trade request and the rules that decide which
//! transition controls a list offers.
//!
//! ```text
//!            accept (owner)
//!          ┌──────────────► accepted
//!          │  reject (owner)
//! pending ─┼──────────────► rejected
//!          │  cancel (requester)
//!          └──────────────► cancelled
//! ```
//!
//! All three transitions are terminal and mutually exclusive. Only pending requests
//! expose controls: accept/reject on the incoming list, cancel on the outgoing list.
//! Who may actually call which transition is enforced by the backend.
//!
//! ## Busy Guard
//!
//! At most one transition is in flight at a time, tracked by a single
//! [`BusyTransition`] marker. It only keeps the UI from firing duplicate actions; the
//! backend is the real serialization point. The acted-upon request's controls show a
//! progress label and are disabled while the marker is set.

use shared::{RequestStatus, TradeRequest, TransitionAction};

use crate::core::error::{AppError, Result};

/// Which list a request is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Requests where the user owns the requested book
    Incoming,
    /// Requests the user sent
    Outgoing,
}

impl ListKind {
    /// Transitions offered on this list for a pending request
    pub fn actions(self) -> &'static [TransitionAction] {
        match self {
            ListKind::Incoming => &[TransitionAction::Accept, TransitionAction::Reject],
            ListKind::Outgoing => &[TransitionAction::Cancel],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListKind::Incoming => "Incoming",
            ListKind::Outgoing => "Outgoing",
        }
    }
}

/// The single in-flight transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyTransition {
    pub id: String,
    pub action: TransitionAction,
}

/// One transition control on a request card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestControl {
    pub action: TransitionAction,
    pub label: &'static str,
    pub enabled: bool,
}

/// Button label of an idle control
pub fn idle_label(action: TransitionAction) -> &'static str {
    match action {
        TransitionAction::Accept => "Accept",
        TransitionAction::Reject => "Reject",
        TransitionAction::Cancel => "Cancel",
    }
}

/// Button label while the request is busy
pub fn progress_label(action: TransitionAction) -> &'static str {
    match action {
        TransitionAction::Accept => "Accepting...",
        TransitionAction::Reject => "Rejecting...",
        TransitionAction::Cancel => "Cancelling...",
    }
}

/// Fallback message when a transition fails without a backend message
pub fn failure_label(action: TransitionAction) -> &'static str {
    match action {
        TransitionAction::Accept => "Accept failed",
        TransitionAction::Reject => "Reject failed",
        TransitionAction::Cancel => "Cancel failed",
    }
}

/// Transitions available for `request` on `list`; empty once the request is terminal
pub fn available_actions(request: &TradeRequest, list: ListKind) -> &'static [TransitionAction] {
    if request.status.is_terminal() {
        &[]
    } else {
        list.actions()
    }
}

/// Controls rendered for a request card.
///
/// Terminal requests get none. While `busy` names this request every control shows
/// its progress label and is disabled; other requests keep enabled controls.
pub fn controls_for(
    request: &TradeRequest,
    list: ListKind,
    busy: Option<&BusyTransition>,
) -> Vec<RequestControl> {
    let busy_here = busy.is_some_and(|b| b.id == request.id);
    available_actions(request, list)
        .iter()
        .map(|&action| RequestControl {
            action,
            label: if busy_here {
                progress_label(action)
            } else {
                idle_label(action)
            },
            enabled: !busy_here,
        })
        .collect()
}

/// Check that `action` may start on `request` and return the busy marker to set.
///
/// Fails when another transition is in flight, or when the control is not offered
/// (terminal request, or an action that does not belong on this list).
pub fn begin_transition(
    busy: Option<&BusyTransition>,
    request: &TradeRequest,
    list: ListKind,
    action: TransitionAction,
) -> Result<BusyTransition> {
    if let Some(current) = busy {
        return Err(AppError::Validation(format!(
            "Request {} is still being updated",
            current.id
        )));
    }

    if !available_actions(request, list).contains(&action) {
        return Err(AppError::State(format!(
            "{} is not available for request {} ({}, {})",
            idle_label(action),
            request.id,
            list.title().to_lowercase(),
            request.status
        )));
    }

    Ok(BusyTransition {
        id: request.id.clone(),
        action,
    })
}

/// Status the request ends in if the backend accepts the transition
pub fn expected_status(request: &TradeRequest, action: TransitionAction) -> Option<RequestStatus> {
    request.status.apply(action)
}
