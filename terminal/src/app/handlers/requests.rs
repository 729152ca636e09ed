//! # Request Handlers
//!
//! Incoming/outgoing list load and accept/reject/cancel transitions.

use crate::app::events::AppEvent;
use crate::app::handlers::spawn_event;
use crate::app::lifecycle::{self, ListKind};
use crate::app::state::{AppState, Notice, ViewToken};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::TransitionAction;
use std::sync::Arc;

/// Reload both lists from the backend.
///
/// Returns the sequence number the answer will carry; only the answer to the latest
/// reload is applied.
pub(crate) fn load(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, token: ViewToken) -> u64 {
    let (api_client, seq) = {
        let mut state = state.write();
        state.requests.loading = true;
        state.requests.reload_seq += 1;
        (state.api_client.clone(), state.requests.reload_seq)
    };
    spawn_event(&event_tx, async move {
        AppEvent::RequestsLoaded(token, seq, api_client.get_requests().await)
    });
    seq
}

/// Start a transition on the request `id` shown in `list`
///
/// Refused locally when another transition is in flight or the control is not offered
/// for this request. Nothing is patched optimistically.
///
/// Internal handler function - use [`crate::app::App::handle_transition`] instead.
pub(crate) fn handle_transition(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    list: ListKind,
    id: String,
    action: TransitionAction,
) {
    let (api_client, token) = {
        let mut state = state.write();
        let requests = match list {
            ListKind::Incoming => &state.requests.incoming,
            ListKind::Outgoing => &state.requests.outgoing,
        };
        let Some(request) = requests.iter().find(|r| r.id == id).cloned() else {
            state.requests.notice = Some(Notice::error(format!(
                "No {} request {id}",
                list.title().to_lowercase()
            )));
            return;
        };

        let busy = match lifecycle::begin_transition(
            state.requests.busy.as_ref(),
            &request,
            list,
            action,
        ) {
            Ok(busy) => busy,
            Err(e) => {
                tracing::debug!(id = %id, action = %action, error = %e, "Transition refused locally");
                state.requests.notice = Some(Notice::from_error(&e));
                return;
            }
        };

        tracing::info!(
            id = %id,
            action = %action,
            expected = ?lifecycle::expected_status(&request, action),
            "Starting request transition"
        );
        state.requests.busy = Some(busy);
        state.requests.settle_after = None;
        state.requests.notice = None;
        (state.api_client.clone(), state.view)
    };

    spawn_event(&event_tx, async move {
        let result = api_client.transition_request(&id, action).await;
        AppEvent::TransitionResult {
            token,
            id,
            action,
            result,
        }
    });
}
