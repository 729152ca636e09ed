//! # Profile Handlers
//!
//! Profile load and the edit/save/discard flow.

use crate::app::events::AppEvent;
use crate::app::handlers::spawn_event;
use crate::app::state::{AppState, Notice, ProfileField, ProfileForm, ViewToken};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shown once the backend stored the profile
pub const PROFILE_SAVED: &str = "Saved!";

/// Load the current user record
pub(crate) fn load(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, token: ViewToken) {
    let api_client = {
        let mut state = state.write();
        state.profile.loading = true;
        state.api_client.clone()
    };
    spawn_event(&event_tx, async move {
        AppEvent::ProfileLoaded(token, api_client.get_profile().await)
    });
}

/// Enter edit mode, staging a copy of the loaded record
///
/// Internal handler function - use [`crate::app::App::handle_edit_profile`] instead.
pub(crate) fn handle_edit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let Some(user) = state.profile.user.clone() else {
        state.profile.notice = Some(Notice::error("Profile not loaded yet"));
        return;
    };
    state.profile.form = ProfileForm::from_profile(&user);
    state.profile.editing = true;
    state.profile.notice = None;
}

/// Stage one edited field
///
/// Internal handler function - use [`crate::app::App::handle_profile_field`] instead.
pub(crate) fn handle_set_field(state: Arc<RwLock<AppState>>, field: ProfileField, value: String) {
    let mut state = state.write();
    if !state.profile.editing {
        state.profile.notice = Some(Notice::error("Not editing; use `edit` first"));
        return;
    }
    state.profile.form.set(field, value);
}

/// Save the staged edits
///
/// Internal handler function - use [`crate::app::App::handle_save_profile`] instead.
pub(crate) fn handle_save(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, update) = {
        let mut state = state.write();
        if !state.profile.editing {
            state.profile.notice = Some(Notice::error("Not editing; use `edit` first"));
            return;
        }
        if state.profile.busy {
            return;
        }
        state.profile.busy = true;
        state.profile.notice = None;
        (state.api_client.clone(), state.view, state.profile.form.to_update())
    };

    tracing::info!(
        password_change = update.new_password.is_some(),
        "Saving profile"
    );
    spawn_event(&event_tx, async move {
        AppEvent::ProfileSaved(token, api_client.update_profile(update).await)
    });
}

/// Leave edit mode without saving and reload the record
///
/// Internal handler function - use [`crate::app::App::handle_discard_profile`] instead.
pub(crate) fn handle_discard(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let token = {
        let mut state = state.write();
        state.profile.editing = false;
        state.profile.form = ProfileForm::default();
        state.profile.notice = None;
        state.view
    };
    load(state, event_tx, token);
}
