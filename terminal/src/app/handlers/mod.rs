//! # Event Handlers
//!
//! User action handlers organized by screen. Each handler updates state under a short
//! write lock and, when the action needs the backend, spawns a task that reports back
//! through an [`AppEvent`].

pub mod auth;
pub mod books;
pub mod exchange;
pub mod navigation;
pub mod profile;
pub mod requests;

use std::future::Future;

use async_channel::Sender;

use crate::app::events::AppEvent;

/// Run `task` on the runtime and deliver its event to the main loop
pub(crate) fn spawn_event<F>(event_tx: &Sender<AppEvent>, task: F)
where
    F: Future<Output = AppEvent> + Send + 'static,
{
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let event = task.await;
        let name = event.name();
        if tx.send(event).await.is_err() {
            tracing::debug!(event = name, "Event channel closed, result dropped");
        }
    });
}
