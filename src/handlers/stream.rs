use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::auth::CurrentUser;
use crate::handlers::dashboard::load_dashboard;
use crate::state::AppState;

/// Server-Sent-Events stream of dashboard snapshots: one event at connect
/// time, then one per change to the user's data. Each event is a full
/// recomputation, never a delta. The subscription is bound to the user id
/// captured here, so a stream outliving its session cannot observe another
/// account.
pub async fn stream(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!(user_id = user.id, "Opening snapshot stream");

    let initial = snapshot_event(&state, user.id);

    let rx = state.hub.subscribe();
    let changes = BroadcastStream::new(rx).filter_map(move |msg| match msg {
        Ok(user_id) if user_id == user.id => Some(snapshot_event(&state, user.id)),
        // Other users' changes and lagged receivers are skipped; the next
        // matching notification carries a full snapshot anyway.
        _ => None,
    });

    Sse::new(tokio_stream::once(initial).chain(changes)).keep_alive(KeepAlive::default())
}

fn snapshot_event(state: &AppState, user_id: i64) -> Result<Event, Infallible> {
    let event = match load_dashboard(state, user_id) {
        Ok(metrics) => Event::default()
            .event("dashboard")
            .json_data(&metrics)
            .unwrap_or_else(|e| {
                tracing::error!("Failed to serialize dashboard snapshot: {}", e);
                Event::default().event("error").data("serialization failed")
            }),
        Err(e) => {
            tracing::error!("Failed to load dashboard snapshot: {}", e);
            Event::default().event("error").data("snapshot unavailable")
        }
    };
    Ok(event)
}
