// SSE transport: one stream per session, paired with a message endpoint
//
// Session lifecycle is OPEN -> CLOSED. Opening the stream allocates a
// session id and registers its output channel; dropping the stream
// deregisters it. A removed id is never reused to route further messages.

use crate::api::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stitcher_mcp::protocol::JsonRpcResponse;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, warn};
use uuid::Uuid;

/// Outbound channel capacity per session.
const SESSION_BUFFER: usize = 16;

/// Concurrent-safe map of live SSE sessions, keyed by session id.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, mpsc::Sender<JsonRpcResponse>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, id: String, tx: mpsc::Sender<JsonRpcResponse>) {
        self.sessions.lock().expect("session registry poisoned").insert(id, tx);
    }

    fn remove(&self, id: &str) {
        self.sessions.lock().expect("session registry poisoned").remove(id);
    }

    fn sender(&self, id: &str) -> Option<mpsc::Sender<JsonRpcResponse>> {
        self.sessions.lock().expect("session registry poisoned").get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes the session entry when the SSE stream is dropped.
struct SessionGuard {
    registry: SessionRegistry,
    id: String,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        info!(session_id = %self.id, "SSE session closed");
        self.registry.remove(&self.id);
    }
}

/// `GET /sse` — open a session and stream JSON-RPC responses.
///
/// The first event names the companion message endpoint for this session;
/// everything after that is a protocol response.
pub async fn open_session(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let session_id = Uuid::new_v4().to_string();
    let (tx, rx) = mpsc::channel(SESSION_BUFFER);
    state.sessions.insert(session_id.clone(), tx);
    info!(session_id = %session_id, "SSE session opened");

    let endpoint = format!("/message?sessionId={session_id}");
    let guard = SessionGuard {
        registry: state.sessions.clone(),
        id: session_id,
    };

    let first = stream::once(async move { Ok(Event::default().event("endpoint").data(endpoint)) });
    let responses = ReceiverStream::new(rx).map(move |response| {
        let _open = &guard;
        Event::default().event("message").json_data(&response)
    });

    Sse::new(first.chain(responses)).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageQuery {
    session_id: String,
}

/// `POST /message?sessionId=` — route one inbound message to its session.
///
/// Unknown or already-closed ids get a 404 before any handler runs.
pub async fn post_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    body: String,
) -> impl IntoResponse {
    let Some(tx) = state.sessions.sender(&query.session_id) else {
        warn!(session_id = %query.session_id, "message for unknown session");
        return session_not_found(&query.session_id);
    };

    if let Some(response) = state.service.handle_raw(&body).await {
        if tx.send(response).await.is_err() {
            // Receiver dropped between lookup and send; the guard will have
            // removed the entry, treat it as closed.
            state.sessions.remove(&query.session_id);
            return session_not_found(&query.session_id);
        }
    }

    StatusCode::ACCEPTED.into_response()
}

fn session_not_found(session_id: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "session not found",
            "sessionId": session_id,
        })),
    )
        .into_response()
}
