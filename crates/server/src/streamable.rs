// Streamable HTTP transport: stateless POST endpoint
//
// Each request gets a fresh handler, processes exactly one message, and
// discards state; cross-request ordering is the caller's concern.

use crate::api::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// `POST /mcp` — handle one JSON-RPC message and answer in the body.
///
/// Notifications have no response and are acknowledged with 202.
pub async fn post_mcp(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let handler = state.service.clone();
    match handler.handle_raw(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
