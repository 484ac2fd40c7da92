//! HTTP endpoints for the query and mutation sides of the chat API.
//!
//! The push side lives in [`crate::ws`]; these handlers share the same hub.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{Message, MessageId};

/// Request body for posting a message
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageRequest {
    pub user: String,
    pub content: String,
}

/// Response carrying the id of the stored message
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageResponse {
    pub id: MessageId,
}

/// List all messages in insertion order.
///
/// GET /messages
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<Message>> {
    Json(state.hub.messages())
}

/// Post a message and broadcast the new snapshot to every subscriber.
///
/// POST /messages
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PostMessageRequest>,
) -> Json<PostMessageResponse> {
    let id = state.hub.post_message(req.user, req.content);
    tracing::debug!(%id, "message posted");
    Json(PostMessageResponse { id })
}
