//! WebSocket message dispatch
//!
//! Client frames that mutate the log go through the same hub path as the
//! HTTP mutation endpoint, so subscribers see one consistent stream.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

/// Handle a client message and return the optional direct response.
///
/// Snapshot pushes triggered by a mutation travel through the subscription
/// channel, not through the return value here.
pub fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    match msg {
        ClientMessage::PostMessage { user, content } => {
            let id = state.hub.post_message(user, content);
            Some(ServerMessage::MessageAck { id })
        }
    }
}
