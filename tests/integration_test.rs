use axum::extract::State;
use axum::Json;
use backchat::api::{self, PostMessageRequest};
use backchat::protocol::{ClientMessage, ServerMessage};
use backchat::state::AppState;
use backchat::ws::handlers::handle_message;
use std::sync::Arc;

/// End-to-end integration test for the post/subscribe/broadcast flow
#[tokio::test]
async fn test_full_chat_flow() {
    let state = Arc::new(AppState::new());

    // 1. Post the first message through the HTTP mutation handler
    let Json(posted) = api::post_message(
        State(Arc::clone(&state)),
        Json(PostMessageRequest {
            user: "alice".to_string(),
            content: "hi".to_string(),
        }),
    )
    .await;
    assert!(!posted.id.is_empty());

    // 2. A new subscription's first push is the current snapshot
    let mut subscription = state.hub.subscribe();
    let first = subscription.recv().await.expect("initial snapshot");
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].user, "alice");
    assert_eq!(first[0].content, "hi");

    // 3. Post a second message over the socket dispatch path
    let ack = handle_message(
        ClientMessage::PostMessage {
            user: "bob".to_string(),
            content: "yo".to_string(),
        },
        &state,
    );

    let bob_id = match ack {
        Some(ServerMessage::MessageAck { id }) => id,
        other => panic!("Expected MessageAck, got {:?}", other),
    };
    assert_ne!(bob_id, posted.id);

    // 4. The open subscription sees the full updated snapshot, in order
    let second = subscription.recv().await.expect("post snapshot");
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].user, "alice");
    assert_eq!(second[1].user, "bob");
    assert_eq!(second[1].id, bob_id);

    // 5. The query handler agrees with the pushed snapshot
    let Json(listed) = api::list_messages(State(Arc::clone(&state))).await;
    assert_eq!(listed, second);
}

/// A subscriber that connects mid-conversation only ever sees snapshots at
/// least as new as the log was when it joined.
#[tokio::test]
async fn test_late_subscriber_catches_up() {
    let state = Arc::new(AppState::new());

    for i in 0..3 {
        state.hub.post_message("alice", format!("msg {i}"));
    }

    let mut late = state.hub.subscribe();
    let first = late.recv().await.expect("initial snapshot");
    assert_eq!(first.len(), 3);

    state.hub.post_message("bob", "late addition");
    let second = late.recv().await.expect("post snapshot");
    assert_eq!(second.len(), 4);
    assert_eq!(second[3].content, "late addition");
}

/// Disconnecting a subscriber must not disturb the ones still connected.
#[tokio::test]
async fn test_disconnect_leaves_other_subscribers_intact() {
    let state = Arc::new(AppState::new());

    let mut staying = state.hub.subscribe();
    let leaving = state.hub.subscribe();
    assert_eq!(state.hub.subscriber_count(), 2);

    staying.recv().await.unwrap();
    drop(leaving);
    assert_eq!(state.hub.subscriber_count(), 1);

    handle_message(
        ClientMessage::PostMessage {
            user: "alice".to_string(),
            content: "still broadcasting".to_string(),
        },
        &state,
    );

    let snapshot = staying.recv().await.expect("snapshot after disconnect");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].content, "still broadcasting");
}
