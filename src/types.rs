use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type MessageId = String;
pub type ChannelId = String;

/// A single chat message. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user: String,
    pub content: String,
}
