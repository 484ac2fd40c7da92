use std::sync::RwLock;

use crate::types::{Message, MessageId};

/// Append-only, in-memory message log. Insertion order is the only order;
/// nothing is ever removed or rewritten for the life of the process.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its freshly minted id.
    ///
    /// Accepts any strings, empty included; validation is the client's job.
    pub fn append(&self, user: impl Into<String>, content: impl Into<String>) -> MessageId {
        let id = ulid::Ulid::new().to_string();
        let message = Message {
            id: id.clone(),
            user: user.into(),
            content: content.into(),
        };
        self.messages.write().unwrap().push(message);
        id
    }

    /// Owned snapshot of every message, oldest first.
    pub fn list_all(&self) -> Vec<Message> {
        self.messages.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
