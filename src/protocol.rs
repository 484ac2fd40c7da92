use crate::types::{Message, MessageId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Post a new chat message over the socket.
    PostMessage {
        user: String,
        content: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full snapshot of the message log, pushed once on connect and again
    /// after every mutation.
    Messages {
        list: Vec<Message>,
    },
    /// Acknowledges a message posted over the socket.
    MessageAck {
        id: MessageId,
    },
    Error {
        code: String,
        msg: String,
    },
}
