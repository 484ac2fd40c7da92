mod registry;
mod store;
mod subscription;

pub use registry::{BroadcastRegistry, Notifier};
pub use store::MessageStore;
pub use subscription::Subscription;

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::error::NotifyError;
use crate::types::{ChannelId, Message, MessageId};

/// The pub/sub core: the append-only message store plus the subscriber
/// registry, composed behind a single mutation path.
///
/// One hub is constructed at startup and shared with every request handler;
/// independent hubs can coexist in one process (tests rely on this).
pub struct ChatHub {
    store: Arc<MessageStore>,
    registry: Arc<BroadcastRegistry>,
    /// Serializes append-then-notify so no mutation interleaves with an
    /// in-progress pass.
    post_guard: Mutex<()>,
}

impl ChatHub {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MessageStore::new()),
            registry: Arc::new(BroadcastRegistry::new()),
            post_guard: Mutex::new(()),
        }
    }

    /// Current snapshot of the message log, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.store.list_all()
    }

    /// Append a message, then push the new snapshot to every subscriber.
    /// Returns the id of the stored message.
    pub fn post_message(
        &self,
        user: impl Into<String>,
        content: impl Into<String>,
    ) -> MessageId {
        let _guard = self.post_guard.lock().unwrap();
        let id = self.store.append(user, content);
        self.registry.notify_all();
        id
    }

    /// Open a subscription channel.
    ///
    /// The channel's sink exists before its notifier is registered, so the
    /// initial snapshot fired here cannot outrun channel setup; the
    /// subscriber's first delivered value is the log as of this call.
    pub fn subscribe(&self) -> Subscription {
        let channel: ChannelId = ulid::Ulid::new().to_string();
        let (tx, rx) = mpsc::unbounded_channel();

        let store = Arc::clone(&self.store);
        let chan = channel.clone();
        let notifier: Notifier = Arc::new(move || {
            tx.send(store.list_all())
                .map_err(|_| NotifyError::ChannelClosed(chan.clone()))
        });

        self.registry.register(channel.clone(), Arc::clone(&notifier));

        if let Err(err) = notifier() {
            tracing::warn!(channel = %channel, "initial snapshot dropped: {err}");
        }

        Subscription::new(channel, rx, Arc::clone(&self.registry))
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}
