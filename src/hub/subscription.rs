use std::sync::Arc;

use tokio::sync::mpsc;

use super::registry::BroadcastRegistry;
use crate::types::{ChannelId, Message};

/// One live subscriber: its channel identity plus the receiving end of its
/// snapshot stream. Dropping the subscription removes its notifier from the
/// registry, so transport teardown reclaims the entry.
pub struct Subscription {
    channel: ChannelId,
    rx: mpsc::UnboundedReceiver<Vec<Message>>,
    registry: Arc<BroadcastRegistry>,
}

impl Subscription {
    pub(super) fn new(
        channel: ChannelId,
        rx: mpsc::UnboundedReceiver<Vec<Message>>,
        registry: Arc<BroadcastRegistry>,
    ) -> Self {
        Self {
            channel,
            rx,
            registry,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Wait for the next snapshot push. `None` once the notifier is gone
    /// from the registry and all buffered snapshots are drained.
    pub async fn recv(&mut self) -> Option<Vec<Message>> {
        self.rx.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.unregister(&self.channel);
    }
}
