use std::sync::{Arc, Mutex};

use crate::error::NotifyError;
use crate::types::ChannelId;

/// Zero-argument callback that pushes the current full snapshot to one
/// subscriber. Shared so the hub can fire the initial push on the same
/// callback it registers.
pub type Notifier = Arc<dyn Fn() -> Result<(), NotifyError> + Send + Sync>;

struct Entry {
    channel: ChannelId,
    notifier: Notifier,
}

/// The set of live subscriber callbacks, walked on every mutation.
///
/// Entries are kept in registration order and invoked in that order.
#[derive(Default)]
pub struct BroadcastRegistry {
    entries: Mutex<Vec<Entry>>,
}

impl BroadcastRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notifier for `channel`. Never fails.
    pub fn register(&self, channel: ChannelId, notifier: Notifier) {
        self.entries
            .lock()
            .unwrap()
            .push(Entry { channel, notifier });
    }

    /// Remove the entry for `channel`, if it is still registered.
    pub fn unregister(&self, channel: &str) {
        self.entries
            .lock()
            .unwrap()
            .retain(|e| e.channel != channel);
    }

    /// Invoke every registered notifier, in registration order.
    ///
    /// A failing notifier is logged and skipped; it never aborts the pass
    /// and never propagates to the caller.
    pub fn notify_all(&self) {
        let entries = self.entries.lock().unwrap();
        for entry in entries.iter() {
            if let Err(err) = (entry.notifier)() {
                tracing::warn!(channel = %entry.channel, "notification dropped: {err}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
