use crate::types::ChannelId;
use thiserror::Error;

/// Faults a notifier can report when pushing a snapshot to its subscriber.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The subscriber's receiving end is gone; the transport task has ended
    /// or is tearing down.
    #[error("subscriber channel {0} is no longer receiving")]
    ChannelClosed(ChannelId),
}
