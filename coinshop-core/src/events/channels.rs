//! Event channel factories and handles.

use super::types::HostMessage;
use tokio::sync::mpsc;

/// Default buffer size for event channels.
///
/// The host shell only posts on identity changes, so bursts stay small.
pub const DEFAULT_CHANNEL_BUFFER: usize = 64;

/// Sender handle for HostMessage events (held by the host shell).
pub type HostMessageSender = mpsc::Sender<HostMessage>;
/// Receiver handle for HostMessage events (consumed by the bridge).
pub type HostMessageReceiver = mpsc::Receiver<HostMessage>;

/// Create a new HostMessage channel.
///
/// Returns a (sender, receiver) pair. The receiver is handed to
/// [`HostMessageBridge::subscribe`](crate::bridge::HostMessageBridge::subscribe)
/// on activation.
pub fn host_message_channel() -> (HostMessageSender, HostMessageReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}

