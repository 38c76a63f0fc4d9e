//! HostMessageBridge processor.
//!
//! The HostMessageBridge is responsible for:
//! - Listening for `HostMessage` events for as long as the screen is active
//! - Replacing the identity payload with each message's payload verbatim
//! - Stopping when unsubscribed, when its guard is dropped, or when the host
//!   closes the channel
//!
//! Nothing is ever sent back to the host and nothing is validated.

use crate::events::{HostMessage, HostMessageReceiver};
use crate::identity::IdentityWriter;
use kanau::processor::Processor;
use std::convert::Infallible;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Copies host payloads into the identity cell.
pub struct HostMessageBridge {
    identity: IdentityWriter,
}

/// Live registration of a [`HostMessageBridge`].
///
/// Call [`unsubscribe()`](BridgeSubscription::unsubscribe) on teardown to
/// stop listening and wait for the listener to finish. Dropping the guard
/// without unsubscribing aborts the listener.
pub struct BridgeSubscription {
    shutdown_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl HostMessageBridge {
    /// Create a new HostMessageBridge writing into `identity`.
    pub fn new(identity: IdentityWriter) -> Self {
        Self { identity }
    }

    /// Start listening on `messages`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe(self, messages: HostMessageReceiver) -> BridgeSubscription {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(self.run(shutdown_rx, messages));
        BridgeSubscription {
            shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Run the listener loop until shutdown or channel close.
    async fn run(self, mut shutdown_rx: watch::Receiver<bool>, mut messages: HostMessageReceiver) {
        info!("HostMessageBridge subscribed");

        loop {
            tokio::select! {
                biased;

                // Check for shutdown
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        info!("HostMessageBridge received unsubscribe signal");
                        break;
                    }
                }

                // Receive host messages
                message = messages.recv() => {
                    let Some(message) = message else {
                        info!("HostMessage channel closed");
                        break;
                    };
                    let _ = self.process(message).await;
                }
            }
        }

        info!("HostMessageBridge unsubscribed");
    }
}

impl Processor<HostMessage> for HostMessageBridge {
    type Output = ();
    type Error = Infallible;

    async fn process(&self, message: HostMessage) -> Result<(), Infallible> {
        debug!(
            has_user_id = message.payload.user_id().is_some(),
            "Received HostMessage, replacing identity payload"
        );
        self.identity.replace(message.payload);
        Ok(())
    }
}

impl BridgeSubscription {
    /// Whether the listener is still running.
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop listening and wait for the listener to finish.
    ///
    /// Messages still queued in the channel are not applied.
    pub async fn unsubscribe(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "HostMessageBridge listener did not stop cleanly");
            }
        }
    }
}

impl Drop for BridgeSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
