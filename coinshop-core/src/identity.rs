//! Last-write-wins identity cell.
//!
//! The host bridge is the only writer and the purchase flow the only reader.
//! Both ends wrap a `tokio::sync::watch` channel, so a read always observes
//! the most recent write and readers can `await` the next one.

use coinshop_sdk::objects::HostPayload;
use serde_json::Value;
use tokio::sync::watch;

/// Writing end of the identity cell, owned by the host bridge.
#[derive(Debug)]
pub struct IdentityWriter {
    tx: watch::Sender<Option<HostPayload>>,
}

/// Reading end of the identity cell, owned by the purchase flow.
///
/// Call [`changed()`](IdentityReader::changed) to wait for the next write.
#[derive(Debug, Clone)]
pub struct IdentityReader {
    rx: watch::Receiver<Option<HostPayload>>,
}

/// Create an empty identity cell.
pub fn identity_cell() -> (IdentityWriter, IdentityReader) {
    let (tx, rx) = watch::channel(None);
    (IdentityWriter { tx }, IdentityReader { rx })
}

// -- IdentityWriter -----------------------------------------------------

impl IdentityWriter {
    /// Replace the stored payload, discarding the previous one.
    ///
    /// Succeeds even when no reader is left.
    pub fn replace(&self, payload: HostPayload) {
        self.tx.send_replace(Some(payload));
    }
}

// -- IdentityReader -----------------------------------------------------

impl IdentityReader {
    /// The most recently written payload, if any.
    pub fn current(&self) -> Option<HostPayload> {
        self.rx.borrow().clone()
    }

    /// The `userId` of the most recent payload, copied verbatim.
    pub fn user_id(&self) -> Option<Value> {
        self.rx
            .borrow()
            .as_ref()
            .and_then(|payload| payload.user_id().cloned())
    }

    /// Wait until the cell is written again.
    ///
    /// Returns `Err` once the writer has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_cell_has_no_user() {
        let (_writer, reader) = identity_cell();
        assert_eq!(reader.current(), None);
        assert_eq!(reader.user_id(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let (writer, reader) = identity_cell();
        writer.replace(HostPayload(json!({"userId": "first"})));
        writer.replace(HostPayload(json!({"userId": "second", "plan": "gold"})));

        assert_eq!(reader.user_id(), Some(json!("second")));
        assert_eq!(
            reader.current(),
            Some(HostPayload(json!({"userId": "second", "plan": "gold"})))
        );
    }

    #[test]
    fn test_replacement_is_not_merged() {
        let (writer, reader) = identity_cell();
        writer.replace(HostPayload(json!({"userId": "u-1"})));
        writer.replace(HostPayload(json!({"locale": "en-IN"})));

        assert_eq!(reader.user_id(), None);
    }

    #[tokio::test]
    async fn test_changed_fires_on_write() {
        let (writer, mut reader) = identity_cell();
        let waiter = tokio::spawn(async move {
            reader.changed().await.unwrap();
            reader.user_id()
        });
        writer.replace(HostPayload(json!({"userId": 9})));

        assert_eq!(waiter.await.unwrap(), Some(json!(9)));
    }

    #[tokio::test]
    async fn test_changed_errors_after_writer_dropped() {
        let (writer, mut reader) = identity_cell();
        drop(writer);
        assert!(reader.changed().await.is_err());
    }
}
