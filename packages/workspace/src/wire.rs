use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("peer endpoint closed")]
    Closed,
}

/// One endpoint of the structured message channel between the host and the
/// render surface.
///
/// The unit of exchange is a [`serde_json::Value`] frame, the structured-
/// clone analog: whatever arrives is decoded leniently by the receiver and
/// dropped if unrecognized. Sends are fire-and-forget and never block.
pub struct Wire {
    tx: mpsc::UnboundedSender<Value>,
    rx: mpsc::UnboundedReceiver<Value>,
}

/// Two crossed endpoints: what one posts, the other receives.
pub fn pair() -> (Wire, Wire) {
    let (a_tx, a_rx) = mpsc::unbounded_channel();
    let (b_tx, b_rx) = mpsc::unbounded_channel();
    (
        Wire { tx: a_tx, rx: b_rx },
        Wire { tx: b_tx, rx: a_rx },
    )
}

impl Wire {
    /// Serialize and send. At-most-once delivery: if the peer is gone the
    /// frame is lost and `Closed` is returned.
    pub fn post(&self, message: &impl Serialize) -> Result<(), WireError> {
        let value = serde_json::to_value(message)?;
        self.tx.send(value).map_err(|_| WireError::Closed)
    }

    /// Next inbound frame; `None` once the peer endpoint is dropped.
    pub async fn recv(&mut self) -> Option<Value> {
        self.rx.recv().await
    }
}
