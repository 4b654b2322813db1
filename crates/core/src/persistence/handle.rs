use tokio::sync::mpsc;

/// Item on the persistence queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueItem {
    /// Serialized post to append to `upcoming`.
    Record(String),
    /// Ends the writer once everything queued before it is written.
    Stop,
}

/// Handle for enqueueing matched posts
///
/// Cheaply cloneable. Enqueueing never blocks since the queue is unbounded.
#[derive(Clone)]
pub struct PersistenceHandle {
    tx: mpsc::UnboundedSender<QueueItem>,
}

impl PersistenceHandle {
    pub fn new(tx: mpsc::UnboundedSender<QueueItem>) -> Self {
        Self { tx }
    }

    /// Queue a payload for writing.
    ///
    /// Returns false if the writer is gone.
    pub fn enqueue(&self, payload: String) -> bool {
        match self.tx.send(QueueItem::Record(payload)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to enqueue collection item: {}", e);
                false
            }
        }
    }

    /// Ask the writer to finish after draining the queue.
    pub fn stop(&self) -> bool {
        self.tx.send(QueueItem::Stop).is_ok()
    }
}
