use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::metrics;
use crate::store::CollectionStore;

use super::{PersistenceHandle, QueueItem};

/// Totals reported by a finished writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceStats {
    pub written: u64,
    pub retries: u64,
}

/// Background task appending queued payloads to the `upcoming` collection
///
/// A failed append is logged and the same payload is queued again at the
/// tail, so the writer only ends on [`QueueItem::Stop`].
pub struct PersistenceWriter {
    rx: mpsc::UnboundedReceiver<QueueItem>,
    requeue: mpsc::UnboundedSender<QueueItem>,
    store: Arc<dyn CollectionStore>,
    retry_delay: Duration,
    stats: PersistenceStats,
}

impl PersistenceWriter {
    pub fn new(
        rx: mpsc::UnboundedReceiver<QueueItem>,
        requeue: mpsc::UnboundedSender<QueueItem>,
        store: Arc<dyn CollectionStore>,
        retry_delay: Duration,
    ) -> Self {
        Self {
            rx,
            requeue,
            store,
            retry_delay,
            stats: PersistenceStats::default(),
        }
    }

    /// Run until stopped, then drain whatever is still queued.
    ///
    /// This should be spawned as a background task.
    pub async fn run(mut self) -> PersistenceStats {
        tracing::info!("Persistence writer started");

        while let Some(item) = self.rx.recv().await {
            match item {
                QueueItem::Record(payload) => self.write(payload).await,
                QueueItem::Stop => break,
            }
        }

        // Only retried payloads can follow the stop marker.
        loop {
            match self.rx.try_recv() {
                Ok(QueueItem::Record(payload)) => self.write(payload).await,
                Ok(QueueItem::Stop) => {}
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        tracing::info!(
            written = self.stats.written,
            retries = self.stats.retries,
            "Persistence writer shutting down"
        );
        self.stats
    }

    async fn write(&mut self, payload: String) {
        match self.store.append_upcoming(&payload) {
            Ok(()) => {
                self.stats.written += 1;
                metrics::PERSISTENCE_WRITES.inc();
            }
            Err(e) => {
                tracing::error!("Cannot append upcoming collection item: {}", e);
                self.stats.retries += 1;
                metrics::PERSISTENCE_RETRIES.inc();
                tokio::time::sleep(self.retry_delay).await;
                if self.requeue.send(QueueItem::Record(payload)).is_err() {
                    tracing::error!("Persistence queue closed, dropping item");
                }
            }
        }
    }
}

/// Create the persistence queue
///
/// Returns:
/// - `PersistenceHandle` - for enqueueing payloads (clone to share)
/// - `PersistenceWriter` - spawn with `tokio::spawn(writer.run())`
pub fn create_persistence_queue(
    store: Arc<dyn CollectionStore>,
    retry_delay: Duration,
) -> (PersistenceHandle, PersistenceWriter) {
    let (tx, rx) = mpsc::unbounded_channel();
    let writer = PersistenceWriter::new(rx, tx.clone(), store, retry_delay);
    (PersistenceHandle::new(tx), writer)
}
