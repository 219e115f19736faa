//! Auto-save: debounced, cancellable persistence scheduling.
//!
//! DESIGN
//! ======
//! Each `schedule` call aborts any pending timer task and spawns a fresh
//! sleep-then-save, so within a debounce window only the most recent
//! snapshot is ever persisted (last-write-wins, never queued or
//! overlapping). Save failures are logged, forwarded on the error channel,
//! and never retried — the in-memory scene is untouched and the next
//! successful save carries all interim changes. Manual saves bypass the
//! debounce and cancel a pending timer only after they succeed, so a failed
//! manual save cannot suppress a scheduled flush.

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::error;

use crate::consts::AUTOSAVE_DEBOUNCE_MS;
use crate::element::FloorPlanElement;
use crate::store::{FloorPlanStore, StoreError, VenueId, partition_elements};

/// Debounced scheduler in front of a [`FloorPlanStore`].
pub struct AutosaveScheduler {
    store: Arc<dyn FloorPlanStore>,
    venue: VenueId,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
    error_tx: UnboundedSender<StoreError>,
    error_rx: Option<UnboundedReceiver<StoreError>>,
}

impl AutosaveScheduler {
    /// Scheduler with the default 2000 ms debounce.
    #[must_use]
    pub fn new(store: Arc<dyn FloorPlanStore>, venue: VenueId) -> Self {
        Self::with_debounce(store, venue, Duration::from_millis(AUTOSAVE_DEBOUNCE_MS))
    }

    /// Scheduler with a custom debounce interval.
    #[must_use]
    pub fn with_debounce(store: Arc<dyn FloorPlanStore>, venue: VenueId, debounce: Duration) -> Self {
        let (error_tx, error_rx) = mpsc::unbounded_channel();
        Self {
            store,
            venue,
            debounce,
            pending: None,
            error_tx,
            error_rx: Some(error_rx),
        }
    }

    /// Take the receiver on which failed debounced saves are reported.
    /// Yields `Some` on the first call only.
    pub fn take_errors(&mut self) -> Option<UnboundedReceiver<StoreError>> {
        self.error_rx.take()
    }

    /// Schedule `snapshot` for persistence after the debounce interval.
    ///
    /// Replaces any pending timer: rapid repeated calls persist only the
    /// most recent snapshot.
    pub fn schedule(&mut self, snapshot: Vec<FloorPlanElement>) {
        self.cancel();

        let store = Arc::clone(&self.store);
        let venue = self.venue;
        let debounce = self.debounce;
        let error_tx = self.error_tx.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let records = partition_elements(&snapshot);
            if let Err(e) = store.save(venue, &records).await {
                error!(error = %e, venue = %venue, "auto-save failed");
                let _send = error_tx.send(e);
            }
        }));
    }

    /// Abort any pending timer without saving.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a debounced save is currently pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Save `snapshot` immediately, bypassing the debounce.
    ///
    /// On success any pending timer is cancelled so a stale debounced
    /// snapshot cannot overwrite this one. On failure the timer is left
    /// alone and the error returns to the caller.
    ///
    /// # Errors
    ///
    /// Returns the storage collaborator's error unchanged; nothing is
    /// retried.
    pub async fn save_now(&mut self, snapshot: &[FloorPlanElement]) -> Result<(), StoreError> {
        let records = partition_elements(snapshot);
        self.store.save(self.venue, &records).await?;
        self.cancel();
        Ok(())
    }
}

impl Drop for AutosaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
