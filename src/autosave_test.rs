#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::element::FloorPlanElement;
use crate::store::FloorPlanRecords;

// =============================================================
// Helpers
// =============================================================

/// Store double that records every save and can be told to fail.
#[derive(Default)]
struct RecordingStore {
    saves: Mutex<Vec<FloorPlanRecords>>,
    fail: AtomicBool,
}

impl RecordingStore {
    fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    fn last_save(&self) -> Option<FloorPlanRecords> {
        self.saves.lock().unwrap().last().cloned()
    }

    fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl FloorPlanStore for RecordingStore {
    async fn load(&self, venue: VenueId) -> Result<FloorPlanRecords, StoreError> {
        Err(StoreError::NotFound { venue })
    }

    async fn save(&self, _venue: VenueId, records: &FloorPlanRecords) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("disk full".to_owned()));
        }
        self.saves.lock().unwrap().push(records.clone());
        Ok(())
    }
}

fn scheduler(store: &Arc<RecordingStore>) -> AutosaveScheduler {
    AutosaveScheduler::with_debounce(
        Arc::clone(store) as Arc<dyn FloorPlanStore>,
        VenueId::new_v4(),
        Duration::from_millis(100),
    )
}

fn snapshot_at(x: f64) -> Vec<FloorPlanElement> {
    let mut t = FloorPlanElement::new_table("T");
    t.x = x;
    vec![t]
}

/// Let the paused clock pass the debounce window and the timer task run.
async fn run_past_debounce() {
    tokio::time::sleep(Duration::from_millis(150)).await;
}

// =============================================================
// Debounce behavior
// =============================================================

#[tokio::test(start_paused = true)]
async fn saves_after_debounce_interval() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    assert_eq!(store.save_count(), 0);

    run_past_debounce().await;
    assert_eq!(store.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn does_not_save_before_interval() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(store.save_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn rapid_reschedules_persist_only_latest_snapshot() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    for i in 0..5 {
        sched.schedule(snapshot_at(f64::from(i)));
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    run_past_debounce().await;

    assert_eq!(store.save_count(), 1);
    assert_eq!(store.last_save().unwrap().tables[0].x, 4.0);
}

#[tokio::test(start_paused = true)]
async fn reschedule_restarts_the_timer() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    tokio::time::sleep(Duration::from_millis(80)).await;
    sched.schedule(snapshot_at(2.0));
    tokio::time::sleep(Duration::from_millis(80)).await;
    // 160 ms since the first schedule, but only 80 since the second.
    assert_eq!(store.save_count(), 0);

    run_past_debounce().await;
    assert_eq!(store.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_prevents_the_save() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    sched.cancel();
    run_past_debounce().await;

    assert_eq!(store.save_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_without_pending_is_noop() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);
    sched.cancel();
    assert!(!sched.is_pending());
}

#[tokio::test(start_paused = true)]
async fn is_pending_tracks_timer_state() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    assert!(!sched.is_pending());
    sched.schedule(snapshot_at(1.0));
    assert!(sched.is_pending());
    run_past_debounce().await;
    assert!(!sched.is_pending());
}

#[tokio::test(start_paused = true)]
async fn schedule_after_flush_saves_again() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    run_past_debounce().await;
    sched.schedule(snapshot_at(2.0));
    run_past_debounce().await;

    assert_eq!(store.save_count(), 2);
    assert_eq!(store.last_save().unwrap().tables[0].x, 2.0);
}

// =============================================================
// Failure handling
// =============================================================

#[tokio::test(start_paused = true)]
async fn failed_save_is_reported_on_error_channel() {
    let store = Arc::new(RecordingStore::default());
    store.set_failing(true);
    let mut sched = scheduler(&store);
    let mut errors = sched.take_errors().unwrap();

    sched.schedule(snapshot_at(1.0));
    run_past_debounce().await;

    let err = errors.try_recv().unwrap();
    assert!(matches!(err, StoreError::Backend(_)));
}

#[tokio::test(start_paused = true)]
async fn failed_save_is_not_retried() {
    let store = Arc::new(RecordingStore::default());
    store.set_failing(true);
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    run_past_debounce().await;
    run_past_debounce().await;

    assert_eq!(store.save_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn next_save_after_failure_carries_latest_snapshot() {
    let store = Arc::new(RecordingStore::default());
    store.set_failing(true);
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    run_past_debounce().await;

    store.set_failing(false);
    sched.schedule(snapshot_at(2.0));
    run_past_debounce().await;

    assert_eq!(store.save_count(), 1);
    assert_eq!(store.last_save().unwrap().tables[0].x, 2.0);
}

#[tokio::test(start_paused = true)]
async fn take_errors_yields_once() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);
    assert!(sched.take_errors().is_some());
    assert!(sched.take_errors().is_none());
}

// =============================================================
// Manual save
// =============================================================

#[tokio::test(start_paused = true)]
async fn save_now_bypasses_debounce() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.save_now(&snapshot_at(1.0)).await.unwrap();
    assert_eq!(store.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn successful_save_now_cancels_pending_timer() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    sched.save_now(&snapshot_at(2.0)).await.unwrap();
    run_past_debounce().await;

    // The stale debounced snapshot never overwrites the manual save.
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.last_save().unwrap().tables[0].x, 2.0);
}

#[tokio::test(start_paused = true)]
async fn failed_save_now_leaves_pending_timer_alone() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    sched.schedule(snapshot_at(1.0));
    store.set_failing(true);
    let result = sched.save_now(&snapshot_at(2.0)).await;
    assert!(result.is_err());
    assert!(sched.is_pending());

    store.set_failing(false);
    run_past_debounce().await;
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.last_save().unwrap().tables[0].x, 1.0);
}

#[tokio::test(start_paused = true)]
async fn save_now_partitions_the_snapshot() {
    let store = Arc::new(RecordingStore::default());
    let mut sched = scheduler(&store);

    let mut elements = snapshot_at(1.0);
    elements.push(FloorPlanElement::new_zone("Z"));
    sched.save_now(&elements).await.unwrap();

    let saved = store.last_save().unwrap();
    assert_eq!(saved.tables.len(), 1);
    assert_eq!(saved.zones.len(), 1);
}

// =============================================================
// Drop
// =============================================================

#[tokio::test(start_paused = true)]
async fn drop_aborts_pending_timer() {
    let store = Arc::new(RecordingStore::default());
    {
        let mut sched = scheduler(&store);
        sched.schedule(snapshot_at(1.0));
    }
    run_past_debounce().await;
    assert_eq!(store.save_count(), 0);
}
