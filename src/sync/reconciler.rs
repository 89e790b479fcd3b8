//! Auto-sync reconciler.
//!
//! Keeps the local meetings view eventually consistent with the backend:
//! calendar sync, then list meetings, at a fixed cadence. A tick that
//! arrives while a cycle is still in flight is dropped, and the observer
//! is only notified when the list content actually changed since the last
//! completed cycle.
//!
//! All dependencies are injected via constructor — no concrete types hardcoded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::backend::MeetingService;

use super::observer::SyncObserver;
use super::snapshot::SyncSnapshot;
use super::status::SyncStatusHandle;

pub struct AutoSync {
    inner: Arc<SyncInner>,
    timer: Option<JoinHandle<()>>,
}

struct SyncInner {
    service: Arc<dyn MeetingService>,
    observer: Arc<dyn SyncObserver>,
    status: SyncStatusHandle,
    in_flight: AtomicBool,
    snapshot: Mutex<Option<SyncSnapshot>>,
}

impl AutoSync {
    pub fn new(
        service: Arc<dyn MeetingService>,
        observer: Arc<dyn SyncObserver>,
        status: SyncStatusHandle,
    ) -> Self {
        Self {
            inner: Arc::new(SyncInner {
                service,
                observer,
                status,
                in_flight: AtomicBool::new(false),
                snapshot: Mutex::new(None),
            }),
            timer: None,
        }
    }

    /// Begin polling: one immediate cycle, then one per interval.
    /// No-op if already started.
    pub fn start(&mut self, interval: Duration) {
        if self.is_running() {
            debug!("Auto-sync already running, ignoring start");
            return;
        }

        let inner = self.inner.clone();
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                // Cycles run as their own tasks so that stopping the timer
                // never cancels a cycle midway through a backend call.
                let inner = inner.clone();
                tokio::spawn(async move {
                    inner.poll_cycle().await;
                });
            }
        }));

        self.inner.status.set_running(true);
        info!("Auto-sync started (interval: {:?})", interval);
    }

    /// Cancel the timer. Idempotent; an in-flight cycle completes and may
    /// still notify the observer.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            self.inner.status.set_running(false);
            info!("Auto-sync stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Run one cycle immediately, outside the regular cadence. The timer is
    /// untouched. Returns false if the cycle was skipped because another
    /// one is in flight.
    pub async fn force_sync(&self) -> bool {
        self.inner.poll_cycle().await
    }
}

impl Drop for AutoSync {
    fn drop(&mut self) {
        self.stop();
    }
}

impl SyncInner {
    /// One poll cycle. Returns false if skipped by the overlap guard.
    async fn poll_cycle(&self) -> bool {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Sync tick dropped, a cycle is already in flight");
            return false;
        };

        match self.run_cycle().await {
            Ok(()) => {
                self.status.record_success(chrono::Utc::now());
            }
            Err(e) => {
                debug!("Sync cycle failed: {e:#}");
                self.status.record_error(format!("{e:#}"));
                self.observer.on_error(&e).await;
            }
        }

        true
    }

    async fn run_cycle(&self) -> Result<()> {
        // Calendar sync strictly precedes the list read so the list
        // reflects newly synced events.
        let summary = self.service.sync_calendar().await?;
        if summary.total_events_processed > 0 {
            self.observer
                .on_sync_succeeded(summary.total_events_processed)
                .await;
        }

        let meetings = self.service.list_meetings().await?;
        let snapshot = SyncSnapshot::of(&meetings);

        let changed = {
            let mut stored = self.snapshot.lock().await;
            if stored.as_ref() != Some(&snapshot) {
                *stored = Some(snapshot);
                true
            } else {
                false
            }
        };

        if changed {
            debug!("Meeting list changed ({} meetings)", meetings.len());
            self.observer.on_meetings_changed(&meetings).await;
        }

        Ok(())
    }
}

/// Overlap guard: releases the in-flight flag on every exit path.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
