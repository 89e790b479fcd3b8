//! Sync status types and shared state handle.

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// Current sync state, readable by API handlers.
#[derive(Debug, Clone, Default)]
pub struct SyncStatus {
    pub running: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

/// Thread-safe handle for sharing sync state between the reconciler and
/// API handlers.
#[derive(Clone, Default)]
pub struct SyncStatusHandle {
    inner: Arc<RwLock<SyncStatus>>,
}

impl SyncStatusHandle {
    pub fn get(&self) -> SyncStatus {
        self.inner.read().expect("sync status poisoned").clone()
    }

    pub fn set_running(&self, running: bool) {
        let mut status = self.inner.write().expect("sync status poisoned");
        status.running = running;
    }

    /// Record a completed poll cycle.
    pub fn record_success(&self, at: DateTime<Utc>) {
        let mut status = self.inner.write().expect("sync status poisoned");
        status.last_synced_at = Some(at);
        status.last_error = None;
    }

    pub fn record_error(&self, error: String) {
        let mut status = self.inner.write().expect("sync status poisoned");
        status.last_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let handle = SyncStatusHandle::default();
        let status = handle.get();
        assert!(!status.running);
        assert!(status.last_synced_at.is_none());
        assert!(status.last_error.is_none());
    }

    #[test]
    fn test_record_success_clears_error() {
        let handle = SyncStatusHandle::default();
        handle.record_error("connection refused".to_string());
        assert_eq!(
            handle.get().last_error,
            Some("connection refused".to_string())
        );

        let now = Utc::now();
        handle.record_success(now);

        let status = handle.get();
        assert_eq!(status.last_synced_at, Some(now));
        assert!(status.last_error.is_none());
    }

    #[test]
    fn test_set_running() {
        let handle = SyncStatusHandle::default();
        handle.set_running(true);
        assert!(handle.get().running);
        handle.set_running(false);
        assert!(!handle.get().running);
    }
}
