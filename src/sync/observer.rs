//! Observer interface for sync notifications.

use async_trait::async_trait;

use crate::meeting::Meeting;

/// Hooks invoked by the sync loop. Every method has a no-op default, so
/// implementors only override what they care about.
///
/// `on_meetings_changed` fires only when the meeting list actually differs
/// from the previous poll; `on_sync_succeeded` fires when the backend
/// reports at least one calendar event processed; `on_error` fires once
/// per failed cycle. The loop itself never logs user-facing noise about
/// failures, so an implementor on a degraded connection can choose to stay
/// quiet.
#[async_trait]
pub trait SyncObserver: Send + Sync {
    async fn on_meetings_changed(&self, _meetings: &[Meeting]) {}

    async fn on_sync_succeeded(&self, _events_synced: u64) {}

    async fn on_error(&self, _error: &anyhow::Error) {}
}
