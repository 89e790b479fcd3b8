//! Backend meeting service abstraction.
//!
//! The sync loop consumes exactly two operations from the backend:
//! triggering a calendar sync and listing the current meetings. Both are
//! behind a trait so the loop can be driven by fakes in tests.

pub mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::meeting::Meeting;

pub use client::{BackendClient, BackendError};

/// Outcome of a calendar sync pass on the backend.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CalendarSyncSummary {
    pub total_events_processed: u64,
    pub meetings_created: u64,
    #[serde(default)]
    pub events_with_meeting_urls: u64,
}

/// The two backend operations the sync loop depends on.
///
/// `sync_calendar` asks the backend to pull upstream calendar events and
/// materialize/update the corresponding meetings; `list_meetings` returns
/// the full meeting set visible to the authenticated caller. Within one
/// sync cycle the calendar sync always runs first, so the list read
/// reflects newly synced events.
#[async_trait]
pub trait MeetingService: Send + Sync {
    async fn sync_calendar(&self) -> Result<CalendarSyncSummary>;

    async fn list_meetings(&self) -> Result<Vec<Meeting>>;
}
