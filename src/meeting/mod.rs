//! Meeting domain types and the shared local view.
//!
//! Meetings are produced and owned by the backend; this process only ever
//! holds a read-only cached copy, replaced wholesale when a sync cycle
//! detects a change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Lifecycle status of a meeting, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A meeting as served by the backend's meetings endpoint.
///
/// Fields beyond the identity/status/time set are carried for display but
/// do not participate in change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    pub status: MeetingStatus,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

/// Thread-safe handle to the locally cached meeting list, shared between
/// the sync loop (writer) and API handlers (readers).
#[derive(Clone, Default)]
pub struct MeetingsCache {
    inner: Arc<RwLock<Vec<Meeting>>>,
}

impl MeetingsCache {
    pub fn replace(&self, meetings: Vec<Meeting>) {
        let mut cached = self.inner.write().expect("meetings cache poisoned");
        *cached = meetings;
    }

    pub fn all(&self) -> Vec<Meeting> {
        self.inner.read().expect("meetings cache poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("meetings cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meeting(id: i64, title: &str, status: MeetingStatus) -> Meeting {
        Meeting {
            id,
            title: title.to_string(),
            status,
            scheduled_time: Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap(),
            end_time: None,
            updated_at: None,
            meeting_url: None,
            platform: None,
            duration_minutes: Some(60),
        }
    }

    #[test]
    fn test_meeting_status_as_str() {
        assert_eq!(MeetingStatus::Scheduled.as_str(), "scheduled");
        assert_eq!(MeetingStatus::InProgress.as_str(), "in_progress");
        assert_eq!(MeetingStatus::Completed.as_str(), "completed");
        assert_eq!(MeetingStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_meeting_status_serialization() {
        let status = MeetingStatus::InProgress;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: MeetingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, MeetingStatus::Cancelled);
    }

    #[test]
    fn test_meeting_deserializes_backend_payload() {
        let payload = r#"{
            "id": 42,
            "title": "Weekly standup",
            "status": "scheduled",
            "meeting_url": "https://meet.example.com/abc",
            "platform": "google_meet",
            "scheduled_time": "2026-08-06T10:00:00Z",
            "duration_minutes": 30,
            "updated_at": "2026-08-05T18:30:00Z"
        }"#;

        let meeting: Meeting = serde_json::from_str(payload).unwrap();
        assert_eq!(meeting.id, 42);
        assert_eq!(meeting.title, "Weekly standup");
        assert_eq!(meeting.status, MeetingStatus::Scheduled);
        assert_eq!(meeting.platform.as_deref(), Some("google_meet"));
        assert_eq!(meeting.duration_minutes, Some(30));
        assert!(meeting.end_time.is_none());
    }

    #[test]
    fn test_cache_replace_and_read() {
        let cache = MeetingsCache::default();
        assert!(cache.is_empty());

        cache.replace(vec![
            meeting(1, "Standup", MeetingStatus::Scheduled),
            meeting(2, "Retro", MeetingStatus::Completed),
        ]);

        assert_eq!(cache.len(), 2);
        let all = cache.all();
        assert_eq!(all[0].title, "Standup");
        assert_eq!(all[1].status, MeetingStatus::Completed);
    }
}
