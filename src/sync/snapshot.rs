//! Change-detection fingerprint over a meeting list.

use chrono::{DateTime, Utc};

use crate::meeting::{Meeting, MeetingStatus};

/// Order-independent fingerprint of a meeting list.
///
/// Two snapshots are equal iff the lists contain the same meetings with the
/// same compared fields (id, title, status, start, end, updated-at).
/// Entries are sorted by id before comparison, so a backend that returns
/// the same meetings in a different order does not register as a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSnapshot {
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SnapshotEntry {
    id: i64,
    title: String,
    status: MeetingStatus,
    scheduled_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl SyncSnapshot {
    pub fn of(meetings: &[Meeting]) -> Self {
        let mut entries: Vec<SnapshotEntry> = meetings
            .iter()
            .map(|m| SnapshotEntry {
                id: m.id,
                title: m.title.clone(),
                status: m.status,
                scheduled_time: m.scheduled_time,
                end_time: m.end_time,
                updated_at: m.updated_at,
            })
            .collect();
        entries.sort_by_key(|e| e.id);

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
            meeting_url: Some("https://meet.example.com/abc".to_string()),
            platform: Some("zoom".to_string()),
            duration_minutes: Some(60),
        }
    }

    #[test]
    fn test_identical_lists_are_equal() {
        let meetings = vec![
            meeting(1, "Standup", MeetingStatus::Scheduled),
            meeting(2, "Retro", MeetingStatus::Scheduled),
        ];

        assert_eq!(SyncSnapshot::of(&meetings), SyncSnapshot::of(&meetings));
    }

    #[test]
    fn test_reordered_list_is_equal() {
        let a = vec![
            meeting(1, "Standup", MeetingStatus::Scheduled),
            meeting(2, "Retro", MeetingStatus::Scheduled),
        ];
        let b = vec![
            meeting(2, "Retro", MeetingStatus::Scheduled),
            meeting(1, "Standup", MeetingStatus::Scheduled),
        ];

        assert_eq!(SyncSnapshot::of(&a), SyncSnapshot::of(&b));
    }

    #[test]
    fn test_status_change_is_detected() {
        let before = vec![meeting(1, "Standup", MeetingStatus::Scheduled)];
        let after = vec![meeting(1, "Standup", MeetingStatus::Completed)];

        assert_ne!(SyncSnapshot::of(&before), SyncSnapshot::of(&after));
    }

    #[test]
    fn test_title_change_is_detected() {
        let before = vec![meeting(1, "Standup", MeetingStatus::Scheduled)];
        let after = vec![meeting(1, "Standup (moved)", MeetingStatus::Scheduled)];

        assert_ne!(SyncSnapshot::of(&before), SyncSnapshot::of(&after));
    }

    #[test]
    fn test_time_change_is_detected() {
        let before = vec![meeting(1, "Standup", MeetingStatus::Scheduled)];
        let mut moved = meeting(1, "Standup", MeetingStatus::Scheduled);
        moved.scheduled_time = Utc.with_ymd_and_hms(2026, 8, 6, 11, 0, 0).unwrap();

        assert_ne!(SyncSnapshot::of(&before), SyncSnapshot::of(&[moved]));
    }

    #[test]
    fn test_membership_change_is_detected() {
        let before = vec![meeting(1, "Standup", MeetingStatus::Scheduled)];
        let after = vec![
            meeting(1, "Standup", MeetingStatus::Scheduled),
            meeting(2, "Retro", MeetingStatus::Scheduled),
        ];

        assert_ne!(SyncSnapshot::of(&before), SyncSnapshot::of(&after));
    }

    #[test]
    fn test_uncompared_fields_do_not_trigger_change() {
        let a = vec![meeting(1, "Standup", MeetingStatus::Scheduled)];
        let mut other = meeting(1, "Standup", MeetingStatus::Scheduled);
        other.meeting_url = Some("https://meet.example.com/xyz".to_string());
        other.platform = Some("teams".to_string());

        assert_eq!(SyncSnapshot::of(&a), SyncSnapshot::of(&[other]));
    }

    #[test]
    fn test_empty_list() {
        let snapshot = SyncSnapshot::of(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, SyncSnapshot::of(&[]));
    }
}
