//! HTTP client for the meeting-automation backend API.
//!
//! Thin JSON-over-HTTP wrapper with bearer-token auth. The backend owns
//! meetings, calendar events, and everything else; this client only speaks
//! the two endpoints the sync loop needs.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::meeting::Meeting;

use super::{CalendarSyncSummary, MeetingService};

/// Failure talking to the backend.
///
/// The sync loop treats every variant the same way (log, report, let the
/// next tick retry); the split exists for diagnostics.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("failed to parse backend response from {url}: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Response from the calendar sync endpoint.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CalendarSyncResponse {
    message: String,
    summary: CalendarSyncSummary,
}

/// Client for the backend REST API.
pub struct BackendClient {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl BackendClient {
    /// Create a new client for the given API base URL and bearer token.
    pub fn new(api_url: &str, api_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        }
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<T, BackendError> {
        let url = format!("{}/{}", self.api_url, path);

        let response = self
            .client
            .request(method, &url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| BackendError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(BackendError::Status { url, status, body });
        }

        serde_json::from_str(&body).map_err(|source| BackendError::InvalidResponse { url, source })
    }
}

#[async_trait]
impl MeetingService for BackendClient {
    async fn sync_calendar(&self) -> Result<CalendarSyncSummary> {
        let response: CalendarSyncResponse = self
            .request_json(reqwest::Method::POST, "calendar/sync")
            .await?;
        Ok(response.summary)
    }

    async fn list_meetings(&self) -> Result<Vec<Meeting>> {
        let meetings = self.request_json(reqwest::Method::GET, "meetings/").await?;
        Ok(meetings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> BackendClient {
        BackendClient::new(&server.url(), "test-token")
    }

    #[tokio::test]
    async fn test_sync_calendar_parses_summary() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/calendar/sync")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(
                r#"{
                    "message": "Successfully synced 3 calendar events, created 1 meetings",
                    "summary": {
                        "total_events_processed": 3,
                        "meetings_created": 1,
                        "events_with_meeting_urls": 2
                    }
                }"#,
            )
            .create_async()
            .await;

        let summary = client_for(&server).sync_calendar().await.unwrap();
        assert_eq!(summary.total_events_processed, 3);
        assert_eq!(summary.meetings_created, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_meetings_parses_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings/")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(
                r#"[{
                    "id": 7,
                    "title": "Planning",
                    "status": "scheduled",
                    "scheduled_time": "2026-08-06T09:00:00Z",
                    "duration_minutes": 45
                }]"#,
            )
            .create_async()
            .await;

        let meetings = client_for(&server).list_meetings().await.unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].id, 7);
        assert_eq!(meetings[0].title, "Planning");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings/")
            .with_status(401)
            .with_body(r#"{"detail": "Not authenticated"}"#)
            .create_async()
            .await;

        let err = client_for(&server).list_meetings().await.unwrap_err();
        let err = err.downcast::<BackendError>().unwrap();
        assert!(matches!(err, BackendError::Status { status, .. } if status == 401));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server).list_meetings().await.unwrap_err();
        let err = err.downcast::<BackendError>().unwrap();
        assert!(matches!(err, BackendError::InvalidResponse { .. }));
    }
}
