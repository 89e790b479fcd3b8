//! Meetings view endpoint.
//!
//! Serves the locally cached meeting list (GET /meetings). The cache is
//! whatever the last sync cycle saw; no backend round-trip happens here.

use crate::meeting::MeetingsCache;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;

use super::super::error::{ApiError, ApiResult};

pub fn router(cache: MeetingsCache) -> Router {
    Router::new()
        .route("/meetings", get(list_meetings))
        .with_state(cache)
}

async fn list_meetings(
    Query(params): Query<HashMap<String, String>>,
    State(cache): State<MeetingsCache>,
) -> ApiResult<Json<Value>> {
    let limit: usize = match params.get("limit") {
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::bad_request(format!("Invalid limit: {raw}")))?,
        None => 50,
    };

    let meetings = cache.all();
    let entries: Vec<Value> = meetings
        .iter()
        .take(limit)
        .map(|m| {
            json!({
                "id": m.id,
                "title": m.title,
                "status": m.status.as_str(),
                "scheduled_time": m.scheduled_time.to_rfc3339(),
                "end_time": m.end_time.map(|t| t.to_rfc3339()),
                "updated_at": m.updated_at.map(|t| t.to_rfc3339()),
                "meeting_url": m.meeting_url,
                "platform": m.platform,
                "duration_minutes": m.duration_minutes,
            })
        })
        .collect();

    Ok(Json(json!({
        "total": meetings.len(),
        "meetings": entries,
    })))
}
