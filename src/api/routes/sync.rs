//! Sync control endpoints.
//!
//! Provides HTTP endpoints for:
//! - Requesting an out-of-cadence sync (POST /sync)
//! - Getting sync status (GET /status)

use crate::config::WaybarConfig;
use crate::meeting::MeetingsCache;
use crate::sync::SyncStatusHandle;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::info;

use super::super::error::{ApiError, ApiResult};

#[derive(Clone)]
pub enum ApiCommand {
    /// Run one sync cycle outside the regular cadence.
    ForceSync,
}

/// Shared state for sync routes.
#[derive(Clone)]
pub struct SyncState {
    pub tx: mpsc::Sender<ApiCommand>,
    pub status: SyncStatusHandle,
    pub cache: MeetingsCache,
    pub waybar_config: WaybarConfig,
}

pub fn router(state: SyncState) -> Router {
    Router::new()
        .route("/sync", post(force_sync))
        .route("/status", get(sync_status))
        .with_state(state)
}

/// Requests one immediate sync cycle.
///
/// The cycle is still subject to the in-flight guard: if a poll is already
/// running, the request is dropped by the reconciler.
async fn force_sync(State(state): State<SyncState>) -> ApiResult<Json<Value>> {
    info!("Manual sync requested via API");

    state
        .tx
        .send(ApiCommand::ForceSync)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to send sync command: {e}")))?;

    // Small delay so a fast cycle is reflected in the returned status.
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    let status = state.status.get();
    Ok(Json(json!({
        "success": true,
        "message": "Sync requested",
        "last_synced_at": status.last_synced_at.map(|t| t.to_rfc3339()),
        "last_error": status.last_error,
    })))
}

/// Gets the current sync status.
///
/// # Query Parameters
/// - `style=waybar` - Returns response formatted for Waybar integration
async fn sync_status(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<SyncState>,
) -> Json<Value> {
    let status = state.status.get();
    let degraded = status.last_error.is_some();

    // Waybar style response
    if params.get("style") == Some(&"waybar".to_string()) {
        let waybar = &state.waybar_config;
        let (text, class, tooltip) = if degraded {
            (
                waybar.error_text.clone(),
                "meetsync-error".to_string(),
                waybar.error_tooltip.clone(),
            )
        } else {
            let tooltip = match status.last_synced_at {
                Some(at) => format!("{} (last sync {})", waybar.synced_tooltip, at.format("%H:%M:%S")),
                None => waybar.synced_tooltip.clone(),
            };
            (waybar.synced_text.clone(), "meetsync-synced".to_string(), tooltip)
        };

        return Json(json!({
            "text": text,
            "class": class,
            "tooltip": tooltip,
        }));
    }

    Json(json!({
        "running": status.running,
        "last_synced_at": status.last_synced_at.map(|t| t.to_rfc3339()),
        "last_error": status.last_error,
        "meeting_count": state.cache.len(),
    }))
}
