//! Local REST API for meetsync.
//!
//! Provides HTTP endpoints for:
//! - Sync control (force sync, status)
//! - The cached meetings view
//!
//! Bound to localhost; this is the surface a status bar or dashboard polls.

pub mod error;
pub mod routes;

use crate::config::Config;
use crate::meeting::MeetingsCache;
use crate::sync::SyncStatusHandle;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

pub use routes::sync::{ApiCommand, SyncState};

pub struct ApiServer {
    port: u16,
    sync_state: SyncState,
}

impl ApiServer {
    pub fn new(
        tx: tokio::sync::mpsc::Sender<ApiCommand>,
        status: SyncStatusHandle,
        cache: MeetingsCache,
        config: &Config,
    ) -> Self {
        Self {
            port: config.server.port,
            sync_state: SyncState {
                tx,
                status,
                cache,
                waybar_config: config.ui.waybar.clone(),
            },
        }
    }

    pub async fn start(self) -> Result<()> {
        let meetings_cache = self.sync_state.cache.clone();
        let app = Router::new()
            // Root and version endpoints
            .route("/", get(service_info))
            .route("/version", get(version))
            // Sync control endpoints
            .merge(routes::sync::router(self.sync_state))
            // Cached meetings view
            .merge(routes::meetings::router(meetings_cache))
            .layer(ServiceBuilder::new());

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /          - Service info");
        info!("  GET  /version   - Get version info");
        info!("  GET  /status    - Get sync status");
        info!("  POST /sync      - Request an immediate sync");
        info!("  GET  /meetings  - List cached meetings");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "meetsync",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "meetsync"
    }))
}
