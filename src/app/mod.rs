use crate::api::{ApiCommand, ApiServer};
use crate::backend::{BackendClient, MeetingService};
use crate::config::Config;
use crate::meeting::{Meeting, MeetingsCache};
use crate::sync::{AutoSync, SyncObserver, SyncStatusHandle};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Observer wired into the running service: keeps the shared meetings
/// cache current and logs sync activity.
///
/// Errors are logged at debug level only; on a degraded connection the
/// loop fails every tick, and the status endpoint already surfaces the
/// last error to anyone who asks.
struct ServiceObserver {
    cache: MeetingsCache,
}

#[async_trait]
impl SyncObserver for ServiceObserver {
    async fn on_meetings_changed(&self, meetings: &[Meeting]) {
        info!("Meeting list changed ({} meetings)", meetings.len());
        self.cache.replace(meetings.to_vec());
    }

    async fn on_sync_succeeded(&self, events_synced: u64) {
        info!("Calendar sync processed {} events", events_synced);
    }

    async fn on_error(&self, error: &anyhow::Error) {
        debug!("Sync failed: {error:#}");
    }
}

pub async fn run_service() -> Result<()> {
    info!("Starting meetsync service");

    let config = Config::load()?;
    if config.backend.api_token.is_empty() {
        warn!("No API token configured; run `meetsync configure` if the backend requires auth");
    }

    let (tx, mut rx) = mpsc::channel::<ApiCommand>(10);

    let service: Arc<dyn MeetingService> = Arc::new(BackendClient::new(
        &config.backend.api_url,
        &config.backend.api_token,
    ));
    let cache = MeetingsCache::default();
    let status = SyncStatusHandle::default();
    let observer = Arc::new(ServiceObserver {
        cache: cache.clone(),
    });

    let mut auto_sync = AutoSync::new(service, observer, status.clone());

    let api_server = ApiServer::new(tx, status, cache, &config);
    tokio::spawn(async move {
        if let Err(e) = api_server.start().await {
            error!("API server failed: {}", e);
        }
    });

    if config.sync.enabled {
        auto_sync.start(Duration::from_millis(config.sync.interval_ms));
    } else {
        info!("Auto-sync disabled in config; use POST /sync to sync manually");
    }

    info!("meetsync is ready!");
    info!(
        "Check sync state: curl http://127.0.0.1:{}/status",
        config.server.port
    );

    while let Some(command) = rx.recv().await {
        match command {
            ApiCommand::ForceSync => {
                if auto_sync.force_sync().await {
                    info!("Manual sync completed");
                } else {
                    info!("Manual sync skipped, a cycle is already in flight");
                }
            }
        }
    }

    Ok(())
}
