//! One-shot sync command.

use anyhow::{Context, Result};

use crate::backend::{BackendClient, MeetingService};
use crate::config::Config;

pub async fn handle_sync_command() -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::new(&config.backend.api_url, &config.backend.api_token);

    let summary = client
        .sync_calendar()
        .await
        .context("Calendar sync failed")?;
    println!(
        "Synced {} calendar events ({} meetings created)",
        summary.total_events_processed, summary.meetings_created
    );

    let meetings = client
        .list_meetings()
        .await
        .context("Failed to list meetings")?;
    println!("{} meetings visible:", meetings.len());
    for meeting in &meetings {
        println!(
            "  {:>5}  {:<12} {}  {}",
            meeting.id,
            meeting.status.as_str(),
            meeting.scheduled_time.format("%Y-%m-%d %H:%M"),
            meeting.title,
        );
    }

    Ok(())
}
