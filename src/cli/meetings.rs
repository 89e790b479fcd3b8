//! Meetings listing command.

use anyhow::{Context, Result};

use crate::backend::{BackendClient, MeetingService};
use crate::config::Config;

use super::MeetingsCliArgs;

pub async fn handle_meetings_command(args: MeetingsCliArgs) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::new(&config.backend.api_url, &config.backend.api_token);

    let meetings = client
        .list_meetings()
        .await
        .context("Failed to list meetings")?;

    if meetings.is_empty() {
        println!("No meetings found");
        return Ok(());
    }

    for meeting in meetings.iter().take(args.limit) {
        println!(
            "{:>5}  {:<12} {}  {}",
            meeting.id,
            meeting.status.as_str(),
            meeting.scheduled_time.format("%Y-%m-%d %H:%M"),
            meeting.title,
        );
    }

    if meetings.len() > args.limit {
        println!("… and {} more (use --limit)", meetings.len() - args.limit);
    }

    Ok(())
}
