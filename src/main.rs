use anyhow::Result;
use clap::Parser;
use meetsync::{
    app,
    cli::{handle_configure_command, handle_meetings_command, handle_sync_command, Cli, CliCommand},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("meetsync {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(CliCommand::Configure) => {
            handle_configure_command()?;
            return Ok(());
        }
        Some(CliCommand::Sync) => {
            handle_sync_command().await?;
            return Ok(());
        }
        Some(CliCommand::Meetings(args)) => {
            handle_meetings_command(args).await?;
            return Ok(());
        }
        None => {}
    }

    app::run_service().await
}
