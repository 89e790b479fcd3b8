use clap::{Args as ClapArgs, Parser, Subcommand};

pub mod configure;
pub mod meetings;
pub mod sync;

pub use configure::handle_configure_command;
pub use meetings::handle_meetings_command;
pub use sync::handle_sync_command;

#[derive(Parser, Debug)]
#[command(name = "meetsync")]
#[command(about = "Keep a local meetings view in sync with your meeting backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print version information
    Version,
    /// Configure the backend connection interactively
    Configure,
    /// Run one sync cycle against the backend and print the result
    Sync,
    /// List meetings from the backend
    Meetings(MeetingsCliArgs),
}

#[derive(ClapArgs, Debug)]
pub struct MeetingsCliArgs {
    /// Maximum number of meetings to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}
