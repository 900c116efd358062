//! Command-line interface parsing and startup.

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "artemis-chat")]
#[command(version)]
#[command(about = "A terminal chat client for the Artemis assistant backend")]
#[command(
    long_about = "Artemis Chat is a terminal chat client that talks to the Artemis assistant \
backend over HTTP. It renders the conversation, keeps history across restarts, \
and lets you switch the assistant's profile and character.\n\n\
Configuration:\n\
  Reads config.toml from the platform config directory (server_url,\n\
  health_poll_secs). Command-line flags override the file.\n\n\
Environment Variables:\n\
  RUST_LOG          Diagnostic log filter (logs go to stderr)\n\n\
Commands:\n\
  /help             Show available commands\n\
  /profile <id>     Switch the assistant profile\n\
  /character <id>   Switch the assistant character\n\
  /clear            Delete the conversation history\n\
  /quit             Leave the chat"
)]
pub struct Args {
    /// Base URL of the assistant backend (overrides the config file)
    #[arg(short = 's', long, value_name = "URL")]
    pub server: Option<String>,

    /// Seconds between health probes (overrides the config file)
    #[arg(long, value_name = "SECONDS")]
    pub health_poll: Option<u64>,
}

pub async fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut config = Config::load()?;
    if let Some(server) = args.server {
        config.server_url = Some(server);
    }
    if let Some(secs) = args.health_poll {
        config.health_poll_secs = Some(secs);
    }

    run_chat(config).await
}
