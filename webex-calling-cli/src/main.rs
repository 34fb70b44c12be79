//! `wxc` - Webex Calling administration from the command line.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use webex_calling_client::{ClientConfig, WebexCallingApi};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    debug!(base_url = %cli.base_url, "Using Webex API");
    let config = ClientConfig::new(cli.token).with_base_url(cli.base_url);
    let api = WebexCallingApi::new(config).context("Failed to create Webex client")?;

    match cli.command {
        Commands::Locations(cmd) => commands::locations::handle(&api, cmd).await,
        Commands::People(cmd) => commands::people::handle(&api, cmd).await,
        Commands::Numbers(cmd) => commands::numbers::handle(&api, cmd).await,
        Commands::Queues(cmd) => commands::queues::handle(&api, cmd).await,
        Commands::Calls(cmd) => commands::calls::handle(&api, cmd).await,
        Commands::Webhooks(cmd) => commands::webhooks::handle(&api, cmd).await,
    }
}
