//! # picoventctl — picovent command-line client
//!
//! Loads configuration, installs logging on stderr and runs one command.

use clap::Parser;
use picoventctl::cli::Cli;
use picoventctl::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = &cli.url {
        config.set_base_url(url.as_str())?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(base_url = %config.device.base_url, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    picoventctl::run(&cli.command, &config, &mut stdout).await
}
