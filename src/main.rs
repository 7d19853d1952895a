//! Entry point for the `funcseq` demonstration binary.

use anyhow::Context;
use clap::Parser;
use funcseq::demo::{Cli, DemoConfig, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DemoConfig::from_env().context("failed to load configuration")?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter: {}", config.log_filter))?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(?config, "configuration loaded");

    for line in run(&cli.command, &config) {
        println!("{line}");
    }

    Ok(())
}
