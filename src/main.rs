//! Vanity import path server.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────────┐
//!                      │                  VANITY SERVER                    │
//!                      │                                                   │
//!   go get / browser   │  ┌─────────┐    ┌──────────┐    ┌─────────────┐   │
//!   ───────────────────┼─▶│  http   │───▶│ routing  │───▶│   render    │   │
//!                      │  │ server  │    │ mappings │    │  templates  │   │
//!                      │  └─────────┘    └──────────┘    └──────┬──────┘   │
//!                      │                                        │          │
//!   go-import doc/302  │                                        ▼          │
//!   ◀──────────────────┼──────────────────────────────── buffered response │
//!                      │                                                   │
//!                      │  ┌──────────┐ ┌──────────────┐ ┌───────────────┐  │
//!                      │  │  config  │ │observability │ │   lifecycle   │  │
//!                      │  └──────────┘ └──────────────┘ └───────────────┘  │
//!                      └───────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use vanity_server::config::load_config;
use vanity_server::lifecycle::{self, signals, Shutdown};
use vanity_server::observability::logging;

#[derive(Parser)]
#[command(name = "vanity-server")]
#[command(about = "Serves go-import meta tags for vanity import paths", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: PathBuf,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    if cli.check {
        println!(
            "{}: ok ({} mappings)",
            cli.config.display(),
            config.mappings.len()
        );
        return Ok(());
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("vanity-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config = %cli.config.display(),
        bind_address = %config.listener.bind_address,
        docs_host = %config.docs.host,
        mappings = config.mappings.len(),
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    lifecycle::serve(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
