//! Sidecar entry point.

use anyhow::Context;
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sidecar_demo::api::create_router;
use sidecar_demo::config::Config;
use sidecar_demo::server::Server;
use sidecar_demo::utils::shutdown_signal;

/// Minimal sidecar exposing a health check and a test endpoint on :8060.
#[derive(Parser, Debug)]
#[command(name = "sidecar-demo")]
#[command(version, about)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let (config, rejected) = Config::load_or_default();
    init_logging(&config, args.verbose);

    if let Some(e) = rejected {
        let e = anyhow::Error::new(e);
        warn!(error = %format!("{e:#}"), "ignoring logging configuration, using defaults");
    }

    if let Err(e) = run(&config).await {
        error!(error = %format!("{e:#}"), "fatal: sidecar failed");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let router = create_router();
    let server = Server::bind(config.listen_addr())
        .await
        .context("failed to start listener")?;

    server.run(router, shutdown_signal()).await?;

    Ok(())
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sidecar_demo=debug,info")
    } else {
        EnvFilter::new(&config.rust_log)
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
