//! # Registry Node
//!
//! Serves registry commands from stdin. Responses go to stdout, logs to
//! stderr.

use anyhow::{Context, Result};
use registry_node::{open_ledger, LoggingConfig, NodeConfig, NodeRuntime};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LoggingConfig::from_env().max_level())
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = NodeConfig::from_env();
    config.validate().context("invalid node configuration")?;

    let ledger = open_ledger(&config.storage).context("failed to open ledger")?;
    info!(backend = %ledger.kind(), "Ledger ready");

    let mut runtime = NodeRuntime::new(ledger);
    // validate() guarantees a seed
    let seed = config.bootstrap.seed.as_deref().unwrap_or_default();
    if runtime.bootstrap(seed).context("bootstrap failed")? {
        info!("Counter seed written");
    }

    info!("Node is running. Reading commands from stdin, Ctrl+C to stop.");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = runtime.run(stdin, stdout) => {
            let handled = result.context("command loop failed")?;
            info!(handled, "Node stopped");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            warn!("Shutdown signal received");
        }
    }

    Ok(())
}
