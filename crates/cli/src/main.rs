//! # subsweep
//!
//! Maintenance daemon for non-production subscriptions: instance cleanup,
//! dangling-DNS pruning, and expiration tagging.

mod bootstrap;
mod di;

use clap::Parser;
use subsweep_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "subsweep")]
#[command(version)]
#[command(about = "Sweeps abandoned resource groups, DNS records and expirations")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the collaborator snapshot file
    #[arg(long)]
    snapshot: Option<String>,

    /// Run a single pass of every active service, then exit
    #[arg(long)]
    run_once: bool,

    /// Perform deletions instead of the default dry run
    #[arg(long)]
    execute: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        run_once: cli.run_once,
        execute: cli.execute.then_some(true),
        snapshot_path: cli.snapshot,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        execute = config.execution.instance_cleanup.execute_cleanup,
        run_once = cli.run_once,
        "subsweep starting"
    );

    let services = di::build_services(&config)?;
    let handles = services.runner.start();
    if handles.is_empty() {
        info!("no services active, exiting");
        return Ok(());
    }

    let mut all_jobs = futures::future::join_all(handles);
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, finishing in-flight passes");
            services.shutdown.cancel();
        }
        _ = &mut all_jobs => {
            info!("all services completed");
            return Ok(());
        }
    }

    all_jobs.await;
    info!("shutdown complete");
    Ok(())
}
