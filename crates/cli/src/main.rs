//! Fire Suppression Pipeline - Main Entry Point

use clap::Parser;
use cli::{init_logging, run, Args};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    info!("=== Fire Suppression Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    run(&args)
}
