//! Firn entry point.
//!
//! # Usage
//!
//! ```bash
//! # Browse the demo journals without touching disk
//! firn --store memory --seed-demo
//!
//! # Browse a redb database, newest first, logging to a file
//! firn --database ~/journals.redb --descending --log-file firn.log
//!
//! # Same, with JSON logs configured from the environment
//! FIRN_DESCENDING=true FIRN_LOG_FORMAT=json FIRN_LOG_FILE=firn.log firn
//! ```

use std::error::Error;

use clap::Parser;
use firn_core::{MemoryStore, RedbStore, StoreWriter};
use firn_tui::{Args, Runtime, StoreKind, TerminalDriver, Theme, logging, prepare_store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_format, args.log_file.as_deref())?;

    tracing::info!(store = ?args.store, "Firn starting");

    match args.store {
        StoreKind::Memory => run(MemoryStore::new(), &args).await,
        StoreKind::Redb => run(RedbStore::open(&args.database)?, &args).await,
    }
}

async fn run<S: StoreWriter>(store: S, args: &Args) -> Result<(), Box<dyn Error>> {
    prepare_store(&store, args.seed_demo)?;

    let driver = TerminalDriver::new(Theme::default())?;
    Runtime::new(driver, store, args.ui_config()).run().await?;

    tracing::info!("Firn stopped");
    Ok(())
}
