//! Command-line options.
//!
//! Every option can also be set through a `FIRN_*` environment variable;
//! flags win over the environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use firn_app::UiConfig;
use firn_core::SortOrder;

use crate::logging::LogFormat;

/// Store backend to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Volatile in-process store. Empty unless `--seed-demo` is given.
    Memory,
    /// Durable redb database file.
    Redb,
}

/// Firn terminal journal browser
#[derive(Parser, Debug, Clone)]
#[command(name = "firn")]
#[command(about = "Browse journals and their entries in the terminal")]
#[command(version)]
pub struct Args {
    /// Store backend
    #[arg(long, value_enum, env = "FIRN_STORE", default_value = "redb")]
    pub store: StoreKind,

    /// Path to the redb database (created if missing)
    #[arg(long, env = "FIRN_DATABASE_PATH", default_value = "firn.redb")]
    pub database: PathBuf,

    /// Populate the store with demo journals when it is empty
    #[arg(long, env = "FIRN_SEED_DEMO")]
    pub seed_demo: bool,

    /// List newest journals and entries first
    #[arg(long, env = "FIRN_DESCENDING")]
    pub descending: bool,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence.
    #[arg(long, env = "FIRN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Write logs to this file. Logging is off without it, since the
    /// terminal is owned by the UI.
    #[arg(long, env = "FIRN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log record layout
    #[arg(long, value_enum, env = "FIRN_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

impl Args {
    /// Listing direction selected by `--descending`.
    pub fn order(&self) -> SortOrder {
        if self.descending { SortOrder::Descending } else { SortOrder::Ascending }
    }

    /// UI configuration for these options.
    pub fn ui_config(&self) -> UiConfig {
        UiConfig::default().with_order(self.order())
    }
}
