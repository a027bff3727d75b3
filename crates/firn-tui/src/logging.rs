//! Log setup.
//!
//! The UI owns stdout, so logs only go to a file. `RUST_LOG` overrides the
//! configured level.

use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use clap::ValueEnum;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Log record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Log setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    Open {
        /// Requested log file.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a subscriber appending `format` records to `file` at `level`.
///
/// Does nothing and returns `Ok(false)` when `file` is `None`.
pub fn init(level: &str, format: LogFormat, file: Option<&Path>) -> Result<bool, LoggingError> {
    let Some(path) = file else {
        return Ok(false);
    };

    let file = open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(layer(format, file)).with(filter).try_init()?;

    Ok(true)
}

/// Formatting layer writing to `file`.
fn layer<S>(format: LogFormat, file: File) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let writer = Mutex::new(file);
    match format {
        LogFormat::Text => fmt::layer().with_ansi(false).with_writer(writer).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    }
}

fn open(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open { path: path.display().to_string(), source })
}
