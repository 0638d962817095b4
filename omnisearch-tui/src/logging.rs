//! File-backed tracing subscriber.
//!
//! The terminal belongs to the UI, so log records go to the configured file.
//! Verbosity follows `RUST_LOG`, defaulting to `omnisearch_tui=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to init subscriber: {0}")]
    Init(String),
}

pub fn init_logging(path: &Path) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("omnisearch_tui=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(log_path = %path.display(), "logging initialized");
    Ok(())
}
