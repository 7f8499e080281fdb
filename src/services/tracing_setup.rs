//! Tracing subscriber setup
//!
//! Shared tracing configuration used by both the main application and
//! tests. Output goes to a log file only; the terminal stays reserved
//! for the UI.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// Filtering is environment-based (RUST_LOG) with a DEBUG default.
/// Returns false when the log file could not be created; the viewer
/// then runs without logging rather than failing startup.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).init();
    true
}

/// Build a subscriber that writes to the given file.
///
/// This is the core subscriber configuration shared between production and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(tracing::Level::DEBUG.into())
        // Suppress noisy TLS handshake logs
        .add_directive("rustls=info".parse().unwrap());

    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
