// src/io/logging.rs

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug` shows every forecast
/// line and transfer); without it only `info` and above are shown.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
