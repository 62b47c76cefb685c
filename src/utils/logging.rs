// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Sets up tracing for the CLI.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` when
/// the run was started with `--debug`. Logs go to stderr so stdout carries
/// only the JSON results.
pub fn setup_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging setup complete.");
}
