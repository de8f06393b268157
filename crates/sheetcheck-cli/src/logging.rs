//! Logging setup.
//!
//! Log lines go to stderr so JSON output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen from `--verbose`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .init();
}
