//! Diagnostic logging setup.
//!
//! The library crates only emit `tracing` events. Binaries call
//! [`init_logging`] once to print them to stderr, filtered by `RUST_LOG`
//! (for example `RUST_LOG=chatcmd_parser=trace`).

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset. Calling this again after a
/// subscriber is installed does nothing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
