//! Logging setup shared by the binaries.
//!
//! Output goes to stderr so stdout stays free for MCP traffic and demo listings.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global `tracing` subscriber writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init();
}
