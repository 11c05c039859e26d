//! Tracing subscriber setup.
//!
//! Logs always go to stderr so translations printed on stdout stay pipeable.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default filter for the web server.
pub const SERVER_FILTER: &str = "nusa_translator=info,tower_http=info";

/// Default filter for terminal commands, where stdout carries the result.
pub const CLI_FILTER: &str = "nusa_translator=warn";

/// Installs the global subscriber. Later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
