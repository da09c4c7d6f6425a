//! Logging setup for lsp-uri
//
// Logs go to stderr so that stdout carries only converted paths.
// RUST_LOG overrides the level chosen by --verbose.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
pub fn init(verbose: bool) {
    let env_filter = match std::env::var("RUST_LOG").ok() {
        Some(val) => EnvFilter::new(val),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
