use tracing_subscriber::EnvFilter;

pub mod discord;
pub mod regex;

/// Initialises stdout logging, with a default filter of INFO unless
/// overridden by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn tracing_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
