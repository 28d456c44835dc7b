//! Logging initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logging system
///
/// The filter level comes from `LONGTAIL_LOG_LEVEL` (default `info`), unless
/// a standard `RUST_LOG` directive set is present, which takes precedence.
pub fn init_logging() {
    let level = std::env::var("LONGTAIL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    // try_init: embedding applications may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
