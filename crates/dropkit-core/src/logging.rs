//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,dropkit_ui=debug,dropkit_core=debug";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the global fmt subscriber with a custom fallback filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::trace!("global subscriber already installed");
    }
}
