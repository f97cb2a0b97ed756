//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the QFD tracing/logging system.
///
/// Reads the `QFD_LOG` environment variable for per-module log levels,
/// e.g. `QFD_LOG=qfd_analysis=debug,qfd_core=info`.
///
/// Falls back to `qfd=info` if `QFD_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("QFD_LOG").unwrap_or_else(|_| EnvFilter::new("qfd=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
