//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `MIAM_LOG` environment variable for filter directives,
/// e.g. `MIAM_LOG=miam_prediction=debug`.
/// Falls back to the configured level (`miam=info` by default) if `MIAM_LOG`
/// is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let fallback = logging.filter_directive();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
        install(filter);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter)));
}

fn install(filter: EnvFilter) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
    if result.is_err() {
        // Another subscriber was installed by the host application.
        ::tracing::debug!("global tracing subscriber already set");
    }
}
