//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing` so they never mix with command
//! output on stdout. The level comes from `EXPENSE_LOG` (any `EnvFilter`
//! directive, e.g. `debug` or `expense_tracker::storage=trace`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; later calls are no-ops
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
