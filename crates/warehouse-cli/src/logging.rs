//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSection;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "WAREHOUSE_LOG";

/// Initialize tracing for the process. Logs go to stderr.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(settings: &LoggingSection) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
