//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "THEME_TOGGLE_LOG";

/// Initialize the logging subsystem
///
/// Logs go to stderr so rendered HTML on stdout stays clean.
/// Log level is controlled by the `THEME_TOGGLE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// THEME_TOGGLE_LOG=debug theme-toggle toggle
/// ```
pub fn init() {
    // Default to warn, allow override via THEME_TOGGLE_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
}
