//! Diagnostic logging to stderr. Stdout only ever carries generated output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub(crate) const LOG_ENV: &str = "ENVSEED_LOG";

pub(crate) fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
