//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LTC_LOG=debug`.
pub const LOG_ENV: &str = "LTC_LOG";

/// Installs a stderr subscriber filtered by [`LOG_ENV`] (default `warn`).
///
/// Diagnostics never go to stdout, which carries only command output.
/// Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
