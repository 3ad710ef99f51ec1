//! Process logging bootstrap.
//!
//! Host processes rarely give plugins a logging story worth keeping, so the
//! facade installs its own `tracing` subscriber. The `TICKGATE_LOG`
//! environment variable carries the filter directive (standard
//! `tracing-subscriber` env-filter syntax), defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter directive.
pub const LOG_ENV: &str = "TICKGATE_LOG";

/// Install the global fmt subscriber. Idempotent: a second call (or an
/// already-installed subscriber from the host) is left in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
