//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "DNALENS_LOG";

/// Initialize logging to stderr.
///
/// `level` (from `--log-level`) wins over `DNALENS_LOG`; with neither set only
/// warnings from dnalens crates are shown. Calling this more than once is a no-op.
pub fn init_tracing(level: Option<&str>) {
    INIT.call_once(|| {
        let filter = match level {
            Some(level) => EnvFilter::new(format!("dnalens={level}")),
            None => EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new("dnalens=warn")),
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
