use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Settings, DEFAULT_LOG_FILTER};

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call more than once.
pub(crate) fn init(settings: &Settings) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(&settings.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(settings.color)
            .init();
    });
}
