//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "INCOME_PLANNER_LOG";

/// Initialize the global tracing subscriber.
///
/// `INCOME_PLANNER_LOG` (e.g. `income_planner=debug`) takes precedence over
/// `config.filter`. Output goes to stderr so stdout stays free for results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&config.filter))
            .unwrap_or_else(|_| EnvFilter::new("income_planner=info"));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
    });
}
