//! Structured logging setup. Logs go to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

use crate::app::config::{LogFormat, Settings};

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed when running under a test harness.
    let _ = match settings.log_format {
        LogFormat::Text => builder.without_time().try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
