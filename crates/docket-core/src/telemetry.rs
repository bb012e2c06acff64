//! Tracing subscriber setup for applications embedding the authorization engine.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global tracing subscriber with a reloadable filter starting at `debug`.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing() -> anyhow::Result<FilterHandle> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    Ok(filter_handle)
}

/// ## Summary
/// Replaces the active filter with the level from configuration.
///
/// An unparsable level keeps the current filter and logs a warning.
pub fn apply_logging_config(handle: &FilterHandle, logging: &LoggingConfig) {
    if let Ok(filter) = EnvFilter::try_new(logging.level.as_str()) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %logging.level, "Invalid log level in config, keeping current filter");
    }
}
