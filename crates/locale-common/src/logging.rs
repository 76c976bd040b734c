//! Tracing subscriber setup for hosts embedding the locale tables.

use crate::types::{LocaleError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the env filter, letting `RUST_LOG` win over the configured default.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| {
            LocaleError::Config(format!("Invalid log filter '{default_filter}': {e}")).into()
        }),
    }
}

/// Installs the global tracing subscriber.
///
/// `json` switches the fmt layer to structured JSON output. Fails if a global
/// subscriber has already been installed.
pub fn init_tracing(default_filter: &str, json: bool) -> Result<()> {
    let filter = build_filter(default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .try_init()
        .map_err(|e| LocaleError::Config(format!("Failed to install tracing subscriber: {e}")))?;

    tracing::debug!(json, "tracing initialized");
    Ok(())
}
