use std::sync::Arc;

use crate::config::Config;
use nport_data::{FilingLookupService, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Shared, read-only handler state.
#[derive(Debug)]
pub struct AppState {
    /// Upstream-backed filing lookup
    pub lookup: FilingLookupService,
}

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
///
/// Log lines go to stderr so stdout stays free for command output.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

/// Build handler state from startup configuration.
pub fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let lookup = FilingLookupService::from_config(config.sec_api.clone())?;
    tracing::info!(upstream = %config.sec_api.base_url, "filing lookup ready");
    Ok(Arc::new(AppState { lookup }))
}
