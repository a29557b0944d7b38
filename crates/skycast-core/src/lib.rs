pub mod config;
pub mod error;

pub use config::{Config, ForecastConfig, GeocodingConfig, SummaryConfig};
pub use error::Error;

use anyhow::Result;

/// Initialize tracing/logging for the dashboard.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("SkyCast core initialized");
    Ok(())
}
