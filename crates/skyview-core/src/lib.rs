pub mod config;
pub mod error;

pub use config::{Config, DeviceLocationConfig, ProvidersConfig, ValidationResult};
pub use error::{AppError, ConfigError, LookupError};

use anyhow::Result;

/// Initialize logging. Output goes to stderr so it stays clear of the
/// rendered widget on stdout.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Skyview core initialized");
    Ok(())
}
