use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skyview_weather::{
    Endpoints, DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_REVERSE_GEOCODING_URL,
    DEFAULT_USER_AGENT,
};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "SKYVIEW_CONFIG";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a summary of all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// City looked up when the widget starts
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Upstream provider endpoints
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Device location capability
    #[serde(default)]
    pub device_location: DeviceLocationConfig,
}

fn default_city() -> String {
    "Jakarta".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    #[serde(default = "default_reverse_geocoding_url")]
    pub reverse_geocoding_url: String,

    /// Sent on every request; Nominatim rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}

fn default_forecast_url() -> String {
    DEFAULT_FORECAST_URL.to_string()
}

fn default_reverse_geocoding_url() -> String {
    DEFAULT_REVERSE_GEOCODING_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ProvidersConfig {
    /// Endpoints for the provider clients
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            geocoding_url: self.geocoding_url.clone(),
            forecast_url: self.forecast_url.clone(),
            reverse_geocoding_url: self.reverse_geocoding_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            reverse_geocoding_url: default_reverse_geocoding_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Stands in for the platform positioning service. Without both
/// coordinates the capability is reported as unsupported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceLocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Behave as if the user refused the location permission
    #[serde(default)]
    pub denied: bool,
}

impl DeviceLocationConfig {
    /// Both coordinates, when configured
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            providers: ProvidersConfig::default(),
            device_location: DeviceLocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        Self::load()?.into_validated()
    }

    fn into_validated(self) -> Result<(Self, ValidationResult)> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.default_city.trim().is_empty() {
            result.add_error("default_city", "Default city must not be empty");
        }

        Self::validate_url(&self.providers.geocoding_url, "providers.geocoding_url", &mut result);
        Self::validate_url(&self.providers.forecast_url, "providers.forecast_url", &mut result);
        Self::validate_url(
            &self.providers.reverse_geocoding_url,
            "providers.reverse_geocoding_url",
            &mut result,
        );

        if self.providers.user_agent.trim().is_empty() {
            result.add_warning(
                "providers.user_agent",
                "Empty user agent - reverse geocoding may be refused",
            );
        }

        let location = &self.device_location;
        if let Some(lat) = location.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                result.add_error(
                    "device_location.latitude",
                    format!("Latitude must be within -90..90, got {}", lat),
                );
            }
        }
        if let Some(lon) = location.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                result.add_error(
                    "device_location.longitude",
                    format!("Longitude must be within -180..180, got {}", lon),
                );
            }
        }
        if location.latitude.is_some() != location.longitude.is_some() {
            result.add_warning(
                "device_location",
                "Only one coordinate set - device location will be unsupported",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the configuration file, honouring `SKYVIEW_CONFIG`
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skyview");

        Ok(config_dir.join("config.toml"))
    }
}
