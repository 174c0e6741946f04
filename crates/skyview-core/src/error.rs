//! Centralized error types for Skyview.
//!
//! Every lookup failure is one of a fixed set of kinds, each with a fixed
//! message for the error banner. The attached detail strings are for logs
//! only and never reach the user.

use thiserror::Error;

/// Why a weather lookup ended in the error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Empty city name")]
    EmptyInput,

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("City search failed: {0}")]
    CitySearchFailed(String),

    #[error("Weather fetch failed: {0}")]
    WeatherFetchFailed(String),

    #[error("Geolocation unsupported")]
    GeolocationUnsupported,

    #[error("Geolocation failed: {0}")]
    GeolocationFailed(String),
}

impl LookupError {
    /// Returns the banner text for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "Please enter a city name.",
            LookupError::CityNotFound(_) => "City not found. Try another city name.",
            LookupError::CitySearchFailed(_) => {
                "An error occurred while fetching data. Please try again."
            }
            LookupError::WeatherFetchFailed(_) => "An error occurred while fetching weather data.",
            LookupError::GeolocationUnsupported => "Geolocation is not supported in your browser.",
            LookupError::GeolocationFailed(_) => {
                "Unable to access location. Please enable location permissions."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(anyhow::Error),
}

/// Classifies by root cause so startup failures from `anyhow` call sites
/// still get a specific message.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(config) => return AppError::Config(config),
            Err(err) => err,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => AppError::Io(io),
            Err(err) => AppError::Other(err),
        }
    }
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Lookup(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_messages_are_fixed() {
        assert_eq!(LookupError::EmptyInput.user_message(), "Please enter a city name.");
        assert_eq!(
            LookupError::CityNotFound("Atlantis".into()).user_message(),
            "City not found. Try another city name."
        );
        assert_eq!(
            LookupError::CitySearchFailed("connection refused".into()).user_message(),
            "An error occurred while fetching data. Please try again."
        );
        assert_eq!(
            LookupError::WeatherFetchFailed("HTTP 500".into()).user_message(),
            "An error occurred while fetching weather data."
        );
        assert_eq!(
            LookupError::GeolocationUnsupported.user_message(),
            "Geolocation is not supported in your browser."
        );
        assert_eq!(
            LookupError::GeolocationFailed("denied".into()).user_message(),
            "Unable to access location. Please enable location permissions."
        );
    }

    #[test]
    fn test_detail_does_not_leak_into_user_message() {
        let err = LookupError::CitySearchFailed("secret-host:443 refused".into());
        assert!(!err.user_message().contains("secret-host"));
        assert!(err.to_string().contains("secret-host"));
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = LookupError::EmptyInput.into();
        assert!(matches!(app_err, AppError::Lookup(LookupError::EmptyInput)));
        assert_eq!(app_err.user_message(), "Please enter a city name.");
    }

    #[test]
    fn test_config_error_message_propagation() {
        let app_err = AppError::Config(ConfigError::ParseError("line 3".into()));
        assert_eq!(
            app_err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }

    #[test]
    fn test_anyhow_config_error_keeps_its_kind() {
        use anyhow::Context;

        let err: anyhow::Result<()> = Err(ConfigError::ParseError("line 3".into()))
            .context("Failed to parse config file");
        let app_err = AppError::from(err.unwrap_err());

        assert!(matches!(app_err, AppError::Config(ConfigError::ParseError(_))));
        assert_eq!(
            app_err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }

    #[test]
    fn test_anyhow_io_and_other_errors() {
        let io = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "config.toml",
        ));
        assert!(matches!(AppError::from(io), AppError::Io(_)));

        let other = AppError::from(anyhow::anyhow!("Failed to initialize logging"));
        assert!(matches!(other, AppError::Other(_)));
        assert_eq!(
            other.user_message(),
            "An unexpected error occurred. Please try again."
        );
    }
}
