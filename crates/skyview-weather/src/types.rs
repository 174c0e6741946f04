use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_REVERSE_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_USER_AGENT: &str = concat!("Skyview/", env!("CARGO_PKG_VERSION"));

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Result of a forward geocoding lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub coordinates: Coordinates,
    /// "{name}, {country}"
    pub display_name: String,
}

/// Base URLs and identity for the three upstream providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub reverse_geocoding_url: String,
    pub user_agent: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            reverse_geocoding_url: DEFAULT_REVERSE_GEOCODING_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Instantaneous conditions at the requested point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub pressure_mb: f64,
    pub visibility_m: f64,
    pub weather_code: i32,
}

/// One day of the daily forecast. Index 0 of the series is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
}

/// Everything one forecast request returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecastEntry>,
    /// IANA timezone name picked by the provider (`timezone=auto`)
    pub timezone: String,
}

/// Device location errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location service not supported")]
    Unsupported,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Location not found: {0}")]
    NotFound(String),
}

impl WeatherError {
    /// True when the provider answered but had no match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
