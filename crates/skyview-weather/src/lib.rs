//! Weather data for Skyview
//!
//! Resolves places through Open-Meteo geocoding and Nominatim reverse
//! geocoding, then fetches current conditions and a daily forecast from
//! the Open-Meteo forecast API.

pub mod codes;
pub mod geocode;
pub mod http;
pub mod location;
pub mod provider;
pub mod types;

pub use codes::{describe, icon_for, WeatherIcon};
pub use geocode::{Geocoder, CURRENT_LOCATION_LABEL};
pub use location::{ConfiguredLocation, LocationSource};
pub use provider::WeatherProvider;
pub use types::*;
