//! Forward and reverse geocoding.
//! Forward lookups use Open-Meteo geocoding, reverse lookups use Nominatim
//! (OpenStreetMap). Neither needs an API key.

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::http;
use crate::types::{Coordinates, Endpoints, ResolvedPlace, WeatherError};

/// Display name used when reverse geocoding yields nothing usable
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    /// Absent for some places, e.g. Antarctic stations
    #[serde(default)]
    country: Option<String>,
}

impl GeocodingResult {
    /// "{name}, {country}", or just the name when there is no country
    fn display_name(&self) -> String {
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
}

/// Resolves place names to coordinates and back.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    geocoding_url: String,
    reverse_url: String,
}

impl Geocoder {
    pub fn new(client: Client, endpoints: &Endpoints) -> Self {
        Self {
            client,
            geocoding_url: endpoints.geocoding_url.clone(),
            reverse_url: endpoints.reverse_geocoding_url.clone(),
        }
    }

    /// Resolve a city name using the first geocoding match.
    ///
    /// Fails with [`WeatherError::NotFound`] when the provider has no match.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_by_name(&self, city: &str) -> Result<ResolvedPlace, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::NotFound(String::new()));
        }

        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.geocoding_url,
            urlencoding::encode(city)
        );

        let body: GeocodingResponse = http::get_json(&self.client, &url).await?;

        let first = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        let place = ResolvedPlace {
            coordinates: Coordinates::new(first.latitude, first.longitude),
            display_name: first.display_name(),
        };

        tracing::info!(
            "Geocoded {:?} to {} ({}, {})",
            city,
            place.display_name,
            place.coordinates.latitude,
            place.coordinates.longitude
        );
        Ok(place)
    }

    /// Reverse geocode coordinates to a display name.
    ///
    /// Never fails: city, then town, then "Current Location".
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_by_coordinates(&self, coordinates: Coordinates) -> String {
        match self.reverse_lookup(coordinates).await {
            Ok(Some(name)) => {
                tracing::info!("Reverse geocoded to: {}", name);
                name
            }
            Ok(None) => {
                tracing::debug!("Reverse geocode had no city or town");
                CURRENT_LOCATION_LABEL.to_string()
            }
            Err(e) => {
                tracing::debug!("Reverse geocode failed: {}", e);
                CURRENT_LOCATION_LABEL.to_string()
            }
        }
    }

    async fn reverse_lookup(&self, coordinates: Coordinates) -> Result<Option<String>, WeatherError> {
        let url = format!(
            "{}?format=json&lat={}&lon={}",
            self.reverse_url, coordinates.latitude, coordinates.longitude
        );

        let body: NominatimResponse = http::get_json(&self.client, &url).await?;

        Ok(body
            .address
            .and_then(|addr| addr.city.or(addr.town))
            .filter(|name| !name.is_empty()))
    }
}
