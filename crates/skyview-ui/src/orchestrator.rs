//! Drives a lookup from user intent to the final view state.
//!
//! State lives in a watch channel so front ends see every transition,
//! including Loading. Overlapping lookups are not fenced: if a second search
//! starts before the first finishes, both run and whichever completes last
//! owns the view.

use std::sync::Arc;

use chrono::Utc;
use skyview_core::{Config, LookupError};
use skyview_weather::{
    http, ConfiguredLocation, Coordinates, Geocoder, LocationSource, WeatherError, WeatherProvider,
};
use tokio::sync::watch;

use crate::presenter::{present, WeatherView};
use crate::state::{ViewState, WidgetState};

/// Device location capability as configured
pub fn location_from(config: &Config) -> ConfiguredLocation {
    let device = &config.device_location;
    let coordinates = device
        .coordinates()
        .map(|(latitude, longitude)| Coordinates::new(latitude, longitude));
    ConfiguredLocation::new(coordinates, device.denied)
}

#[derive(Debug, Clone)]
pub struct RequestOrchestrator<L> {
    geocoder: Geocoder,
    provider: WeatherProvider,
    location: L,
    state: Arc<watch::Sender<WidgetState>>,
}

impl RequestOrchestrator<ConfiguredLocation> {
    /// Wire up the providers and device location described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let endpoints = config.providers.endpoints();
        let client = http::build_client(&endpoints.user_agent)?;
        Ok(Self::new(
            Geocoder::new(client.clone(), &endpoints),
            WeatherProvider::new(client, &endpoints),
            location_from(config),
        ))
    }
}

impl<L: LocationSource> RequestOrchestrator<L> {
    pub fn new(geocoder: Geocoder, provider: WeatherProvider, location: L) -> Self {
        Self {
            geocoder,
            provider,
            location,
            state: Arc::new(watch::channel(WidgetState::default()).0),
        }
    }

    pub fn snapshot(&self) -> WidgetState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> ViewState {
        self.state.borrow().view.clone()
    }

    /// Receiver notified on every view change.
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.state.subscribe()
    }

    /// Replace the search box text. Typing alone does not notify subscribers.
    pub fn set_search_input(&self, text: &str) {
        self.state.send_if_modified(|state| {
            state.search_input = text.to_string();
            false
        });
    }

    /// Submit whatever is in the search box.
    pub async fn submit_search(&self) {
        let text = self.state.borrow().search_input.clone();
        self.submit_city_name(&text).await;
    }

    /// Initial view shown without any user action.
    pub async fn load_default(&self, city: &str) {
        tracing::info!("Loading default city {:?}", city);
        self.submit_city_name(city).await;
    }

    /// Look up weather for a city name.
    ///
    /// Blank input goes straight to the error state without a request.
    pub async fn submit_city_name(&self, text: &str) {
        let city = text.trim();
        if city.is_empty() {
            self.fail(LookupError::EmptyInput);
            return;
        }

        self.set_view(ViewState::Loading);
        let result = self.lookup_city(city).await;
        self.finish(result);
    }

    /// Look up weather at the device's current position.
    pub async fn request_device_location(&self) {
        if !self.location.is_supported() {
            self.fail(LookupError::GeolocationUnsupported);
            return;
        }

        self.set_view(ViewState::Loading);
        let result = self.lookup_device().await;
        self.finish(result);
    }

    async fn lookup_city(&self, city: &str) -> Result<WeatherView, LookupError> {
        let place = self.geocoder.resolve_by_name(city).await.map_err(|e| {
            if e.is_not_found() {
                LookupError::CityNotFound(city.to_string())
            } else {
                LookupError::CitySearchFailed(e.to_string())
            }
        })?;

        let report = self
            .provider
            .fetch(place.coordinates)
            .await
            .map_err(|e| LookupError::WeatherFetchFailed(e.to_string()))?;

        Ok(present(&report, &place.display_name, Utc::now()))
    }

    async fn lookup_device(&self) -> Result<WeatherView, LookupError> {
        let coordinates = self
            .location
            .current_location()
            .await
            .map_err(|e| LookupError::GeolocationFailed(e.to_string()))?;

        tracing::info!(
            "Device location: {}, {}",
            coordinates.latitude,
            coordinates.longitude
        );

        // The label is cosmetic and never fails, so it runs alongside the fetch.
        let (report, name) = tokio::join!(
            self.provider.fetch(coordinates),
            self.geocoder.resolve_by_coordinates(coordinates)
        );

        let report = report.map_err(|e| LookupError::WeatherFetchFailed(e.to_string()))?;

        Ok(present(&report, &name, Utc::now()))
    }

    fn finish(&self, result: Result<WeatherView, LookupError>) {
        match result {
            Ok(view) => {
                tracing::info!("Showing weather for {}", view.name);
                self.state.send_modify(|state| {
                    state.view = ViewState::Content(view);
                    state.search_input.clear();
                });
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&self, error: LookupError) {
        match error {
            LookupError::EmptyInput
            | LookupError::CityNotFound(_)
            | LookupError::GeolocationUnsupported => tracing::warn!("Lookup rejected: {}", error),
            _ => tracing::error!("Lookup failed: {}", error),
        }
        self.set_view(ViewState::Error(error.user_message().to_string()));
    }

    fn set_view(&self, view: ViewState) {
        self.state.send_modify(|state| state.view = view);
    }
}
