//! Open-Meteo forecast client.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::http;
use crate::types::{
    Coordinates, CurrentConditions, DailyForecastEntry, Endpoints, WeatherError, WeatherReport,
};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,pressure_msl,visibility";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    daily: DailyBlock,
    timezone: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    precipitation: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    pressure_msl: f64,
    visibility: f64,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl From<CurrentBlock> for CurrentConditions {
    fn from(c: CurrentBlock) -> Self {
        Self {
            temperature_c: c.temperature_2m,
            apparent_temperature_c: c.apparent_temperature,
            relative_humidity_pct: c.relative_humidity_2m,
            precipitation_mm: c.precipitation,
            wind_speed_kmh: c.wind_speed_10m,
            pressure_mb: c.pressure_msl,
            visibility_m: c.visibility,
            weather_code: c.weather_code,
        }
    }
}

impl DailyBlock {
    /// Zip the parallel arrays into entries.
    fn into_entries(self) -> Result<Vec<DailyForecastEntry>, WeatherError> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_2m_max.len() != len
            || self.temperature_2m_min.len() != len
        {
            return Err(WeatherError::Parse(format!(
                "daily series lengths differ: time={}, weather_code={}, max={}, min={}",
                len,
                self.weather_code.len(),
                self.temperature_2m_max.len(),
                self.temperature_2m_min.len()
            )));
        }

        Ok(self
            .time
            .into_iter()
            .zip(self.weather_code)
            .zip(self.temperature_2m_max.into_iter().zip(self.temperature_2m_min))
            .map(|((date, weather_code), (temp_max_c, temp_min_c))| DailyForecastEntry {
                date,
                weather_code,
                temp_max_c,
                temp_min_c,
            })
            .collect())
    }
}

/// Fetches current conditions and the daily forecast for a point.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    forecast_url: String,
}

impl WeatherProvider {
    pub fn new(client: Client, endpoints: &Endpoints) -> Self {
        Self {
            client,
            forecast_url: endpoints.forecast_url.clone(),
        }
    }

    /// Single attempt, no retry.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<WeatherReport, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}&daily={}&timezone=auto&language=en",
            self.forecast_url, coordinates.latitude, coordinates.longitude, CURRENT_FIELDS, DAILY_FIELDS
        );

        let body: ForecastResponse = http::get_json(&self.client, &url).await?;

        let report = WeatherReport {
            current: body.current.into(),
            daily: body.daily.into_entries()?,
            timezone: body.timezone,
        };

        tracing::info!(
            "Fetched weather for ({}, {}): {} daily entries, timezone {}",
            coordinates.latitude,
            coordinates.longitude,
            report.daily.len(),
            report.timezone
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> WeatherProvider {
        let endpoints = Endpoints {
            forecast_url: format!("{}/v1/forecast", server.uri()),
            ..Endpoints::default()
        };
        WeatherProvider::new(Client::new(), &endpoints)
    }

    fn forecast_body() -> serde_json::Value {
        serde_json::json!({
            "latitude": -6.25,
            "longitude": 106.75,
            "timezone": "Asia/Jakarta",
            "current": {
                "time": "2026-10-19T14:00",
                "temperature_2m": 31.4,
                "relative_humidity_2m": 66,
                "apparent_temperature": 35.6,
                "precipitation": 0.2,
                "weather_code": 2,
                "wind_speed_10m": 9.7,
                "pressure_msl": 1009.8,
                "visibility": 24140.0
            },
            "daily": {
                "time": ["2026-10-19", "2026-10-20", "2026-10-21"],
                "weather_code": [2, 61, 95],
                "temperature_2m_max": [32.1, 30.5, 29.9],
                "temperature_2m_min": [24.9, 24.2, 23.8]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_parses_current_and_daily() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "-6.2"))
            .and(query_param("longitude", "106.8"))
            .and(query_param("current", CURRENT_FIELDS))
            .and(query_param("daily", DAILY_FIELDS))
            .and(query_param("timezone", "auto"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = provider_for(&mock_server)
            .fetch(Coordinates::new(-6.2, 106.8))
            .await
            .unwrap();

        assert_eq!(report.timezone, "Asia/Jakarta");
        assert_eq!(report.current.temperature_c, 31.4);
        assert_eq!(report.current.relative_humidity_pct, 66.0);
        assert_eq!(report.current.weather_code, 2);
        assert_eq!(report.current.visibility_m, 24140.0);
        assert_eq!(report.daily.len(), 3);
        assert_eq!(
            report.daily[1].date,
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
        );
        assert_eq!(report.daily[2].weather_code, 95);
        assert_eq!(report.daily[2].temp_min_c, 23.8);
    }

    #[tokio::test]
    async fn test_fetch_rejects_ragged_daily_series() {
        let mock_server = MockServer::start().await;

        let mut body = forecast_body();
        body["daily"]["temperature_2m_min"] = serde_json::json!([24.9]);

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .fetch(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_current_block() {
        let mock_server = MockServer::start().await;

        let mut body = forecast_body();
        body.as_object_mut().unwrap().remove("current");

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .fetch(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Latitude must be in range of -90 to 90°."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .fetch(Coordinates::new(91.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Network(_)));
    }
}
