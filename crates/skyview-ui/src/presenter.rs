//! Turns a weather report into display strings. No I/O.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use skyview_weather::{describe, icon_for, DailyForecastEntry, WeatherIcon, WeatherReport};

/// Forecast days shown after today
pub const FORECAST_DAYS: usize = 7;

/// Fixed unit label shown next to the bare temperature
pub const TEMPERATURE_UNIT: &str = "°C";

/// Everything the content panel shows, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    pub name: String,
    /// Date and time at the location, in its own timezone
    pub local_time: String,
    /// Rounded, no unit
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub visibility: String,
    pub precipitation: String,
    pub description: String,
    pub icon: String,
    pub icon_url: String,
    pub forecast: Vec<ForecastDayView>,
}

/// One entry of the forecast strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDayView {
    pub weekday: String,
    pub high: i64,
    pub low: i64,
    pub description: String,
    pub icon: String,
    pub icon_url: String,
}

/// Round to the nearest integer with halves going up (-2.5 becomes -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Metres as kilometres with one decimal, halves going up (250 m is "0.3 km").
pub fn visibility_km(visibility_m: f64) -> String {
    let tenths = round_half_up(visibility_m / 100.0);
    format!("{:.1} km", tenths as f64 / 10.0)
}

/// Build the view for `report` as of `now`.
pub fn present(report: &WeatherReport, display_name: &str, now: DateTime<Utc>) -> WeatherView {
    let current = &report.current;

    WeatherView {
        name: display_name.to_string(),
        local_time: local_time(&report.timezone, now),
        temperature: round_half_up(current.temperature_c).to_string(),
        feels_like: format!(
            "Feels like {}{}",
            round_half_up(current.apparent_temperature_c),
            TEMPERATURE_UNIT
        ),
        humidity: format!("{}%", current.relative_humidity_pct),
        wind: format!("{} km/h", round_half_up(current.wind_speed_kmh)),
        pressure: format!("{} mb", current.pressure_mb),
        visibility: visibility_km(current.visibility_m),
        precipitation: format!("{} mm", current.precipitation_mm),
        description: describe(current.weather_code).to_string(),
        icon: icon_for(current.weather_code).to_string(),
        icon_url: WeatherIcon::from_wmo_code(current.weather_code).url(),
        forecast: forecast(&report.daily),
    }
}

/// Days 1..=7 of the series; day 0 is covered by the current conditions.
///
/// The weekday comes straight from the calendar date the provider sent,
/// without shifting it into any timezone.
pub fn forecast(daily: &[DailyForecastEntry]) -> Vec<ForecastDayView> {
    daily
        .iter()
        .skip(1)
        .take(FORECAST_DAYS)
        .map(|day| ForecastDayView {
            weekday: day.date.format("%a").to_string(),
            high: round_half_up(day.temp_max_c),
            low: round_half_up(day.temp_min_c),
            description: describe(day.weather_code).to_string(),
            icon: icon_for(day.weather_code).to_string(),
            icon_url: WeatherIcon::from_wmo_code(day.weather_code).url(),
        })
        .collect()
}

/// "Monday, October 19, 2026 · 02:05 PM" in `timezone`, UTC if unknown.
pub fn local_time(timezone: &str, now: DateTime<Utc>) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!("Unknown timezone {:?}, showing UTC", timezone);
            Tz::UTC
        }
    };

    now.with_timezone(&tz)
        .format("%A, %B %-d, %Y · %I:%M %p")
        .to_string()
}
