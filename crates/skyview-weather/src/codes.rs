//! WMO weather code lookups.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Label returned for codes outside the known table
pub const UNKNOWN_LABEL: &str = "Unknown";

const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/basmilius/weather-icons/master/production/fill";

/// Human-readable label for a WMO code, or "Unknown".
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Cloudy",
        45 => "Foggy",
        48 => "Frost Fog",
        51 => "Light Drizzle",
        53 => "Moderate Drizzle",
        55 => "Heavy Drizzle",
        61 => "Light Rain",
        63 => "Moderate Rain",
        65 => "Heavy Rain",
        71 => "Light Snow",
        73 => "Moderate Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 => "Light Showers",
        81 => "Moderate Showers",
        82 => "Heavy Showers",
        85 => "Light Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with Hail",
        99 => "Thunderstorm with Heavy Hail",
        _ => UNKNOWN_LABEL,
    }
}

/// Icon identifier for a WMO code.
pub fn icon_for(code: i32) -> &'static str {
    WeatherIcon::from_wmo_code(code).id()
}

/// Icon bands. Every code falls into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    #[default]
    ClearDay,
    PartlyCloudy,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherIcon {
    pub const ALL: [WeatherIcon; 7] = [
        Self::ClearDay,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Fog,
        Self::Rain,
        Self::Snow,
        Self::Thunderstorm,
    ];

    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearDay,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::ClearDay, // Unknown codes default to clear
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }

    /// SVG for this icon in the basmilius weather-icons set
    pub fn url(&self) -> String {
        let file = match self {
            Self::ClearDay => "clear-day",
            Self::PartlyCloudy => "partly-cloudy-day",
            Self::Cloudy => "cloudy",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorms",
        };
        format!("{}/{}.svg", ICON_BASE_URL, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [(i32, &str); 24] = [
        (0, "Clear"),
        (1, "Mostly Clear"),
        (2, "Partly Cloudy"),
        (3, "Cloudy"),
        (45, "Foggy"),
        (48, "Frost Fog"),
        (51, "Light Drizzle"),
        (53, "Moderate Drizzle"),
        (55, "Heavy Drizzle"),
        (61, "Light Rain"),
        (63, "Moderate Rain"),
        (65, "Heavy Rain"),
        (71, "Light Snow"),
        (73, "Moderate Snow"),
        (75, "Heavy Snow"),
        (77, "Snow Grains"),
        (80, "Light Showers"),
        (81, "Moderate Showers"),
        (82, "Heavy Showers"),
        (85, "Light Snow Showers"),
        (86, "Heavy Snow Showers"),
        (95, "Thunderstorm"),
        (96, "Thunderstorm with Hail"),
        (99, "Thunderstorm with Heavy Hail"),
    ];

    #[test]
    fn test_describe_known_codes() {
        for (code, label) in KNOWN {
            assert_eq!(describe(code), label, "code {}", code);
        }
    }

    #[test]
    fn test_describe_unknown_codes() {
        let known: Vec<i32> = KNOWN.iter().map(|(c, _)| *c).collect();
        for code in -200..=200 {
            if !known.contains(&code) {
                assert_eq!(describe(code), "Unknown", "code {}", code);
            }
        }
        assert_eq!(describe(i32::MAX), "Unknown");
        assert_eq!(describe(i32::MIN), "Unknown");
    }

    #[test]
    fn test_icon_bands() {
        assert_eq!(icon_for(0), "clear-day");
        assert_eq!(icon_for(1), "partly-cloudy");
        assert_eq!(icon_for(2), "partly-cloudy");
        assert_eq!(icon_for(3), "cloudy");
        assert_eq!(icon_for(45), "fog");
        assert_eq!(icon_for(48), "fog");
        for code in [51, 53, 55, 61, 63, 65, 80, 81, 82] {
            assert_eq!(icon_for(code), "rain", "code {}", code);
        }
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(icon_for(code), "snow", "code {}", code);
        }
        for code in [95, 96, 99] {
            assert_eq!(icon_for(code), "thunderstorm", "code {}", code);
        }
    }

    #[test]
    fn test_icon_unknown_defaults_to_clear() {
        assert_eq!(icon_for(-1), "clear-day");
        assert_eq!(icon_for(56), "clear-day"); // freezing drizzle is not banded
        assert_eq!(icon_for(999), "clear-day");
    }

    #[test]
    fn test_every_code_lands_in_exactly_one_band() {
        for code in -500..=500 {
            let icon = WeatherIcon::from_wmo_code(code);
            let matching = WeatherIcon::ALL
                .iter()
                .filter(|band| band.id() == icon_for(code))
                .count();
            assert_eq!(matching, 1, "code {}", code);
            assert_eq!(icon.id(), icon_for(code));
        }
    }

    #[test]
    fn test_icon_ids_are_distinct() {
        let mut ids: Vec<&str> = WeatherIcon::ALL.iter().map(WeatherIcon::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), WeatherIcon::ALL.len());
    }

    #[test]
    fn test_icon_url() {
        let url = WeatherIcon::Thunderstorm.url();
        assert!(url.starts_with("https://"));
        assert!(url.ends_with("/thunderstorms.svg"));
    }
}
