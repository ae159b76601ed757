use serde::{Deserialize, Serialize};

/// Geographic coordinates selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions block of a forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i64,
}

/// Daily forecast block: parallel sequences indexed by position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weathercode: Vec<i64>,
}

/// Hourly forecast block. Requested by the fixed query, never rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weathercode: Vec<i64>,
}

/// One decoded forecast response, replaced wholesale on each fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub current_weather: CurrentWeather,
    pub daily: DailyForecast,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlyForecast>,
}

/// Human-readable description for an Open-Meteo weather code.
///
/// Exact integer match only; codes outside the table fall back to a
/// generic description.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn weathercode_description(code: i64) -> &'static str {
    match code {
        0 => "Clear sky ☀️",
        1 => "Mainly clear ⛅",
        2 => "Partly cloudy 🌤️",
        3 => "Overcast ☁️",
        45 => "Foggy 🌫️",
        48 => "Depositing rime fog 🌫️",
        51 => "Light drizzle 🌧️",
        53 => "Moderate drizzle 🌧️",
        55 => "Dense drizzle 🌧️",
        61 => "Slight rain 🌧️",
        63 => "Moderate rain 🌧️",
        65 => "Heavy rain 🌧️",
        80 => "Light rain showers 🌦️",
        81 => "Moderate rain showers 🌦️",
        82 => "Violent rain showers 🌊",
        _ => "Unknown conditions 🤷",
    }
}

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Parse error: {0}")]
    Parse(String),
}
