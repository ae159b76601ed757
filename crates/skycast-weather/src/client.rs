//! HTTP client for the Open-Meteo forecast endpoint.

use reqwest::Client;
use tracing::instrument;

use crate::types::{Coordinates, ForecastSnapshot, WeatherError};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_METEO_URL.to_string(),
        }
    }

    /// Point the client at a different forecast endpoint (config, tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch current conditions plus hourly and daily forecast for `coords`.
    ///
    /// The query is fixed apart from the coordinates, which are substituted
    /// as-is; a non-finite coordinate ends up in the URL verbatim (`NaN`).
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        coords: &Coordinates,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m,weathercode&daily=weathercode,temperature_2m_max,temperature_2m_min&timezone=auto",
            self.base_url, coords.latitude, coords.longitude
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}
