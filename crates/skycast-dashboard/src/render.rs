//! Pure HTML rendering of the dashboard state.

use chrono::NaiveDate;
use skycast_weather::{weathercode_description, ForecastSnapshot};

use crate::state::Dashboard;

/// Render the dashboard to an HTML fragment.
///
/// Pure function of (loading, snapshot): no side effects, identical output
/// for identical state.
pub fn render(dashboard: &Dashboard) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"weather-dashboard\">\n");
    html.push_str("  <h1>🌦️ Weather Dashboard</h1>\n");

    if dashboard.is_loading() {
        html.push_str("  <p class=\"loading\">Loading weather data...</p>\n");
    } else if let Some(snapshot) = dashboard.snapshot() {
        render_snapshot(&mut html, snapshot);
    } else {
        html.push_str("  <p class=\"error\">Unable to fetch weather data</p>\n");
    }

    html.push_str("</div>\n");
    html
}

fn render_snapshot(html: &mut String, snapshot: &ForecastSnapshot) {
    let current = &snapshot.current_weather;

    html.push_str("  <div class=\"weather-info\">\n");
    html.push_str("    <h2>Current Weather</h2>\n");
    html.push_str(&format!(
        "    <p>🌡️ Temperature: {}°C</p>\n",
        current.temperature
    ));
    html.push_str(&format!(
        "    <p>🌈 Conditions: {}</p>\n",
        weathercode_description(current.weathercode)
    ));

    html.push_str("    <div class=\"forecast\">\n");
    html.push_str("      <h3>Daily Forecast</h3>\n");

    // The daily sequences are parallel; a length mismatch truncates to the
    // shortest rather than failing.
    let daily = &snapshot.daily;
    let days = daily
        .time
        .iter()
        .zip(&daily.temperature_2m_max)
        .zip(&daily.temperature_2m_min)
        .zip(&daily.weathercode);

    for (((date, high), low), code) in days {
        html.push_str("      <div class=\"forecast-day\">\n");
        html.push_str(&format!("        <p>{}</p>\n", display_date(date)));
        html.push_str(&format!("        <p>🌡️ High: {high}°C</p>\n"));
        html.push_str(&format!("        <p>🌡️ Low: {low}°C</p>\n"));
        html.push_str(&format!(
            "        <p>{}</p>\n",
            weathercode_description(*code)
        ));
        html.push_str("      </div>\n");
    }

    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
}

/// Localize an ISO date from the provider to a calendar date string.
/// Unparseable input falls back to the raw string.
fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{CurrentWeather, DailyForecast, WeatherError};

    fn two_day_snapshot() -> ForecastSnapshot {
        ForecastSnapshot {
            current_weather: CurrentWeather {
                temperature: 15.2,
                weathercode: 1,
            },
            daily: DailyForecast {
                time: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
                temperature_2m_max: vec![5.0, 7.0],
                temperature_2m_min: vec![-1.0, 0.0],
                weathercode: vec![0, 61],
            },
            hourly: None,
        }
    }

    #[test]
    fn test_initial_state_renders_only_loading_placeholder() {
        let dashboard = Dashboard::new();
        let html = render(&dashboard);

        assert!(html.contains("Loading weather data..."));
        assert!(!html.contains("Current Weather"));
        assert!(!html.contains("Unable to fetch weather data"));
    }

    #[test]
    fn test_snapshot_renders_current_weather() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();
        dashboard.complete_fetch(request.seq, Ok(two_day_snapshot()));

        let html = render(&dashboard);

        assert!(html.contains("15.2"));
        assert!(html.contains("Mainly clear ⛅"));
    }

    #[test]
    fn test_snapshot_renders_daily_forecast_in_order() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();
        dashboard.complete_fetch(request.seq, Ok(two_day_snapshot()));

        let html = render(&dashboard);

        assert_eq!(html.matches("forecast-day").count(), 2);
        assert!(html.contains("1/1/2024"));
        assert!(html.contains("1/2/2024"));
        assert!(html.contains("High: 5°C"));
        assert!(html.contains("Low: -1°C"));

        // Second entry carries the second day's description.
        let first = html.find("Clear sky ☀️").unwrap();
        let second = html.find("Slight rain 🌧️").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_unknown_weathercode_renders_fallback() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();

        let mut snapshot = two_day_snapshot();
        snapshot.current_weather.weathercode = 99;
        dashboard.complete_fetch(request.seq, Ok(snapshot));

        let html = render(&dashboard);

        assert!(html.contains("Unknown conditions 🤷"));
    }

    #[test]
    fn test_failed_fetch_renders_error_placeholder() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();
        dashboard.complete_fetch(request.seq, Err(WeatherError::Parse("boom".into())));

        let html = render(&dashboard);

        assert!(html.contains("Unable to fetch weather data"));
        assert!(!html.contains("Loading weather data..."));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();
        dashboard.complete_fetch(request.seq, Ok(two_day_snapshot()));

        assert_eq!(render(&dashboard), render(&dashboard));
    }

    #[test]
    fn test_unequal_daily_sequences_truncate() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();

        let mut snapshot = two_day_snapshot();
        snapshot.daily.temperature_2m_min.truncate(1);
        dashboard.complete_fetch(request.seq, Ok(snapshot));

        let html = render(&dashboard);

        assert_eq!(html.matches("forecast-day").count(), 1);
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw_string() {
        let mut dashboard = Dashboard::new();
        let request = dashboard.initial_fetch();

        let mut snapshot = two_day_snapshot();
        snapshot.daily.time[0] = "someday".to_string();
        dashboard.complete_fetch(request.seq, Ok(snapshot));

        let html = render(&dashboard);

        assert!(html.contains("someday"));
    }
}
