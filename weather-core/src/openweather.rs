use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{error::Error, location::Location, model::WeatherReport};

/// Current-weather endpoint at openweathermap.org.
const BASE_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch current weather for `location` in imperial units.
    ///
    /// One attempt, no retries; the HTTP status alone decides the outcome.
    pub async fn current_weather(&self, location: &Location) -> Result<WeatherReport, Error> {
        let res = self
            .http
            .get(BASE_API_URL)
            .query(&[
                ("q", location.query().as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!("Response: {body}");

        interpret_response(status, &body, location)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

/// Subset of the current-weather payload we consume.
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
}

/// Map an HTTP status and body to a report or a domain error.
///
/// Only the status drives branching; the body's `cod` field is ignored.
fn interpret_response(
    status: StatusCode,
    body: &str,
    location: &Location,
) -> Result<WeatherReport, Error> {
    match status {
        StatusCode::OK => {
            let parsed: OwCurrentResponse = serde_json::from_str(body)?;
            info!("Successfully retrieved data");

            Ok(WeatherReport {
                location_name: location.display_name().to_owned(),
                // Truncate toward zero, do not round.
                temperature_f: parsed.main.temp as i64,
            })
        }
        StatusCode::NOT_FOUND => Err(Error::LocationNotFound(location.to_string())),
        _ => Err(Error::Upstream(body.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payload shape returned by the live API, trimmed to the fields a real
    // response carries alongside the one we parse.
    const SUCCESS_BODY: &str = r#"{
        "coord": {"lon": -83, "lat": 39.96},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "base": "stations",
        "main": {"temp": 69.76, "feels_like": 63.07, "temp_min": 68, "temp_max": 72, "pressure": 1028, "humidity": 30},
        "visibility": 10000,
        "wind": {"speed": 6.93, "deg": 130},
        "dt": 1600725366,
        "sys": {"country": "US", "sunrise": 1600687147, "sunset": 1600731043},
        "name": "Testcity",
        "cod": 200
    }"#;

    fn location(input: &str) -> Location {
        Location::parse(input).expect("test location must be valid")
    }

    #[test]
    fn success_truncates_the_temperature() {
        let report =
            interpret_response(StatusCode::OK, SUCCESS_BODY, &location("Testcity")).unwrap();

        assert_eq!(report.location_name, "Testcity");
        assert_eq!(report.temperature_f, 69);
    }

    #[test]
    fn success_report_renders_both_output_lines() {
        let report =
            interpret_response(StatusCode::OK, SUCCESS_BODY, &location("Testcity NY")).unwrap();

        let rendered = report.to_string();
        assert!(rendered.contains("Testcity weather:"));
        assert!(rendered.contains("69 degrees Fahrenheit"));
    }

    #[test]
    fn negative_temperatures_truncate_toward_zero() {
        let body = r#"{"main": {"temp": -10.9}}"#;
        let report = interpret_response(StatusCode::OK, body, &location("Testcity")).unwrap();

        assert_eq!(report.temperature_f, -10);
    }

    #[test]
    fn not_found_names_the_location() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        let err =
            interpret_response(StatusCode::NOT_FOUND, body, &location("Testcity NY")).unwrap_err();

        assert!(
            err.to_string()
                .contains("Could not find any location for Testcity NY US")
        );
    }

    #[test]
    fn other_statuses_report_the_full_body() {
        let body = r#"{"cod": 500, "message": "internal error"}"#;
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, body, &location("Testcity"))
            .unwrap_err();

        match &err {
            Error::Upstream(payload) => assert_eq!(payload, body),
            other => panic!("expected an upstream error, got {other:?}"),
        }
        assert!(
            err.to_string()
                .contains("An unknown error has occurred with the OpenWeather API")
        );
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        let err = interpret_response(StatusCode::OK, "not json", &location("Testcity")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
