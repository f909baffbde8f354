//! HTTP client for the OpenWeather current-weather API.
//!
//! Wraps the single `GET /weather` endpoint using [`reqwest`]. OpenWeather
//! reports its own status in the body `cod` field, which is a number on
//! success and a string on errors, so the client parses the body rather
//! than trusting the HTTP status code alone.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// OpenWeather current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// City used when neither the caller nor the profile names one.
pub const DEFAULT_CITY: &str = "Kyiv";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the OpenWeather API.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Current conditions for one location, units metric.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// `"City, CC"`, e.g. `"Kyiv, UA"`.
    pub location: String,
    /// Temperature in whole degrees Celsius.
    pub temp: i32,
    /// Perceived temperature in whole degrees Celsius.
    pub feels_like: i32,
    /// Condition text, e.g. `"scattered clouds"`.
    pub description: String,
    /// OpenWeather icon code, e.g. `"03d"`.
    pub icon: String,
    pub wind: WindReport,
}

/// Wind conditions, metres per second.
#[derive(Debug, Clone, Serialize)]
pub struct WindReport {
    pub speed: f64,
    pub gust: Option<f64>,
}

/// Errors from the OpenWeather client.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON shape OpenWeather documents.
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// OpenWeather does not know the requested city (body cod 404).
    #[error("city \"{city}\" not found")]
    CityNotFound { city: String },

    /// OpenWeather reported some other failure in the body.
    #[error("weather API error ({cod}): {message}")]
    Api { cod: String, message: String },
}

impl WeatherClient {
    /// Create a new client.
    ///
    /// * `api_key` - OpenWeather API key.
    /// * `base_url` - Endpoint URL, normally [`DEFAULT_BASE_URL`].
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch current conditions for a city, metric units.
    pub async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("units", "metric"), ("appid", &self.api_key)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let body = response.text().await?;
        parse_body(city, &body)
    }
}

/// OpenWeather's polymorphic body status: `200` on success, `"404"` etc. on errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cod {
    Number(u16),
    Text(String),
}

impl Cod {
    fn value(&self) -> Option<u16> {
        match self {
            Cod::Number(n) => Some(*n),
            Cod::Text(s) => s.parse().ok(),
        }
    }

    fn as_display(&self) -> String {
        match self {
            Cod::Number(n) => n.to_string(),
            Cod::Text(s) => s.clone(),
        }
    }
}

/// First-pass parse: just the status and optional error message.
#[derive(Debug, Deserialize)]
struct ApiStatus {
    cod: Cod,
    #[serde(default)]
    message: Option<String>,
}

/// Full success payload (only parsed once `cod` is 200).
#[derive(Debug, Deserialize)]
struct ApiPayload {
    name: String,
    sys: ApiSys,
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ApiCondition {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
    gust: Option<f64>,
}

impl ApiPayload {
    fn into_report(self) -> WeatherReport {
        let condition = self.weather.into_iter().next().unwrap_or_default();
        WeatherReport {
            location: format!("{}, {}", self.name, self.sys.country),
            temp: self.main.temp.round() as i32,
            feels_like: self.main.feels_like.round() as i32,
            description: condition.description,
            icon: condition.icon,
            wind: WindReport {
                speed: self.wind.speed,
                gust: self.wind.gust,
            },
        }
    }
}

/// Interpret a response body according to its `cod` field.
fn parse_body(city: &str, body: &str) -> Result<WeatherReport, WeatherError> {
    let status: ApiStatus = serde_json::from_str(body)?;
    match status.cod.value() {
        Some(200) => {
            let payload: ApiPayload = serde_json::from_str(body)?;
            Ok(payload.into_report())
        }
        Some(404) => Err(WeatherError::CityNotFound {
            city: city.to_string(),
        }),
        _ => Err(WeatherError::Api {
            cod: status.cod.as_display(),
            message: status.message.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "coord": {"lon": 30.5167, "lat": 50.4333},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 21.64, "feels_like": 21.35, "temp_min": 20.1, "temp_max": 23.0,
                 "pressure": 1015, "humidity": 56},
        "wind": {"speed": 4.12, "deg": 300},
        "sys": {"country": "UA", "sunrise": 1661137010, "sunset": 1661187689},
        "name": "Kyiv",
        "cod": 200
    }"#;

    #[test]
    fn success_body_becomes_report() {
        let report = parse_body("Kyiv", SUCCESS_BODY).unwrap();
        assert_eq!(report.location, "Kyiv, UA");
        assert_eq!(report.temp, 22);
        assert_eq!(report.feels_like, 21);
        assert_eq!(report.description, "scattered clouds");
        assert_eq!(report.icon, "03d");
        assert_eq!(report.wind.speed, 4.12);
        assert_eq!(report.wind.gust, None);
    }

    #[test]
    fn gust_is_kept_when_present() {
        let body = SUCCESS_BODY.replace(
            r#""wind": {"speed": 4.12, "deg": 300}"#,
            r#""wind": {"speed": 4.12, "deg": 300, "gust": 7.9}"#,
        );
        let report = parse_body("Kyiv", &body).unwrap();
        assert_eq!(report.wind.gust, Some(7.9));
    }

    #[test]
    fn string_cod_200_is_success() {
        let body = SUCCESS_BODY.replace(r#""cod": 200"#, r#""cod": "200""#);
        let report = parse_body("Kyiv", &body).unwrap();
        assert_eq!(report.location, "Kyiv, UA");
    }

    #[test]
    fn cod_404_is_city_not_found() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        match parse_body("Atlantis", body) {
            Err(WeatherError::CityNotFound { city }) => assert_eq!(city, "Atlantis"),
            other => panic!("expected CityNotFound, got {other:?}"),
        }
    }

    #[test]
    fn numeric_cod_404_is_city_not_found() {
        let body = r#"{"cod": 404, "message": "city not found"}"#;
        assert!(matches!(
            parse_body("Atlantis", body),
            Err(WeatherError::CityNotFound { .. })
        ));
    }

    #[test]
    fn other_cod_is_api_error() {
        let body = r#"{"cod": 401, "message": "Invalid API key"}"#;
        match parse_body("Kyiv", body) {
            Err(WeatherError::Api { cod, message }) => {
                assert_eq!(cod, "401");
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_body_is_decode_error() {
        assert!(matches!(
            parse_body("Kyiv", "<html>gateway timeout</html>"),
            Err(WeatherError::Decode(_))
        ));
    }
}
