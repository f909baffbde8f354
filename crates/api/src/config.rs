use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Weather integration settings (disabled when no API key is set).
    pub weather: WeatherSettings,
}

/// OpenWeather integration settings.
#[derive(Debug, Clone)]
pub struct WeatherSettings {
    /// API key; `None` disables the integration entirely.
    pub api_key: Option<String>,
    /// Endpoint URL.
    pub base_url: String,
    /// City used when a profile has no location and no `city` is requested.
    pub default_city: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let weather = WeatherSettings::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            weather,
        }
    }
}

impl WeatherSettings {
    /// Load weather settings from environment variables.
    ///
    /// | Env Var                | Required | Default                       |
    /// |------------------------|----------|-------------------------------|
    /// | `WEATHER_API_KEY`      | no       | -- (integration disabled)     |
    /// | `WEATHER_BASE_URL`     | no       | OpenWeather current-weather   |
    /// | `WEATHER_DEFAULT_CITY` | no       | `Kyiv`                        |
    pub fn from_env() -> Self {
        let api_key = std::env::var("WEATHER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let base_url = std::env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| daybook_weather::DEFAULT_BASE_URL.into());

        let default_city = std::env::var("WEATHER_DEFAULT_CITY")
            .unwrap_or_else(|_| daybook_weather::DEFAULT_CITY.into());

        Self {
            api_key,
            base_url,
            default_city,
        }
    }
}
