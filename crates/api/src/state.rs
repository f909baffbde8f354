use std::sync::Arc;

use daybook_weather::WeatherClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: daybook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Weather client; `None` when no API key is configured.
    pub weather: Option<Arc<WeatherClient>>,
}

impl AppState {
    /// Build state from configuration, constructing the weather client
    /// when an API key is present.
    pub fn new(pool: daybook_db::DbPool, config: ServerConfig) -> Self {
        let weather = config
            .weather
            .api_key
            .clone()
            .map(|key| Arc::new(WeatherClient::new(key, config.weather.base_url.clone())));

        Self {
            pool,
            config: Arc::new(config),
            weather,
        }
    }
}
