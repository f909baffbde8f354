//! Handlers for the `/weather` endpoint.
//!
//! Thin wrapper over [`daybook_weather::WeatherClient`]. When the requested
//! city is unknown, the configured default city is tried once before giving
//! up, matching the behaviour users of the original service expect.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use daybook_weather::{WeatherError, WeatherReport};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City to report on; defaults to the configured default city.
    pub city: Option<String>,
}

/// GET /weather?city=
///
/// Current conditions for a city. 503 when no API key is configured,
/// 404 when neither the requested city nor the fallback is known.
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> AppResult<impl IntoResponse> {
    let city = params
        .city
        .as_deref()
        .unwrap_or(&state.config.weather.default_city);

    let report = fetch_with_fallback(&state, city).await?;

    Ok(Json(DataResponse { data: report }))
}

/// Fetch conditions for `city`, retrying once against the configured default
/// city when `city` is unknown.
///
/// Errors with [`AppError::ServiceUnavailable`] when no client is configured.
pub(crate) async fn fetch_with_fallback(
    state: &AppState,
    city: &str,
) -> Result<WeatherReport, AppError> {
    let client = state
        .weather
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Weather service is not configured".into()))?;

    match client.current(city).await {
        Err(WeatherError::CityNotFound { .. })
            if !city.eq_ignore_ascii_case(&state.config.weather.default_city) =>
        {
            let fallback = &state.config.weather.default_city;
            tracing::warn!(city, fallback, "Unknown city, falling back to default");
            client.current(fallback).await.map_err(AppError::Weather)
        }
        other => other.map_err(AppError::Weather),
    }
}
