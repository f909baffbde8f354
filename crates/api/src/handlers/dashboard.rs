//! Handlers for the weekly dashboard.
//!
//! The board shows seven days (Monday through Sunday) of the caller's open
//! tasks, navigated with a signed week `offset` relative to the current
//! week, plus current weather for the caller's profile location.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use daybook_core::types::Day;
use daybook_core::week::{week_days, week_end, week_start, weekday_name, MAX_WEEK_OFFSET};
use daybook_db::models::note::Note;
use daybook_db::repositories::{NoteRepo, ProfileRepo};
use daybook_weather::WeatherReport;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::weather::fetch_with_fallback;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /dashboard/week`.
#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Signed number of weeks relative to the current week. Defaults to 0.
    pub offset: Option<i64>,
}

/// One day column on the weekly board.
#[derive(Debug, Serialize)]
pub struct DayColumn {
    pub date: Day,
    /// Full English day name, e.g. `"Monday"`.
    pub weekday: &'static str,
    /// Open tasks due this day, weight high to low.
    pub tasks: Vec<Note>,
}

/// The weekly board response.
#[derive(Debug, Serialize)]
pub struct WeekBoard {
    pub start_date: Day,
    pub end_date: Day,
    pub offset: i64,
    pub days: Vec<DayColumn>,
    /// Current conditions for the caller's location, absent when the
    /// weather service is unconfigured or failing.
    pub weather: Option<WeatherReport>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /dashboard/week?offset=
///
/// The caller's weekly board. The week start is computed from today on
/// every request, so the board never goes stale across midnight.
pub async fn week_board(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WeekQuery>,
) -> AppResult<impl IntoResponse> {
    let offset = params.offset.unwrap_or(0);
    // Range check instead of offset.abs(): abs() overflows on i64::MIN.
    if !(-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET).contains(&offset) {
        return Err(AppError::BadRequest(format!(
            "Week offset must be between -{MAX_WEEK_OFFSET} and {MAX_WEEK_OFFSET}"
        )));
    }

    let start = week_start(Utc::now().date_naive()) + Duration::weeks(offset);
    let end = week_end(start);

    let rows = NoteRepo::list_open_tasks_between(&state.pool, auth.user_id, start, end).await?;

    // Rows arrive ordered by deadline, then weight, then id, so splitting
    // them into day buckets preserves the per-day ordering.
    let mut days: Vec<DayColumn> = week_days(start)
        .into_iter()
        .map(|date| DayColumn {
            date,
            weekday: weekday_name(date),
            tasks: Vec::new(),
        })
        .collect();
    for note in rows {
        let index = (note.deadline - start).num_days() as usize;
        days[index].tasks.push(note);
    }

    let weather = dashboard_weather(&state, auth.user_id).await;

    Ok(Json(DataResponse {
        data: WeekBoard {
            start_date: start,
            end_date: end,
            offset,
            days,
            weather,
        },
    }))
}

/// Current conditions for the caller's profile location, falling back to the
/// configured default city. Weather trouble never fails the board.
async fn dashboard_weather(state: &AppState, user_id: i64) -> Option<WeatherReport> {
    state.weather.as_ref()?;

    let location = match ProfileRepo::find_by_user_id(&state.pool, user_id).await {
        Ok(profile) => profile.and_then(|p| p.location),
        Err(err) => {
            tracing::warn!(user_id, error = %err, "Failed to load profile for weather lookup");
            None
        }
    };
    let city = location.unwrap_or_else(|| state.config.weather.default_city.clone());

    match fetch_with_fallback(state, &city).await {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::warn!(user_id, city = %city, error = %err, "Dashboard weather unavailable");
            None
        }
    }
}
