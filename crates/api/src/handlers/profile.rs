//! Handlers for the `/profile` resource.
//!
//! The profile endpoint presents the user identity fields and the profile
//! extension fields as one combined document; updates to it persist both
//! rows inside a single transaction.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::error::CoreError;
use daybook_core::types::Day;
use daybook_core::users::validate_email;
use daybook_db::models::profile::{Profile, UpdateProfile};
use daybook_db::models::user::{UpdateUser, User};
use daybook_db::repositories::{ProfileRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Combined user + profile view returned by both endpoints.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<Day>,
    pub location: Option<String>,
}

impl ProfileView {
    fn from_parts(user: User, profile: Profile) -> Self {
        Self {
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: profile.birth_date,
            location: profile.location,
        }
    }
}

/// Request body for `PUT /profile`. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<Day>,
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /profile
///
/// The caller's combined user + profile document.
pub async fn get_profile(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;
    let profile = ProfileRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: auth.user_id,
            })
        })?;

    Ok(Json(DataResponse {
        data: ProfileView::from_parts(user, profile),
    }))
}

/// PUT /profile
///
/// Update the user identity fields and the profile fields together. Both
/// rows are written inside one transaction so they can never drift apart.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref email) = input.email {
        validate_email(email).map_err(AppError::BadRequest)?;
    }

    let user_input = UpdateUser {
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
    };
    let profile_input = UpdateProfile {
        birth_date: input.birth_date,
        location: input.location,
    };

    let (user, profile) =
        ProfileRepo::update_with_user(&state.pool, auth.user_id, &user_input, &profile_input)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Profile",
                    id: auth.user_id,
                })
            })?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse {
        data: ProfileView::from_parts(user, profile),
    }))
}
