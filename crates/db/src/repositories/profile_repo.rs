//! Repository for the `profiles` table.

use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpdateProfile};
use crate::models::user::{UpdateUser, User};

/// Column list for profile queries.
const COLUMNS: &str = "user_id, birth_date, location, created_at, updated_at";

/// Column list for the user half of the combined update.
const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                             is_active, last_login_at, failed_login_count, locked_until, \
                             created_at, updated_at";

/// Provides data access for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the user identity fields and the profile fields together,
    /// inside one transaction. Only non-`None` fields are applied.
    ///
    /// Returns `None` (and commits nothing) if either row is missing.
    pub async fn update_with_user(
        pool: &PgPool,
        user_id: DbId,
        user_input: &UpdateUser,
        profile_input: &UpdateProfile,
    ) -> Result<Option<(User, Profile)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        let Some(user) = sqlx::query_as::<_, User>(&user_query)
            .bind(user_id)
            .bind(&user_input.email)
            .bind(&user_input.first_name)
            .bind(&user_input.last_name)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let profile_query = format!(
            "UPDATE profiles SET
                birth_date = COALESCE($2, birth_date),
                location = COALESCE($3, location),
                updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        let Some(profile) = sqlx::query_as::<_, Profile>(&profile_query)
            .bind(user_id)
            .bind(profile_input.birth_date)
            .bind(&profile_input.location)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        tx.commit().await?;
        Ok(Some((user, profile)))
    }
}
