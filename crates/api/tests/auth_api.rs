//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover registration (including the transactional profile row),
//! login, account lockout, token refresh with rotation, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return the full JSON response.
async fn register(pool: &PgPool, username: &str, password: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": password,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Log in via the API and return the JSON response.
async fn login(pool: &PgPool, username: &str, password: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration returns 201 with tokens (auto-login) and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_tokens(pool: PgPool) {
    let json = register(&pool, "newcomer", "test_password_123!").await;

    assert!(json["access_token"].is_string(), "must contain access_token");
    assert!(json["refresh_token"].is_string(), "must contain refresh_token");
    assert!(json["expires_in"].is_number(), "must contain expires_in");
    assert_eq!(json["user"]["username"], "newcomer");
    assert_eq!(json["user"]["email"], "newcomer@test.com");
}

/// Registration creates the profile row in the same transaction.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_creates_profile_row(pool: PgPool) {
    let json = register(&pool, "withprofile", "test_password_123!").await;
    let user_id = json["user"]["id"].as_i64().unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "registration must create exactly one profile row");
}

/// Registering a taken username returns 409 and leaves no partial rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    register(&pool, "taken", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "taken",
        "email": "other@test.com",
        "password": "another_password_456!",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'taken'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
}

/// Invalid registration input returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation(pool: PgPool) {
    let cases = [
        serde_json::json!({ "username": "has space", "email": "a@b.c", "password": "long_enough_pw" }),
        serde_json::json!({ "username": "", "email": "a@b.c", "password": "long_enough_pw" }),
        serde_json::json!({ "username": "fine", "email": "not-an-email", "password": "long_enough_pw" }),
        serde_json::json!({ "username": "fine", "email": "a@b.c", "password": "short" }),
    ];

    for body in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/auth/register", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {body} must be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns tokens and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let registered = register(&pool, "loginuser", "test_password_123!").await;

    let json = login(&pool, "loginuser", "test_password_123!").await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["id"], registered["user"]["id"]);
    assert_eq!(json["user"]["username"], "loginuser");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    register(&pool, "wrongpw", "test_password_123!").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The fifth consecutive wrong password locks the account; a correct
/// password is then rejected with 403 until the lock expires.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_lockout_after_repeated_failures(pool: PgPool) {
    register(&pool, "lockme", "test_password_123!").await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "username": "lockme", "password": "wrong" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "lockme", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(
        response.status(),
        StatusCode::FORBIDDEN,
        "locked account must reject even the correct password"
    );
}

// ---------------------------------------------------------------------------
// Refresh and logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new, rotated tokens.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let registered = register(&pool, "refresher", "test_password_123!").await;
    let refresh_token = registered["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body.clone()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    // Token rotation: the new refresh token must differ from the original.
    assert_ne!(json["refresh_token"].as_str().unwrap(), refresh_token);

    // Reusing the rotated-out token must fail.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A rotation whose replacement insert fails rolls the revocation back,
/// leaving the original refresh token usable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_failed_rotation_keeps_old_session(pool: PgPool) {
    use chrono::{Duration, Utc};
    use daybook_db::models::session::CreateSession;
    use daybook_db::repositories::SessionRepo;

    let registered = register(&pool, "rotator", "test_password_123!").await;
    let refresh_token = registered["refresh_token"].as_str().unwrap();

    let (session_id,): (i64,) = sqlx::query_as("SELECT id FROM user_sessions")
        .fetch_one(&pool)
        .await
        .unwrap();

    // The replacement row violates the user FK, so the whole rotation
    // must roll back.
    let input = CreateSession {
        user_id: 999_999,
        refresh_token_hash: "deadbeef".to_string(),
        expires_at: Utc::now() + Duration::days(7),
        user_agent: None,
        ip_address: None,
    };
    let result = SessionRepo::rotate(&pool, session_id, &input).await;
    assert!(result.is_err(), "FK violation must fail the rotation");

    // The original refresh token still works.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Refreshing with a garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout returns 204 and revokes every session of the caller.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let registered = register(&pool, "logoutuser", "test_password_123!").await;
    let access_token = registered["access_token"].as_str().unwrap();
    let refresh_token = registered["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/auth/logout", serde_json::json!({}), access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token from before logout must no longer work.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Token enforcement
// ---------------------------------------------------------------------------

/// Protected routes reject missing and malformed tokens with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_routes_require_token(pool: PgPool) {
    for uri in [
        "/api/v1/notes",
        "/api/v1/tasks",
        "/api/v1/dashboard/week",
        "/api/v1/profile",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = common::get(app, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{uri} must require authentication"
        );
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notes", "garbage-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
