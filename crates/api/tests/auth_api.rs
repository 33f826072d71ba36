//! HTTP-level integration tests for the auth endpoints.
//!
//! Covers login, account lockout, refresh-token rotation, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_technician, get_auth, login_for_token, post_json, post_json_auth};
use sqlx::SqlitePool;

/// Successful login returns 200 with tokens and user info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: SqlitePool) {
    let (user, password) = create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "marisol", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "marisol");
    assert_eq!(json["user"]["role"], "technician");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: SqlitePool) {
    create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "marisol", "password": "equivocada" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "fantasma", "password": "loquesea" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five consecutive failed attempts lock the account; the next attempt is
/// rejected with 403 even with the correct password.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_lockout_after_failed_attempts(pool: SqlitePool) {
    let (_user, password) = create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let body = serde_json::json!({ "username": "marisol", "password": "equivocada" });
        let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let body = serde_json::json!({ "username": "marisol", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token yields new tokens, and the presented token is
/// revoked by rotation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: SqlitePool) {
    let (_user, password) = create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "marisol", "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let login_json = body_json(response).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"].as_str(), Some(refresh_token.as_str()));

    // Replaying the consumed token fails.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes the caller's sessions; their refresh token stops working.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: SqlitePool) {
    let (_user, password) = create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "marisol", "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let login_json = body_json(response).await;
    let access_token = login_json["access_token"].as_str().unwrap().to_string();
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        &access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Protected routes reject requests without (or with a garbage) token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_requires_token(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/tasks").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/tasks", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A fresh access token grants access to protected routes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_access_token_grants_access(pool: SqlitePool) {
    let (_user, password) = create_technician(&pool, "marisol").await;
    let app = common::build_test_app(pool);

    let token = login_for_token(app.clone(), "marisol", &password).await;
    let response = get_auth(app, "/api/v1/tasks", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
