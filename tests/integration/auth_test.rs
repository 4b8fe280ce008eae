//! Integration tests for login, logout, and the access gate.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};

use helpers::{ADMIN_ROLE_ID, TestApp, USER_ROLE_ID};
use showtime_cache::keys;
use showtime_core::traits::cache::CacheProvider;
use showtime_entity::session::Session;

#[tokio::test]
async fn test_admin_login_success() {
    let app = TestApp::new();
    app.create_user("boss@test.com", "password123", ADMIN_ROLE_ID)
        .await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/auth/login",
            Some(serde_json::json!({
                "email": "boss@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Admin login successful");
    let data = &response.body["data"];
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(data["expires_at"].is_string());
    assert_eq!(data["admin"]["email"], "boss@test.com");
    assert_eq!(data["admin"]["role"], "admin");
}

#[tokio::test]
async fn test_admin_login_rejects_non_admin() {
    let app = TestApp::new();
    app.create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/auth/login",
            Some(serde_json::json!({
                "email": "viewer@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid admin credentials");
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    let app = TestApp::new();
    app.create_user("boss@test.com", "password123", ADMIN_ROLE_ID)
        .await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/auth/login",
            Some(serde_json::json!({
                "email": "boss@test.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid admin credentials");
}

#[tokio::test]
async fn test_login_validation_error() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("email"));
    assert!(response.message().contains("password"));
}

#[tokio::test]
async fn test_user_login_and_me() {
    let app = TestApp::new();
    app.create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;
    let token = app.login("viewer@test.com", "password123").await;

    let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "viewer@test.com");
    assert_eq!(response.body["data"]["role"]["name"], "user");
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/admin/v1/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_protected_route_with_malformed_header() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some(""))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_unknown_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some("not-a-real-session"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_session_is_rejected_and_removed() {
    let app = TestApp::new();
    let admin = app
        .create_user("boss@test.com", "password123", ADMIN_ROLE_ID)
        .await;

    let now = Utc::now();
    let session = Session {
        session_id: "expired-token".to_string(),
        user_id: admin.id,
        role_id: ADMIN_ROLE_ID,
        created_at: now - TimeDelta::hours(25),
        expires_at: now - TimeDelta::seconds(1),
        ip_address: "203.0.113.7".to_string(),
        user_agent: "showtime-tests".to_string(),
    };
    let key = keys::session("expired-token");
    app.cache
        .set_json(&key, &session, Duration::from_secs(60))
        .await
        .unwrap();

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some("expired-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert!(app.cache.get(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deactivated_admin_is_forbidden() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let other = app
        .create_user("ops@test.com", "password123", ADMIN_ROLE_ID)
        .await;
    let other_token = app.admin_login("ops@test.com", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/v1/users/{}", other.id),
            Some(serde_json::json!({ "is_active": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some(&other_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Admin access required");
}

#[tokio::test]
async fn test_admin_route_with_user_token_is_forbidden() {
    let app = TestApp::new();
    app.create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;
    let token = app.login("viewer@test.com", "password123").await;

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Admin access required");
}

#[tokio::test]
async fn test_admin_profile() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "admin@test.com");
    assert_eq!(response.body["data"]["role"]["name"], "admin");
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("POST", "/api/admin/v1/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Logout successful");

    let response = app
        .request("GET", "/api/admin/v1/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_logout() {
    let app = TestApp::new();
    app.create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;
    let token = app.login("viewer@test.com", "password123").await;

    let response = app
        .request("POST", "/api/v1/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inactive_user_cannot_login() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let user = app
        .create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/v1/users/{}", user.id),
            Some(serde_json::json!({ "is_active": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "viewer@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(response.body["data"]["cache"], "ok");
}
