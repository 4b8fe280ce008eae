//! Integration tests for admin user management.

mod helpers;

use axum::http::StatusCode;

use helpers::{ADMIN_ROLE_ID, TestApp, USER_ROLE_ID};

fn new_user_body(email: &str, role_id: i64) -> serde_json::Value {
    serde_json::json!({
        "name": "Priya Sharma",
        "email": email,
        "password": "correct-horse",
        "role_id": role_id,
    })
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/users",
            Some(new_user_body("priya@test.com", USER_ROLE_ID)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["email"], "priya@test.com");
    assert_eq!(data["is_active"], true);
    assert_eq!(data["role"]["name"], "user");
    assert!(data.get("password_hash").is_none());

    // The new account can log in with the submitted password.
    app.login("priya@test.com", "correct-horse").await;
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflicts() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/users",
            Some(new_user_body("ADMIN@test.com", USER_ROLE_ID)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_unknown_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/users",
            Some(new_user_body("priya@test.com", 999)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Role not found");
}

#[tokio::test]
async fn test_create_user_short_password() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let mut body = new_user_body("priya@test.com", USER_ROLE_ID);
    body["password"] = serde_json::json!("short");

    let response = app
        .request("POST", "/api/admin/v1/users", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("password"));
}

#[tokio::test]
async fn test_list_users_with_filters() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.create_user("one@test.com", "password123", USER_ROLE_ID)
        .await;
    app.create_user("two@test.com", "password123", USER_ROLE_ID)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/v1/users?role_id={USER_ROLE_ID}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);

    let response = app
        .request("GET", "/api/admin/v1/users?search=ADMIN", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["data"][0]["role"]["id"], ADMIN_ROLE_ID);
}

#[tokio::test]
async fn test_update_user_password_and_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let user = app
        .create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/v1/users/{}", user.id),
            Some(serde_json::json!({
                "password": "brand-new-secret",
                "role_id": ADMIN_ROLE_ID,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"]["name"], "admin");
    assert_eq!(response.body["data"]["email"], "viewer@test.com");

    app.admin_login("viewer@test.com", "brand-new-secret").await;
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/admin/v1/users/999",
            Some(serde_json::json!({ "name": "Nobody Here" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_revokes_sessions() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let user = app
        .create_user("viewer@test.com", "password123", USER_ROLE_ID)
        .await;
    let user_token = app.login("viewer@test.com", "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/v1/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User deleted");

    let response = app
        .request("GET", "/api/v1/me", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "GET",
            &format!("/api/admin/v1/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let profile = app
        .request("GET", "/api/admin/v1/profile", None, Some(&token))
        .await;
    let admin_id = profile.body["data"]["id"].as_i64().expect("admin id");

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/v1/users/{admin_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
