//! Integration tests for admin role management.

mod helpers;

use axum::http::StatusCode;

use helpers::{MODERATOR_ROLE_ID, TestApp, USER_ROLE_ID};

#[tokio::test]
async fn test_list_roles_paginated() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/admin/v1/roles?page=1&limit=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["pages"], 2);
    assert_eq!(response.body["limit"], 2);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(response.body["data"][0]["name"], "admin");
}

#[tokio::test]
async fn test_search_roles() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/admin/v1/roles?search=MOD", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["data"][0]["name"], "moderator");
}

#[tokio::test]
async fn test_create_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/roles",
            Some(serde_json::json!({ "name": "editor" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "Role created");
    assert_eq!(response.body["data"]["name"], "editor");
}

#[tokio::test]
async fn test_create_duplicate_role_conflicts() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/roles",
            Some(serde_json::json!({ "name": "moderator" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_role_name_too_short() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/roles",
            Some(serde_json::json!({ "name": "x" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("name"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/v1/roles",
            Some(serde_json::json!({ "title": "editor" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_get_missing_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/admin/v1/roles/999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Role not found");
}

#[tokio::test]
async fn test_rename_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/v1/roles/{MODERATOR_ROLE_ID}"),
            Some(serde_json::json!({ "name": "reviewer" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "reviewer");
}

#[tokio::test]
async fn test_delete_protected_role_forbidden() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/v1/roles/{USER_ROLE_ID}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_role_in_use_conflicts() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.create_user("mod@test.com", "password123", MODERATOR_ROLE_ID)
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/v1/roles/{MODERATOR_ROLE_ID}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_unused_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/v1/roles/{MODERATOR_ROLE_ID}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Role deleted");
    assert!(response.body.get("data").is_none());

    let response = app
        .request(
            "GET",
            &format!("/api/admin/v1/roles/{MODERATOR_ROLE_ID}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_role_users() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.create_user("a@test.com", "password123", USER_ROLE_ID)
        .await;
    app.create_user("b@test.com", "password123", USER_ROLE_ID)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/v1/roles/{USER_ROLE_ID}/users"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
}
