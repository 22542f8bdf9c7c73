mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_success_returns_user_without_hash() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "admin@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("set-cookie"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], "user-1");
    assert_eq!(body["data"]["email"], "admin@example.com");
    assert_eq!(body["data"]["auto_join_admin"], true);
    assert_eq!(body["data"]["role"], "admin");
    assert_eq!(body["data"]["groups"][0]["type"], "team");
    assert_eq!(body["data"]["groups"][0]["name"], "Engineering");
    assert_eq!(body["data"]["groups"][1]["type"], "organization");
    assert_eq!(body["data"]["groups"][1]["name"], "Acme Corp");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "user@example.com",
            "password": "wrongpass"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_indistinguishable_from_wrong_password() {
    let app = TestApp::spawn().await;

    let unknown: serde_json::Value = app
        .post("/api/auth/login")
        .json(&json!({"email": "nobody@example.com", "password": "password123"}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let wrong: serde_json::Value = app
        .post("/api/auth/login")
        .json(&json!({"email": "admin@example.com", "password": "wrongpass"}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    // Identical response shape regardless of the cause
    assert_eq!(unknown, wrong);
}

#[tokio::test]
async fn test_login_missing_fields_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({"email": "admin@example.com"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Email and password required");
}

#[tokio::test]
async fn test_session_round_trip_login_me_logout() {
    let app = TestApp::spawn().await;

    app.login_as_admin().await;

    // The cookie store carries the session into the next request
    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], "user-1");
    assert_eq!(body["data"]["email"], "admin@example.com");

    // Logout clears the cookie client-side
    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_session() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Not authenticated");
}

#[tokio::test]
async fn test_me_with_tampered_cookie() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .header("cookie", "session=not.a.valid.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_excludes_password_material() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/demo/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"]["users"]
        .as_array()
        .expect("Users is not an array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_protected_route_requires_session() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/demo/protected")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.login_as_admin().await;

    let response = app
        .get("/api/demo/protected")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "This is a protected route!");
    assert_eq!(body["data"]["user"]["id"], "user-1");
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_reports_vortex_routes() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["vortex"]["configured"], true);
    let routes = body["data"]["vortex"]["routes"]
        .as_array()
        .expect("Routes is not an array");
    assert_eq!(routes.len(), 6);
    assert!(routes.contains(&serde_json::json!("/api/vortex/jwt")));
}
