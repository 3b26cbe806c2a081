mod common;

use auth::JwtHandler;
use auth::TokenClaims;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register_user("alice", "secret1").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());

    // Neither the password nor the hash ever leaves the service
    let raw = body.to_string();
    assert!(!raw.contains("secret1"));
    assert!(!raw.contains("password"));
}

#[tokio::test]
async fn test_register_short_username() {
    let app = TestApp::spawn().await;

    let response = app.register_user("al", "secret1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    let response = app.register_user("alice", "short").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 6 characters"));
}

#[tokio::test]
async fn test_register_duplicate_username_is_generic_failure() {
    let app = TestApp::spawn().await;

    let response = app.register_user("alice", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Duplicate usernames surface as a plain persistence failure
    let response = app.register_user("alice", "other_password").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let message = body["data"]["message"].as_str().unwrap();
    assert!(!message.contains("alice"));
    assert!(!message.to_lowercase().contains("username"));
}

#[tokio::test]
async fn test_login_returns_two_distinct_tokens() {
    let app = TestApp::spawn().await;

    let (access_token, refresh_token) = app.register_and_login("alice", "secret1").await;

    assert!(!access_token.is_empty());
    assert!(!refresh_token.is_empty());
    assert_ne!(access_token, refresh_token);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    let response = app.register_user("alice", "Correct_Password!").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let wrong_password = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_user = app
        .post("/login")
        .json(&json!({
            "username": "nonexistent",
            "password": "whatever_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status(), StatusCode::BAD_REQUEST);

    // Same status and same body: no username/password oracle
    let wrong_password_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user_body: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password_body, unknown_user_body);
}

#[tokio::test]
async fn test_refresh_logout_flow() {
    let app = TestApp::spawn().await;

    // register -> login -> refresh -> logout -> refresh
    let (access_token, refresh_token) = app.register_and_login("alice", "secret1").await;

    let response = app
        .post("/token")
        .json(&json!({ "token": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let new_access_token = body["data"]["accessToken"].as_str().unwrap();
    assert_ne!(new_access_token, access_token);

    // Refresh only ever returns an access token
    assert!(body["data"]["refreshToken"].is_null());

    let response = app
        .post("/logout")
        .json(&json!({ "token": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The registry no longer contains the token, so the refresh is refused
    // even though the signature still verifies
    let response = app
        .post("/token")
        .json(&json!({ "token": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_refresh_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/token")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_with_forged_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/token")
        .json(&json!({ "token": "forged.refresh.token" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::spawn().await;

    let (_, refresh_token) = app.register_and_login("alice", "secret1").await;

    for _ in 0..2 {
        let response = app
            .post("/logout")
            .json(&json!({ "token": refresh_token }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    // Even a token that was never live logs out fine
    let response = app
        .post("/logout")
        .json(&json!({ "token": "never-issued" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_protected_route_requires_bearer_token() {
    let app = TestApp::spawn().await;

    // No Authorization header
    let response = app
        .get("/api/products")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage bearer token
    let response = app
        .get_authenticated("/api/products", "garbage")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Valid access token
    let (access_token, _) = app.register_and_login("alice", "secret1").await;
    let response = app
        .get_authenticated("/api/products", &access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_token_is_rejected_as_bearer_token() {
    let app = TestApp::spawn().await;

    let (_, refresh_token) = app.register_and_login("alice", "secret1").await;

    // A refresh token never grants resource access
    let response = app
        .get_authenticated("/api/products", &refresh_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let app = TestApp::spawn().await;

    app.register_and_login("alice", "secret1").await;

    // Correctly signed access token whose expiry already elapsed
    let expired_claims = TokenClaims {
        sub: "0c9cb845-9846-4fbf-9c96-5f9ba3a243ad".to_string(),
        username: "alice".to_string(),
        iat: Utc::now().timestamp() - 7200,
        jti: "expired-access-token".to_string(),
        exp: Some(Utc::now().timestamp() - 3600),
    };
    let expired_token = JwtHandler::new(common::ACCESS_TOKEN_SECRET)
        .encode(&expired_claims)
        .expect("Failed to encode token");

    let response = app
        .get_authenticated("/api/products", &expired_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
