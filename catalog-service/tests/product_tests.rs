mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_product_crud_workflow() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register_and_login("alice", "secret1").await;

    // 1. Create product
    let response = app
        .post_authenticated("/api/products", &access_token)
        .json(&json!({
            "name": "Keyboard",
            "quantity": 12,
            "price": 49.99
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Keyboard");
    assert_eq!(body["data"]["quantity"], 12);
    let product_id = body["data"]["id"].as_str().unwrap().to_string();

    // 2. Get product by ID
    let response = app
        .get_authenticated(&format!("/api/products/{}", product_id), &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], product_id.as_str());

    // 3. List products
    let response = app
        .get_authenticated("/api/products", &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 1);

    // 4. Update product (partial)
    let response = app
        .put_authenticated(&format!("/api/products/{}", product_id), &access_token)
        .json(&json!({
            "price": 59.99
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Keyboard");
    assert_eq!(body["data"]["price"], 59.99);

    // 5. Delete product
    let response = app
        .delete_authenticated(&format!("/api/products/{}", product_id), &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // 6. Gone afterwards
    let response = app
        .get_authenticated(&format!("/api/products/{}", product_id), &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register_and_login("alice", "secret1").await;

    let fake_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .get_authenticated(&format!("/api/products/{}", fake_id), &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register_and_login("alice", "secret1").await;

    let fake_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .put_authenticated(&format!("/api/products/{}", fake_id), &access_token)
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_invalid_id_format() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register_and_login("alice", "secret1").await;

    let response = app
        .get_authenticated("/api/products/not-a-uuid", &access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/products")
        .json(&json!({ "name": "Keyboard" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
