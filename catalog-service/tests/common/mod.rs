use std::sync::Arc;

use auth::TokenService;
use catalog_service::domain::auth::ports::AuthServicePort;
use catalog_service::domain::auth::service::AuthService;
use catalog_service::domain::product::ports::ProductServicePort;
use catalog_service::domain::product::service::ProductService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::events::LogEventPublisher;
use catalog_service::outbound::registry::InMemoryRefreshTokenRegistry;
use catalog_service::outbound::repositories::InMemoryCredentialStore;
use catalog_service::outbound::repositories::InMemoryProductRepository;

pub const ACCESS_TOKEN_SECRET: &[u8] = b"access-test-secret-at-least-32-bytes!";
pub const REFRESH_TOKEN_SECRET: &[u8] = b"refresh-test-secret-at-least-32-bytes";

/// Test application that spawns a real server on in-memory backends
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let tokens = Arc::new(TokenService::new(
            ACCESS_TOKEN_SECRET,
            REFRESH_TOKEN_SECRET,
            15,
        ));

        let credential_store = Arc::new(InMemoryCredentialStore::new());
        let refresh_registry = Arc::new(InMemoryRefreshTokenRegistry::new());
        let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
            credential_store,
            refresh_registry,
            Arc::clone(&tokens),
        ));

        let product_repository = Arc::new(InMemoryProductRepository::new());
        let event_publisher = Arc::new(LogEventPublisher::new());
        let product_service: Arc<dyn ProductServicePort> =
            Arc::new(ProductService::new(product_repository, event_publisher));

        let router = create_router(auth_service, product_service, Arc::clone(&tokens));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            tokens,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register_user(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in a user, returning (access token, refresh token)
    pub async fn register_and_login(&self, username: &str, password: &str) -> (String, String) {
        let response = self.register_user(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let access_token = body["data"]["accessToken"].as_str().unwrap().to_string();
        let refresh_token = body["data"]["refreshToken"].as_str().unwrap().to_string();

        (access_token, refresh_token)
    }
}
