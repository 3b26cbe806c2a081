use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::get_product::get_product;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::update_product::update_product;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::product::ports::ProductServicePort;

/// Shared application state.
///
/// Services sit behind their ports so the wiring (Postgres or in-memory)
/// stays out of the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub tokens: Arc<TokenService>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    product_service: Arc<dyn ProductServicePort>,
    tokens: Arc<TokenService>,
) -> Router {
    let state = AppState {
        auth_service,
        product_service,
        tokens,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/token", post(refresh))
        .route("/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products", post(create_product))
        .route("/api/products/:product_id", get(get_product))
        .route("/api/products/:product_id", put(update_product))
        .route("/api/products/:product_id", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .with_state(state)
}
