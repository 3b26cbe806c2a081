use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .create_product(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body for creating a product (raw JSON).
///
/// Fields pass through unvalidated; absent numbers default to zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequest {
    name: String,

    #[serde(default)]
    quantity: i32,

    #[serde(default)]
    price: f64,

    #[serde(default)]
    image: Option<String>,
}

impl CreateProductRequest {
    fn into_command(self) -> CreateProductCommand {
        CreateProductCommand {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            image: self.image,
        }
    }
}
