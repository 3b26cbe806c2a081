use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a product (raw JSON).
///
/// Only provided fields are applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl UpdateProductRequest {
    fn into_command(self) -> UpdateProductCommand {
        UpdateProductCommand {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            image: self.image,
        }
    }
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id =
        ProductId::from_string(&product_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .product_service
        .update_product(&product_id, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
