use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::ProductIdError;

/// Product aggregate entity.
///
/// Field contents pass through as supplied; the catalog applies no schema
/// rules of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new product
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub image: Option<String>,
}

/// Command to update an existing product with optional fields.
///
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub image: Option<String>,
}
