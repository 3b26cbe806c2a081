use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::models::Product;

/// Domain event published when a product is created.
///
/// Contains a snapshot of product data at creation time for downstream
/// consumers.
#[derive(Debug, Clone)]
pub struct ProductCreatedEvent {
    pub event_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl ProductCreatedEvent {
    /// Create a new ProductCreated event from a product entity.
    pub fn new(product: &Product) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            product_id: product.id.to_string(),
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

/// Domain event published when a product is updated.
#[derive(Debug, Clone)]
pub struct ProductUpdatedEvent {
    pub event_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdatedEvent {
    /// Create a new ProductUpdated event from a product entity.
    pub fn new(product: &Product) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            product_id: product.id.to_string(),
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
            updated_at: product.updated_at,
        }
    }
}

/// Domain event published when a product is deleted.
///
/// Contains only the product ID and deletion timestamp.
#[derive(Debug, Clone)]
pub struct ProductDeletedEvent {
    pub event_id: String,
    pub product_id: String,
    pub deleted_at: DateTime<Utc>,
}

impl ProductDeletedEvent {
    /// Create a new ProductDeleted event.
    pub fn new(product_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            product_id,
            deleted_at: Utc::now(),
        }
    }
}
