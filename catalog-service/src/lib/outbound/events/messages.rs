use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::product::events::ProductCreatedEvent;
use crate::domain::product::events::ProductDeletedEvent;
use crate::domain::product::events::ProductUpdatedEvent;

/// Serializable envelope for all product-related events.
///
/// Infrastructure representation for event publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ProductEventMessage {
    ProductCreated(ProductCreatedMessage),
    ProductUpdated(ProductUpdatedMessage),
    ProductDeleted(ProductDeletedMessage),
}

/// Serializable message for ProductCreated domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedMessage {
    pub event_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&ProductCreatedEvent> for ProductCreatedMessage {
    fn from(event: &ProductCreatedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            product_id: event.product_id.clone(),
            name: event.name.clone(),
            quantity: event.quantity,
            price: event.price,
            created_at: event.created_at,
        }
    }
}

impl From<ProductCreatedEvent> for ProductEventMessage {
    fn from(event: ProductCreatedEvent) -> Self {
        ProductEventMessage::ProductCreated(ProductCreatedMessage::from(&event))
    }
}

/// Serializable message for ProductUpdated domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdatedMessage {
    pub event_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<&ProductUpdatedEvent> for ProductUpdatedMessage {
    fn from(event: &ProductUpdatedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            product_id: event.product_id.clone(),
            name: event.name.clone(),
            quantity: event.quantity,
            price: event.price,
            updated_at: event.updated_at,
        }
    }
}

impl From<ProductUpdatedEvent> for ProductEventMessage {
    fn from(event: ProductUpdatedEvent) -> Self {
        ProductEventMessage::ProductUpdated(ProductUpdatedMessage::from(&event))
    }
}

/// Serializable message for ProductDeleted domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDeletedMessage {
    pub event_id: String,
    pub product_id: String,
    pub deleted_at: DateTime<Utc>,
}

impl From<&ProductDeletedEvent> for ProductDeletedMessage {
    fn from(event: &ProductDeletedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            product_id: event.product_id.clone(),
            deleted_at: event.deleted_at,
        }
    }
}

impl From<ProductDeletedEvent> for ProductEventMessage {
    fn from(event: ProductDeletedEvent) -> Self {
        ProductEventMessage::ProductDeleted(ProductDeletedMessage::from(&event))
    }
}
