use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::product::errors::ProductError;
use crate::domain::product::events::ProductCreatedEvent;
use crate::domain::product::events::ProductDeletedEvent;
use crate::domain::product::events::ProductUpdatedEvent;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::EventPublisher;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
///
/// Concrete implementation of ProductServicePort with dependency injection.
pub struct ProductService<PR, EP>
where
    PR: ProductRepository,
    EP: EventPublisher,
{
    repository: Arc<PR>,
    event_publisher: Arc<EP>,
}

impl<PR, EP> ProductService<PR, EP>
where
    PR: ProductRepository,
    EP: EventPublisher,
{
    /// Create a new product service with injected dependencies.
    pub fn new(repository: Arc<PR>, event_publisher: Arc<EP>) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }
}

#[async_trait]
impl<PR, EP> ProductServicePort for ProductService<PR, EP>
where
    PR: ProductRepository,
    EP: EventPublisher,
{
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: command.name,
            quantity: command.quantity,
            price: command.price,
            image: command.image,
            created_at: now,
            updated_at: now,
        };

        let created_product = self.repository.create(product).await?;

        let event = ProductCreatedEvent::new(&created_product);
        if let Err(e) = self.event_publisher.publish_product_created(&event).await {
            tracing::error!(
                "Failed to publish ProductCreated event for product {}: {}",
                created_product.id,
                e
            );
        }

        Ok(created_product)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            product.name = new_name;
        }

        if let Some(new_quantity) = command.quantity {
            product.quantity = new_quantity;
        }

        if let Some(new_price) = command.price {
            product.price = new_price;
        }

        if let Some(new_image) = command.image {
            product.image = Some(new_image);
        }

        product.updated_at = Utc::now();

        let updated_product = self.repository.update(product).await?;

        let event = ProductUpdatedEvent::new(&updated_product);
        if let Err(e) = self.event_publisher.publish_product_updated(&event).await {
            tracing::error!(
                "Failed to publish ProductUpdated event for product {}: {}",
                updated_product.id,
                e
            );
        }

        Ok(updated_product)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await?;

        let event = ProductDeletedEvent::new(id.to_string());
        if let Err(e) = self.event_publisher.publish_product_deleted(&event).await {
            tracing::error!(
                "Failed to publish ProductDeleted event for product {}: {}",
                id,
                e
            );
        }

        Ok(())
    }
}
