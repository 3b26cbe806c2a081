use async_trait::async_trait;

use crate::domain::product::errors::EventPublisherError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::events::ProductCreatedEvent;
use crate::domain::product::events::ProductDeletedEvent;
use crate::domain::product::events::ProductUpdatedEvent;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a new product.
    ///
    /// # Errors
    /// * `Persistence` - Store operation failed
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError>;

    /// Retrieve a product by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `Persistence` - Store operation failed
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// Retrieve all products.
    ///
    /// # Errors
    /// * `Persistence` - Store operation failed
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Update an existing product with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `Persistence` - Store operation failed
    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `Persistence` - Store operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for the product aggregate.
///
/// Same persistence-interface shape as the credential store: backends swap
/// without touching the domain service.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product.
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// Retrieve a product by identifier (None if not found).
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Retrieve all products.
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Update an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove a product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Event publishing for product domain events.
///
/// Fire-and-forget: the catalog never depends on a publish succeeding.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    /// Publish product creation event.
    async fn publish_product_created(
        &self,
        event: &ProductCreatedEvent,
    ) -> Result<(), EventPublisherError>;

    /// Publish product update event.
    async fn publish_product_updated(
        &self,
        event: &ProductUpdatedEvent,
    ) -> Result<(), EventPublisherError>;

    /// Publish product deletion event.
    async fn publish_product_deleted(
        &self,
        event: &ProductDeletedEvent,
    ) -> Result<(), EventPublisherError>;
}
