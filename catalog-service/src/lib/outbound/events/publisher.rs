use async_trait::async_trait;
use serde::Serialize;

use crate::domain::product::errors::EventPublisherError;
use crate::domain::product::events::ProductCreatedEvent;
use crate::domain::product::events::ProductDeletedEvent;
use crate::domain::product::events::ProductUpdatedEvent;
use crate::domain::product::ports::EventPublisher;
use crate::outbound::events::messages::ProductEventMessage;

/// Event publisher that writes serialized events to the log stream.
///
/// The notification side-channel is an external fire-and-forget sink; this
/// adapter fills the port without a broker client. A broker-backed adapter
/// plugs into the same `EventPublisher` port.
pub struct LogEventPublisher;

impl LogEventPublisher {
    pub fn new() -> Self {
        Self
    }

    fn publish<T: Serialize>(
        &self,
        product_id: &str,
        message: &T,
    ) -> Result<(), EventPublisherError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| EventPublisherError::SerializationFailed(e.to_string()))?;

        tracing::info!(
            target: "product_events",
            product_id,
            payload,
            "Product event published"
        );

        Ok(())
    }
}

impl Default for LogEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish_product_created(
        &self,
        event: &ProductCreatedEvent,
    ) -> Result<(), EventPublisherError> {
        let message: ProductEventMessage = event.clone().into();
        self.publish(&event.product_id, &message)
    }

    async fn publish_product_updated(
        &self,
        event: &ProductUpdatedEvent,
    ) -> Result<(), EventPublisherError> {
        let message: ProductEventMessage = event.clone().into();
        self.publish(&event.product_id, &message)
    }

    async fn publish_product_deleted(
        &self,
        event: &ProductDeletedEvent,
    ) -> Result<(), EventPublisherError> {
        let message: ProductEventMessage = event.clone().into();
        self.publish(&event.product_id, &message)
    }
}
