pub mod messages;
pub mod publisher;

pub use publisher::LogEventPublisher;
