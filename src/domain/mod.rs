//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod message;

// Re-export common types
pub use config::{AppConfig, MessagingConfig};
pub use error::*;
pub use message::{MessagePayload, NotificationContent, NotificationOptions, NotificationRequest};
