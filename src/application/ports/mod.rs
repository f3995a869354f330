//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod messaging;
pub mod notifier;

// Re-export common types
pub use config::ConfigStore;
pub use messaging::{ConnectError, MessageSource, StreamError};
pub use notifier::{NotificationError, Notifier};
