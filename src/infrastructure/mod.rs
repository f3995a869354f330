//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the hosted messaging provider, desktop
//! notification services, and the config file.

pub mod config;
pub mod messaging;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use messaging::HostedMessagingClient;
pub use notification::{create_notifier, NotifyRustNotifier, NotifySendNotifier};
