//! Messaging port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::message::MessagePayload;

/// Errors from provider registration.
///
/// Registration failure is fatal to the bridge: no subscription is
/// established and no retry is attempted.
#[derive(Debug, Clone, Error)]
pub enum ConnectError {
    #[error("Provider rejected the project credentials")]
    InvalidCredentials,

    #[error("Provider registration failed: {0}")]
    Provider(String),

    #[error("Provider unreachable: {0}")]
    Unreachable(String),
}

/// Errors from an established message stream
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    #[error("Message stream failed: {0}")]
    Transport(String),

    #[error("Provider returned an unreadable message batch: {0}")]
    InvalidBatch(String),
}

/// Port for the provider's background message stream.
///
/// The provider owns delivery, authentication, and retry; this port only
/// surfaces payloads, one per push event, in arrival order.
#[async_trait]
pub trait MessageSource: Send {
    /// Wait for the next background message.
    ///
    /// # Returns
    /// `Ok(Some(payload))` for each delivered message, `Ok(None)` when the
    /// stream has ended cleanly, or an error if the stream breaks.
    async fn recv(&mut self) -> Result<Option<MessagePayload>, StreamError>;
}
