//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::message::NotificationRequest;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    DisplayFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Display a desktop notification.
    ///
    /// # Arguments
    /// * `request` - Title and display options for the notification
    ///
    /// # Returns
    /// Ok(()) once the platform has accepted the display request
    async fn display(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn display(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().display(request).await
    }
}
