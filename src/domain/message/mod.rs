//! Message payload and notification request value objects

mod payload;

pub use payload::{MessagePayload, NotificationContent, NotificationOptions, NotificationRequest};
