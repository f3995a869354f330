//! Push message payload and the notification request derived from it

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::MalformedPayload;

/// Notification descriptor nested inside a push message.
///
/// Both fields are optional at the wire level; validation happens when
/// the payload is turned into a [`NotificationRequest`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A single push message as delivered by the provider.
///
/// Only the `notification` descriptor is consumed; every other provider
/// field is retained opaquely and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    pub notification: Option<NotificationContent>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MessagePayload {
    /// Create a payload with the given title and body
    pub fn with_notification(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            notification: Some(NotificationContent {
                title: Some(title.into()),
                body: Some(body.into()),
            }),
            extra: HashMap::new(),
        }
    }

    /// Validate this payload and build the notification request for it.
    ///
    /// A missing notification descriptor, or a missing or empty title or
    /// body, is a [`MalformedPayload`]. The icon is never taken from the
    /// payload; it is the fixed icon configured for the bridge.
    pub fn into_request(self, icon: &str) -> Result<NotificationRequest, MalformedPayload> {
        let notification = self
            .notification
            .ok_or(MalformedPayload {
                field: "notification",
            })?;

        let title = notification
            .title
            .filter(|t| !t.is_empty())
            .ok_or(MalformedPayload {
                field: "notification.title",
            })?;

        let body = notification
            .body
            .filter(|b| !b.is_empty())
            .ok_or(MalformedPayload {
                field: "notification.body",
            })?;

        Ok(NotificationRequest {
            title,
            options: NotificationOptions {
                body,
                icon: icon.to_string(),
            },
        })
    }
}

/// Display options for a notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
}

/// A single display request derived from one payload.
///
/// Created per event, handed to the notifier once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub options: NotificationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_builds_request() {
        let payload = MessagePayload::with_notification("New message", "Alice: hi there");
        let request = payload.into_request("mail-message-new").unwrap();

        assert_eq!(request.title, "New message");
        assert_eq!(request.options.body, "Alice: hi there");
        assert_eq!(request.options.icon, "mail-message-new");
    }

    #[test]
    fn missing_notification_is_malformed() {
        let payload = MessagePayload::default();
        let err = payload.into_request("icon").unwrap_err();
        assert_eq!(err.field, "notification");
    }

    #[test]
    fn missing_title_is_malformed() {
        let payload = MessagePayload {
            notification: Some(NotificationContent {
                title: None,
                body: Some("body".to_string()),
            }),
            extra: HashMap::new(),
        };
        let err = payload.into_request("icon").unwrap_err();
        assert_eq!(err.field, "notification.title");
    }

    #[test]
    fn empty_body_is_malformed() {
        let payload = MessagePayload {
            notification: Some(NotificationContent {
                title: Some("title".to_string()),
                body: Some(String::new()),
            }),
            extra: HashMap::new(),
        };
        let err = payload.into_request("icon").unwrap_err();
        assert_eq!(err.field, "notification.body");
    }

    #[test]
    fn unknown_provider_fields_are_ignored() {
        let json = r#"{
            "notification": {"title": "t", "body": "b"},
            "messageId": "m-123",
            "data": {"k": "v"},
            "priority": "high"
        }"#;

        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        let request = payload.into_request("icon").unwrap();
        assert_eq!(request.title, "t");
        assert_eq!(request.options.body, "b");
    }

    #[test]
    fn icon_comes_from_config_not_payload() {
        let json = r#"{"notification": {"title": "t", "body": "b", "icon": "/evil.png"}}"#;
        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        let request = payload.into_request("configured-icon").unwrap();
        assert_eq!(request.options.icon, "configured-icon");
    }
}
