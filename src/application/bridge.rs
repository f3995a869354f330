//! Notification bridge use case

use crate::domain::message::{MessagePayload, NotificationRequest};

use super::ports::{MessageSource, Notifier, StreamError};

/// Callbacks for status updates
#[derive(Default)]
pub struct BridgeCallbacks {
    /// Called after the platform accepted a display request
    pub on_displayed: Option<Box<dyn Fn(&NotificationRequest) + Send + Sync>>,
    /// Called when a payload is dropped, with the reason
    pub on_dropped: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Bridge between the provider's background message stream and the
/// platform notifier.
///
/// Each received payload produces at most one display request; the bridge
/// holds no state between events. Duplicate provider deliveries produce
/// duplicate notifications.
pub struct NotificationBridge<N: Notifier> {
    notifier: N,
    icon: String,
    callbacks: BridgeCallbacks,
}

impl<N: Notifier> NotificationBridge<N> {
    /// Create a new bridge with the given notifier and fixed icon
    pub fn new(notifier: N, icon: impl Into<String>) -> Self {
        Self {
            notifier,
            icon: icon.into(),
            callbacks: BridgeCallbacks::default(),
        }
    }

    /// Attach status callbacks
    pub fn with_callbacks(mut self, callbacks: BridgeCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Handle one background message.
    ///
    /// A malformed payload is dropped: no notification, no retry, no
    /// propagation (the originating event cannot be replayed). A notifier
    /// failure is handled the same way.
    pub async fn handle_message(&self, payload: MessagePayload) {
        let request = match payload.into_request(&self.icon) {
            Ok(request) => request,
            Err(e) => {
                self.dropped(&e.to_string());
                return;
            }
        };

        match self.notifier.display(&request).await {
            Ok(()) => {
                if let Some(ref cb) = self.callbacks.on_displayed {
                    cb(&request);
                }
            }
            Err(e) => self.dropped(&e.to_string()),
        }
    }

    /// Consume the message stream until it ends or fails.
    ///
    /// Payloads are handled one at a time in arrival order. A stream
    /// failure is propagated to the caller; teardown is owned by the
    /// hosting runner.
    pub async fn run<S: MessageSource>(&self, source: &mut S) -> Result<(), StreamError> {
        while let Some(payload) = source.recv().await? {
            self.handle_message(payload).await;
        }
        Ok(())
    }

    fn dropped(&self, reason: &str) {
        if let Some(ref cb) = self.callbacks.on_dropped {
            cb(reason);
        }
    }
}
