//! Bridge behavior tests against in-memory port fakes

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use push_bridge::application::ports::{
    MessageSource, NotificationError, Notifier, StreamError,
};
use push_bridge::application::{BridgeCallbacks, NotificationBridge};
use push_bridge::domain::message::{MessagePayload, NotificationRequest};

/// Notifier fake that records every display request
#[derive(Clone, Default)]
struct RecordingNotifier {
    displayed: Arc<Mutex<Vec<NotificationRequest>>>,
}

impl RecordingNotifier {
    fn displayed(&self) -> Vec<NotificationRequest> {
        self.displayed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn display(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.displayed.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Message source fake fed from a queue; ends cleanly when drained
struct QueueSource {
    queue: VecDeque<MessagePayload>,
}

impl QueueSource {
    fn new(payloads: Vec<MessagePayload>) -> Self {
        Self {
            queue: payloads.into(),
        }
    }
}

#[async_trait]
impl MessageSource for QueueSource {
    async fn recv(&mut self) -> Result<Option<MessagePayload>, StreamError> {
        Ok(self.queue.pop_front())
    }
}

/// Message source fake that fails after draining its queue
struct FailingSource {
    inner: QueueSource,
}

#[async_trait]
impl MessageSource for FailingSource {
    async fn recv(&mut self) -> Result<Option<MessagePayload>, StreamError> {
        match self.inner.recv().await? {
            Some(payload) => Ok(Some(payload)),
            None => Err(StreamError::Transport("connection reset".to_string())),
        }
    }
}

#[tokio::test]
async fn valid_payload_produces_exactly_one_display_call() {
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "mail-message-new");
    let mut source = QueueSource::new(vec![MessagePayload::with_notification(
        "New message",
        "Alice: hi there",
    )]);

    bridge.run(&mut source).await.unwrap();

    let displayed = notifier.displayed();
    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].title, "New message");
    assert_eq!(displayed[0].options.body, "Alice: hi there");
    assert_eq!(displayed[0].options.icon, "mail-message-new");
}

#[tokio::test]
async fn malformed_payloads_produce_zero_display_calls() {
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "icon");

    let missing_title: MessagePayload =
        serde_json::from_str(r#"{"notification": {"body": "b"}}"#).unwrap();
    let missing_body: MessagePayload =
        serde_json::from_str(r#"{"notification": {"title": "t"}}"#).unwrap();
    let no_notification: MessagePayload = serde_json::from_str(r#"{"data": {"k": "v"}}"#).unwrap();

    let mut source = QueueSource::new(vec![missing_title, missing_body, no_notification]);
    bridge.run(&mut source).await.unwrap();

    assert!(notifier.displayed().is_empty());
}

#[tokio::test]
async fn every_display_call_uses_the_configured_icon() {
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "configured-icon");

    let payloads = vec![
        MessagePayload::with_notification("a", "1"),
        MessagePayload::with_notification("b", "2"),
        MessagePayload::with_notification("c", "3"),
    ];
    let mut source = QueueSource::new(payloads);
    bridge.run(&mut source).await.unwrap();

    for request in notifier.displayed() {
        assert_eq!(request.options.icon, "configured-icon");
    }
}

#[tokio::test]
async fn n_payloads_produce_n_display_calls_in_order() {
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "icon");

    let payloads: Vec<MessagePayload> = (0..10)
        .map(|i| MessagePayload::with_notification(format!("title-{}", i), format!("body-{}", i)))
        .collect();
    let mut source = QueueSource::new(payloads);
    bridge.run(&mut source).await.unwrap();

    let displayed = notifier.displayed();
    assert_eq!(displayed.len(), 10);
    for (i, request) in displayed.iter().enumerate() {
        assert_eq!(request.title, format!("title-{}", i));
        assert_eq!(request.options.body, format!("body-{}", i));
    }
}

#[tokio::test]
async fn duplicate_payloads_produce_duplicate_notifications() {
    // At-least-once provider semantics: no deduplication in the bridge
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "icon");

    let payload = MessagePayload::with_notification("same", "again");
    let mut source = QueueSource::new(vec![payload.clone(), payload]);
    bridge.run(&mut source).await.unwrap();

    assert_eq!(notifier.displayed().len(), 2);
}

#[tokio::test]
async fn malformed_payloads_are_reported_through_the_drop_callback() {
    let notifier = RecordingNotifier::default();
    let dropped = Arc::new(Mutex::new(Vec::new()));
    let dropped_clone = Arc::clone(&dropped);

    let bridge = NotificationBridge::new(notifier.clone(), "icon").with_callbacks(BridgeCallbacks {
        on_displayed: None,
        on_dropped: Some(Box::new(move |reason: &str| {
            dropped_clone.lock().unwrap().push(reason.to_string());
        })),
    });

    let mut source = QueueSource::new(vec![
        MessagePayload::with_notification("ok", "fine"),
        MessagePayload::default(),
    ]);
    bridge.run(&mut source).await.unwrap();

    assert_eq!(notifier.displayed().len(), 1);
    assert_eq!(dropped.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn stream_failure_propagates_after_handling_earlier_payloads() {
    let notifier = RecordingNotifier::default();
    let bridge = NotificationBridge::new(notifier.clone(), "icon");

    let mut source = FailingSource {
        inner: QueueSource::new(vec![MessagePayload::with_notification("t", "b")]),
    };

    let result = bridge.run(&mut source).await;
    assert!(matches!(result, Err(StreamError::Transport(_))));
    assert_eq!(notifier.displayed().len(), 1);
}
