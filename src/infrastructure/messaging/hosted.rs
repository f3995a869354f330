//! Hosted messaging client adapter
//!
//! Speaks the provider's registration + long-poll HTTP surface. Delivery,
//! authentication, and retry all live on the provider side; this adapter
//! only exchanges credentials for a registration token and drains the
//! message stream.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ConnectError, MessageSource, StreamError};
use crate::domain::config::MessagingConfig;
use crate::domain::message::MessagePayload;

/// Long-poll wait passed to the provider, in seconds
const POLL_WAIT_SECS: u32 = 25;

// Request/response types for the provider API

#[derive(Debug, Serialize)]
struct RegistrationRequest<'a> {
    auth_domain: &'a str,
    storage_bucket: &'a str,
    sender_id: &'a str,
    app_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RegistrationResponse {
    registration_token: String,
}

#[derive(Debug, Deserialize)]
struct MessageBatch {
    messages: Vec<MessagePayload>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Client for the hosted messaging provider
pub struct HostedMessagingClient {
    config: MessagingConfig,
    client: reqwest::Client,
    registration_token: Option<String>,
    buffered: VecDeque<MessagePayload>,
}

impl HostedMessagingClient {
    /// Create a new client for the given project credentials.
    ///
    /// No network traffic happens until [`register`](Self::register).
    pub fn new(config: MessagingConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            registration_token: None,
            buffered: VecDeque::new(),
        }
    }

    /// Whether a registration token is held
    pub fn is_registered(&self) -> bool {
        self.registration_token.is_some()
    }

    fn registration_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/registrations",
            self.config.endpoint, self.config.project_id
        )
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages?wait={}",
            self.config.endpoint, self.config.project_id, POLL_WAIT_SECS
        )
    }

    /// Register with the provider, exchanging the credential set for a
    /// registration token.
    ///
    /// Failure is fatal to the bridge: no subscription exists until this
    /// succeeds, and no retry is attempted.
    pub async fn register(&mut self) -> Result<(), ConnectError> {
        let body = RegistrationRequest {
            auth_domain: &self.config.auth_domain,
            storage_bucket: &self.config.storage_bucket,
            sender_id: &self.config.sender_id,
            app_id: &self.config.app_id,
        };

        let response = self
            .client
            .post(self.registration_url())
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConnectError::Unreachable(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ConnectError::InvalidCredentials);
        }

        if !status.is_success() {
            let message = response
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ConnectError::Provider(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let registration: RegistrationResponse = response
            .json()
            .await
            .map_err(|e| ConnectError::Provider(format!("Invalid registration response: {}", e)))?;

        self.registration_token = Some(registration.registration_token);
        Ok(())
    }

    /// Long-poll the provider once for the next message batch.
    /// An empty response body (HTTP 204) means the wait expired.
    async fn poll(&self, token: &str) -> Result<Vec<MessagePayload>, StreamError> {
        let response = self
            .client
            .get(self.messages_url())
            .header("x-api-key", &self.config.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StreamError::Transport(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        if !status.is_success() {
            return Err(StreamError::Transport(format!("HTTP {}", status)));
        }

        let batch: MessageBatch = response
            .json()
            .await
            .map_err(|e| StreamError::InvalidBatch(e.to_string()))?;

        Ok(batch.messages)
    }
}

#[async_trait]
impl MessageSource for HostedMessagingClient {
    async fn recv(&mut self) -> Result<Option<MessagePayload>, StreamError> {
        if let Some(payload) = self.buffered.pop_front() {
            return Ok(Some(payload));
        }

        let token = match self.registration_token.clone() {
            Some(token) => token,
            // recv before register: treat as an ended stream, never a panic
            None => return Ok(None),
        };

        loop {
            let batch = self.poll(&token).await?;
            if !batch.is_empty() {
                self.buffered.extend(batch);
                return Ok(self.buffered.pop_front());
            }
        }
    }
}
