//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Default notification icon (freedesktop icon name)
pub const DEFAULT_ICON: &str = "mail-message-new";

/// Default application name shown on notifications
pub const DEFAULT_APP_NAME: &str = "PushBridge";

/// Default hosted messaging endpoint
pub const DEFAULT_ENDPOINT: &str = "https://push.hosted-messaging.dev";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    // Provider-issued project credentials
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub sender_id: Option<String>,
    pub app_id: Option<String>,

    // Bridge settings
    pub endpoint: Option<String>,
    pub icon: Option<String>,
    pub app_name: Option<String>,
}

impl AppConfig {
    /// Create config with default values.
    /// Credentials have no defaults; they come from env/file only.
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            auth_domain: None,
            project_id: None,
            storage_bucket: None,
            sender_id: None,
            app_id: None,
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            icon: Some(DEFAULT_ICON.to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            auth_domain: other.auth_domain.or(self.auth_domain),
            project_id: other.project_id.or(self.project_id),
            storage_bucket: other.storage_bucket.or(self.storage_bucket),
            sender_id: other.sender_id.or(self.sender_id),
            app_id: other.app_id.or(self.app_id),
            endpoint: other.endpoint.or(self.endpoint),
            icon: other.icon.or(self.icon),
            app_name: other.app_name.or(self.app_name),
        }
    }

    /// Get icon, or default if not set
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Get app name, or default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get endpoint, or default if not set
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Validate the credential set into the form the messaging adapter needs.
    ///
    /// Every credential must be present and non-empty; the first missing
    /// one is reported with the environment variable that supplies it.
    pub fn messaging_config(&self) -> Result<MessagingConfig, ConfigError> {
        fn required(
            value: &Option<String>,
            key: &'static str,
            env_var: &'static str,
        ) -> Result<String, ConfigError> {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ConfigError::MissingCredential { key, env_var })
        }

        Ok(MessagingConfig {
            api_key: required(&self.api_key, "api_key", "PUSH_BRIDGE_API_KEY")?,
            auth_domain: required(&self.auth_domain, "auth_domain", "PUSH_BRIDGE_AUTH_DOMAIN")?,
            project_id: required(&self.project_id, "project_id", "PUSH_BRIDGE_PROJECT_ID")?,
            storage_bucket: required(
                &self.storage_bucket,
                "storage_bucket",
                "PUSH_BRIDGE_STORAGE_BUCKET",
            )?,
            sender_id: required(&self.sender_id, "sender_id", "PUSH_BRIDGE_SENDER_ID")?,
            app_id: required(&self.app_id, "app_id", "PUSH_BRIDGE_APP_ID")?,
            endpoint: self.endpoint_or_default().to_string(),
        })
    }
}

/// Validated provider credentials consumed by the messaging adapter.
///
/// The six credential values are opaque, provider-issued strings; the
/// bridge never interprets them.
#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub sender_id: String,
    pub app_id: String,
    pub endpoint: String,
}
