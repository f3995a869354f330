//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for bridge configuration storage
///
/// Persists the provider credential set and bridge settings (endpoint,
/// icon, app name). Credentials are opaque provider-issued strings; the
/// store never interprets them.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the bridge configuration from storage.
    ///
    /// # Returns
    /// The stored config; credentials and settings absent from the file
    /// are None and may be supplied by env vars or CLI flags instead
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save the bridge configuration to storage.
    ///
    /// # Arguments
    /// * `config` - Credential set and bridge settings to persist
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize the configuration file with bridge defaults.
    /// Credentials stay unset; they come from env or `config set`.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
