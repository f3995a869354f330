//! Domain error types

use thiserror::Error;

/// Error when a received payload cannot be turned into a notification
#[derive(Debug, Clone, Error)]
#[error("Malformed payload: missing or empty field '{field}'")]
pub struct MalformedPayload {
    pub field: &'static str,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Missing credential '{key}'. Set {env_var} or run 'push-bridge config set {key} <value>'")]
    MissingCredential {
        key: &'static str,
        env_var: &'static str,
    },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
