//! Configuration value objects

mod app_config;

pub use app_config::{
    AppConfig, MessagingConfig, DEFAULT_APP_NAME, DEFAULT_ENDPOINT, DEFAULT_ICON,
};
