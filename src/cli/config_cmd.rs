//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    if value.is_empty() {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must not be empty".to_string(),
        });
    }

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "auth_domain" => config.auth_domain = Some(value.to_string()),
        "project_id" => config.project_id = Some(value.to_string()),
        "storage_bucket" => config.storage_bucket = Some(value.to_string()),
        "sender_id" => config.sender_id = Some(value.to_string()),
        "app_id" => config.app_id = Some(value.to_string()),
        "endpoint" => config.endpoint = Some(value.to_string()),
        "icon" => config.icon = Some(value.to_string()),
        "app_name" => config.app_name = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;

    if key == "api_key" {
        presenter.success(&format!("{} = {}", key, mask_secret(value)));
    } else {
        presenter.success(&format!("{} = {}", key, value));
    }

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_secret(&s)),
        "auth_domain" => config.auth_domain,
        "project_id" => config.project_id,
        "storage_bucket" => config.storage_bucket,
        "sender_id" => config.sender_id,
        "app_id" => config.app_id,
        "endpoint" => config.endpoint,
        "icon" => config.icon,
        "app_name" => config.app_name,
        _ => unreachable!(), // Already validated
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.warn(&format!("{} is not set", key)),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let entries: [(&str, Option<String>); 9] = [
        ("api_key", config.api_key.as_deref().map(mask_secret)),
        ("auth_domain", config.auth_domain),
        ("project_id", config.project_id),
        ("storage_bucket", config.storage_bucket),
        ("sender_id", config.sender_id),
        ("app_id", config.app_id),
        ("endpoint", config.endpoint),
        ("icon", config.icon),
        ("app_name", config.app_name),
    ];

    for (key, value) in entries {
        match value {
            Some(v) => presenter.output(&format!("{} = {}", key, v)),
            None => presenter.output(&format!("{} = (not set)", key)),
        }
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Mask a secret value, keeping only the last 4 characters visible
fn mask_secret(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count <= 4 {
        "****".to_string()
    } else {
        let visible: String = value.chars().skip(char_count - 4).collect();
        format!("****{}", visible)
    }
}
