//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// PushBridge - hosted push messages as desktop notifications
#[derive(Parser, Debug)]
#[command(name = "push-bridge")]
#[command(version = "1.0.0")]
#[command(about = "Bridge hosted push messages to desktop notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG location)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Provider endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Notification icon (freedesktop icon name or path)
    #[arg(short = 'i', long, value_name = "ICON")]
    pub icon: Option<String>,

    /// Application name shown on notifications
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Notification backend to use
    #[arg(long, value_name = "BACKEND", default_value = "notify-rust")]
    pub notifier: NotifierArg,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Notification backend for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotifierArg {
    /// Cross-platform notify-rust backend
    NotifyRust,
    /// notify-send subprocess fallback
    NotifySend,
}

/// Parsed bridge options
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub icon: Option<String>,
    pub app_name: Option<String>,
    pub notifier: NotifierArg,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "auth_domain",
    "project_id",
    "storage_bucket",
    "sender_id",
    "app_id",
    "endpoint",
    "icon",
    "app_name",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["push-bridge"]);
        assert!(cli.config.is_none());
        assert!(cli.endpoint.is_none());
        assert!(cli.icon.is_none());
        assert!(cli.app_name.is_none());
        assert_eq!(cli.notifier, NotifierArg::NotifyRust);
    }

    #[test]
    fn cli_parses_icon() {
        let cli = Cli::parse_from(["push-bridge", "-i", "dialog-information"]);
        assert_eq!(cli.icon, Some("dialog-information".to_string()));
    }

    #[test]
    fn cli_parses_endpoint() {
        let cli = Cli::parse_from(["push-bridge", "--endpoint", "http://localhost:8080"]);
        assert_eq!(cli.endpoint, Some("http://localhost:8080".to_string()));
    }

    #[test]
    fn cli_parses_notifier_backend() {
        let cli = Cli::parse_from(["push-bridge", "--notifier", "notify-send"]);
        assert_eq!(cli.notifier, NotifierArg::NotifySend);
    }

    #[test]
    fn cli_parses_config_path() {
        let cli = Cli::parse_from(["push-bridge", "-c", "/tmp/pb.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pb.toml")));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["push-bridge", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["push-bridge", "config", "set", "project_id", "proj-1"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "project_id");
            assert_eq!(value, "proj-1");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("sender_id"));
        assert!(is_valid_config_key("icon"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
