//! Main app runner for the bridge

use std::env;
use std::process::ExitCode;

use colored::Colorize;

use crate::application::ports::{ConfigStore, Notifier};
use crate::application::{BridgeCallbacks, NotificationBridge};
use crate::domain::config::AppConfig;
use crate::domain::message::NotificationRequest;
use crate::infrastructure::{
    create_notifier, HostedMessagingClient, NotifySendNotifier, XdgConfigStore,
};

use super::args::{BridgeOptions, NotifierArg};
use super::presenter::Presenter;
use super::signals::ShutdownListener;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the bridge until the stream ends or a shutdown signal arrives
pub async fn run_bridge(options: BridgeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Merge config: defaults < file < env < cli
    let store = config_store(&options);
    let config = load_merged_config(&store, cli_config(&options)).await;

    // Validate the credential set
    let messaging_config = match config.messaging_config() {
        Ok(mc) => mc,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Setup signal handler
    let mut shutdown = match ShutdownListener::new() {
        Ok(listener) => listener,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Register with the provider. Failure is fatal: no subscription
    // exists and no retry is attempted.
    let project_id = messaging_config.project_id.clone();
    let mut client = HostedMessagingClient::new(messaging_config);

    presenter.start_spinner(&format!("Registering with provider ({})...", project_id));
    if let Err(e) = client.register().await {
        presenter.spinner_fail(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.spinner_success("Registered, listening for background messages");

    // Create the notifier and bridge
    let notifier = select_notifier(&options, &config);
    let bridge = NotificationBridge::new(notifier, config.icon_or_default()).with_callbacks(
        BridgeCallbacks {
            on_displayed: Some(Box::new(|request: &NotificationRequest| {
                eprintln!("{} Displayed: {}", "✓".green(), request.title);
            })),
            on_dropped: Some(Box::new(|reason: &str| {
                eprintln!("{} Dropped: {}", "⚠".yellow(), reason);
            })),
        },
    );

    // Run until the stream ends or a shutdown signal arrives
    tokio::select! {
        result = bridge.run(&mut client) => match result {
            Ok(()) => {
                presenter.info("Message stream ended");
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        _ = shutdown.recv() => {
            presenter.info("Shutting down");
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Build the config store, honoring a custom path from the CLI
pub fn config_store(options: &BridgeOptions) -> XdgConfigStore {
    match options.config {
        Some(ref path) => XdgConfigStore::with_path(path.clone()),
        None => XdgConfigStore::new(),
    }
}

/// Config contributed by CLI flags
fn cli_config(options: &BridgeOptions) -> AppConfig {
    AppConfig {
        endpoint: options.endpoint.clone(),
        icon: options.icon.clone(),
        app_name: options.app_name.clone(),
        ..Default::default()
    }
}

/// Config contributed by environment variables
fn env_config() -> AppConfig {
    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }

    AppConfig {
        api_key: var("PUSH_BRIDGE_API_KEY"),
        auth_domain: var("PUSH_BRIDGE_AUTH_DOMAIN"),
        project_id: var("PUSH_BRIDGE_PROJECT_ID"),
        storage_bucket: var("PUSH_BRIDGE_STORAGE_BUCKET"),
        sender_id: var("PUSH_BRIDGE_SENDER_ID"),
        app_id: var("PUSH_BRIDGE_APP_ID"),
        endpoint: var("PUSH_BRIDGE_ENDPOINT"),
        icon: None,
        app_name: None,
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Create the notifier selected on the command line
fn select_notifier(options: &BridgeOptions, config: &AppConfig) -> Box<dyn Notifier> {
    let app_name = config.app_name_or_default();
    match options.notifier {
        NotifierArg::NotifyRust => create_notifier(app_name),
        NotifierArg::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
    }
}
