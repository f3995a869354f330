//! PushBridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use push_bridge::cli::{
    app::{config_store, run_bridge, EXIT_USAGE_ERROR},
    args::{BridgeOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let options = BridgeOptions {
        config: cli.config,
        endpoint: cli.endpoint,
        icon: cli.icon,
        app_name: cli.app_name,
        notifier: cli.notifier,
    };

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = config_store(&options);
            // Config failures are usage errors, same as missing credentials
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
            ExitCode::SUCCESS
        }
        None => run_bridge(options).await,
    }
}
