//! ChannelNotify CLI entry point

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use channel_notify::cli::{
    app::{
        load_default_config, resolve_default_channel, run_session, EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    channels_cmd::handle_channels_command,
    config_cmd::handle_config_command,
    presenter::Presenter,
    SessionOptions,
};
use channel_notify::domain::config::AppConfig;
use channel_notify::infrastructure::{NotificationBackend, XdgConfigStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let launch = cli.launch_payload();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        presenter.warn(&format!("Failed to initialise logging: {}", e));
    }

    // Handle subcommands
    match cli.command {
        Some(Commands::Channels { json }) => {
            if let Err(e) = handle_channels_command(json, &presenter) {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        backend: cli
            .backend
            .map(|b| NotificationBackend::from(b).to_string()),
        default_channel: cli.channel,
        ..Default::default()
    };

    // Merge config
    let config = load_default_config(cli_config).await;

    let backend = match config.backend_or_default().parse::<NotificationBackend>() {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = SessionOptions {
        backend,
        app_name: config.app_name_or_default().to_string(),
        icon: config.icon_or_default().to_string(),
        default_channel: resolve_default_channel(&config),
        launch,
    };

    run_session(options).await
}
