//! Main app runner for the interactive session

use std::env;
use std::io::IsTerminal;
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::ports::{
    ConfigStore, ElapsedClock, NotificationService, PermissionGate, RequestTokenSource,
};
use crate::application::NotificationLifecycleController;
use crate::domain::channel::ChannelCatalog;
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_notification_service, BootClock, GrantedPermission, RandomTokenSource, XdgConfigStore,
};

use super::args::SessionOptions;
use super::presenter::Presenter;
use super::screen::MainScreen;
use super::session::{SessionCommand, SESSION_HELP};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable selecting the notification backend
pub const BACKEND_ENV: &str = "CHANNEL_NOTIFY_BACKEND";

/// Run the interactive session on stdin
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Create adapters
    let service = create_notification_service(options.backend, &options.app_name);
    let controller =
        NotificationLifecycleController::new(service, BootClock::new(), RandomTokenSource::new())
            .with_icon(options.icon.as_str());
    let screen = MainScreen::new(controller, GrantedPermission);

    match screen.on_create(options.launch.as_ref()).await {
        Ok(Some(cancelled)) => presenter.info(&format!("Cleared notification {}", cancelled)),
        Ok(None) => {}
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    }
    screen.on_resume().await;

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        presenter.info(&format!(
            "Notifications via {} backend. Type 'help' for commands.",
            options.backend
        ));
    }

    let reader = BufReader::new(tokio::io::stdin());
    match drive_session(&screen, reader, &presenter, options.default_channel).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&format!("Failed to read input: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute session commands read from `reader` until EOF, `quit` or Ctrl+C
pub async fn drive_session<S, C, T, P, R>(
    screen: &MainScreen<S, C, T, P>,
    reader: R,
    presenter: &Presenter,
    default_channel: i32,
) -> std::io::Result<()>
where
    S: NotificationService,
    C: ElapsedClock,
    T: RequestTokenSource,
    P: PermissionGate,
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                presenter.warn(&e.to_string());
                continue;
            }
        };

        match command {
            SessionCommand::Show { id_text, channel } => {
                let selection = channel.unwrap_or(default_channel);
                if let Some(posted) = screen.on_show_clicked(&id_text, selection).await {
                    presenter.output(&format!(
                        "posted {} on {}: {}",
                        posted.notification_id,
                        posted.channel.identifier(),
                        posted.title
                    ));
                }
            }
            SessionCommand::Cancel { id_text } => {
                if let Some(id) = screen.on_cancel_clicked(&id_text).await {
                    presenter.output(&format!("cancelled {}", id));
                }
            }
            SessionCommand::Tap { notification_id } => {
                match screen.on_notification_tapped(notification_id).await {
                    Some(payload) => presenter.output(&format!(
                        "relaunched by {}: {}",
                        payload.notification_id(),
                        payload.title().unwrap_or("(no title)")
                    )),
                    None => presenter.warn(&format!(
                        "No visible notification with id {}",
                        notification_id
                    )),
                }
            }
            SessionCommand::Channels => {
                for (index, definition) in ChannelCatalog::all_definitions().iter().enumerate() {
                    presenter.output(&presenter.format_channel(
                        index,
                        definition.identifier(),
                        definition.display_name(),
                    ));
                }
            }
            SessionCommand::List => {
                let ids = screen.active_notifications().await;
                if ids.is_empty() {
                    presenter.output("(none)");
                } else {
                    let ids: Vec<String> = ids.iter().map(i32::to_string).collect();
                    presenter.output(&ids.join(" "));
                }
            }
            SessionCommand::Help => presenter.output(SESSION_HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    // Build env config
    let env_config = AppConfig {
        backend: env::var(BACKEND_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Selector index preselected for `show`.
///
/// An index naming no channel falls back to DEFAULT_PRIORITY.
pub fn resolve_default_channel(config: &AppConfig) -> i32 {
    let configured = config.default_channel_or_default();
    let definition = config.default_channel_definition();
    let index = definition.id().ordinal() as i32;
    if index != configured {
        log::warn!(
            "default_channel {} names no channel, using {}",
            configured,
            definition.identifier()
        );
    }
    index
}

/// Load merged configuration from the default XDG location
pub async fn load_default_config(cli_config: AppConfig) -> AppConfig {
    load_merged_config(&XdgConfigStore::new(), cli_config).await
}
