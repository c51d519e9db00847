//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::channel::ChannelCatalog;
use crate::domain::error::ConfigError;
use crate::infrastructure::notification::{NotificationBackend, VALID_BACKENDS};

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
    ensure_valid_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "backend" => config.backend = Some(value.trim().to_lowercase()),
        "default_channel" => config.default_channel = Some(parse_channel_index(key, value)?),
        "icon" => config.icon = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "app_name" => config.app_name,
        "backend" => config.backend,
        "default_channel" => config.default_channel.map(|i| i.to_string()),
        "icon" => config.icon,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("app_name", config.app_name.as_deref().unwrap_or("(not set)"));
    presenter.key_value("backend", config.backend.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "default_channel",
        &config
            .default_channel
            .map(|i| i.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("icon", config.icon.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "app_name" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        "backend" => {
            value
                .parse::<NotificationBackend>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_BACKENDS.join(", ")
                    ),
                })?;
        }
        "default_channel" => {
            parse_channel_index(key, value)?;
        }
        _ => {} // icon accepts any string
    }
    Ok(())
}

/// Parse a selector index that names a catalog channel
fn parse_channel_index(key: &str, value: &str) -> Result<i32, ConfigError> {
    let invalid = || ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Invalid value '{}'. Expected a channel index 0-{}",
            value,
            ChannelCatalog::all_definitions().len() - 1
        ),
    };

    let index = value.trim().parse::<i32>().map_err(|_| invalid())?;
    ChannelCatalog::lookup_by_selection_index(index)
        .map(|_| index)
        .ok_or_else(invalid)
}
