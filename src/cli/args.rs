//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::channel::ALL_CHANNELS;
use crate::domain::notification::RelaunchIntentPayload;
use crate::infrastructure::NotificationBackend;

/// ChannelNotify - notifications on prioritised channels
#[derive(Parser, Debug)]
#[command(name = "channel-notify")]
#[command(version)]
#[command(about = "Register notification channels and post, tap or cancel notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification backend (desktop, console)
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Channel used by `show` when none is given (0 = MIN_PRIORITY .. 3 = HIGH_PRIORITY)
    #[arg(
        short = 'c',
        long,
        value_name = "INDEX",
        value_parser = clap::value_parser!(i32).range(0..ALL_CHANNELS.len() as i64)
    )]
    pub channel: Option<i32>,

    /// Notification id delivered by a tap relaunch
    #[arg(long, value_name = "ID", allow_negative_numbers = true)]
    pub notification_id: Option<i32>,

    /// Notification title delivered by a tap relaunch
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Relaunch payload from the launch extras, if any were given
    pub fn launch_payload(&self) -> Option<RelaunchIntentPayload> {
        if self.notification_id.is_none() && self.title.is_none() {
            return None;
        }
        Some(RelaunchIntentPayload::from_extras(
            self.notification_id,
            self.title.clone(),
        ))
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the notification channels
    Channels {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
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

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Desktop,
    Console,
}

impl From<BackendArg> for NotificationBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Desktop => NotificationBackend::Desktop,
            BackendArg::Console => NotificationBackend::Console,
        }
    }
}

/// Parsed session options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub backend: NotificationBackend,
    pub app_name: String,
    pub icon: String,
    pub default_channel: i32,
    pub launch: Option<RelaunchIntentPayload>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "backend", "default_channel", "icon"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
