//! Notification infrastructure module
//!
//! Provides the desktop notification service using notify-rust (primary)
//! and a headless in-memory service as fallback.

mod console;
mod desktop;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use console::ConsoleNotificationService;
pub use desktop::{DesktopNotificationService, NotificationServer, NotifyRustServer};

use crate::application::ports::NotificationService;

/// Valid backend names
pub const VALID_BACKENDS: &[&str] = &["desktop", "console"];

/// Error when parsing an unknown backend name
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: desktop, console")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationBackend {
    /// Desktop notification server via notify-rust
    #[default]
    Desktop,
    /// In-memory tray, logged to stderr
    Console,
}

impl NotificationBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Console => "console",
        }
    }
}

impl FromStr for NotificationBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "console" => Ok(Self::Console),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NotificationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create the notification service for a backend
pub fn create_notification_service(
    backend: NotificationBackend,
    app_name: &str,
) -> Box<dyn NotificationService> {
    match backend {
        NotificationBackend::Desktop => Box::new(DesktopNotificationService::with_app_name(app_name)),
        NotificationBackend::Console => Box::new(ConsoleNotificationService::new()),
    }
}
