//! Notification request value object

use crate::domain::channel::ChannelDefinition;

use super::identity::NotificationIdentity;
use super::relaunch::TapTrigger;

/// Body text of every posted notification
pub const CONTENT_TEXT: &str = "Hello, Notification";

/// Small icon resource of every posted notification
pub const SMALL_ICON: &str = "ic_launcher_foreground";

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Event,
}

impl NotificationCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
        }
    }
}

/// Lock-screen visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
}

/// Description of a notification handed to the notification service.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    /// Key of the notification within the app
    pub notification_id: i32,
    /// Channel the notification is posted on
    pub channel: ChannelDefinition,
    pub title: String,
    pub content: String,
    pub icon: String,
    pub category: NotificationCategory,
    pub visibility: Visibility,
    /// Dismiss when tapped
    pub auto_cancel: bool,
    /// Do not bridge to other devices
    pub local_only: bool,
    /// Action run when the notification is tapped
    pub tap_trigger: TapTrigger,
}

impl NotificationRequest {
    pub fn new(
        identity: &NotificationIdentity,
        channel: ChannelDefinition,
        tap_trigger: TapTrigger,
    ) -> Self {
        Self {
            notification_id: identity.notification_id(),
            channel,
            title: identity.title().to_string(),
            content: CONTENT_TEXT.to_string(),
            icon: SMALL_ICON.to_string(),
            category: NotificationCategory::Event,
            visibility: Visibility::Public,
            auto_cancel: false,
            local_only: true,
            tap_trigger,
        }
    }

    /// Replace the icon resource
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}
