//! Notification domain module

mod identity;
mod relaunch;
mod request;

pub use identity::{parse_notification_id, NotificationIdentity};
pub use relaunch::{LaunchTarget, RelaunchIntentPayload, TapTrigger, NO_NOTIFICATION_ID};
pub use request::{NotificationCategory, NotificationRequest, Visibility, CONTENT_TEXT, SMALL_ICON};
