//! Relaunch payload and tap trigger
//!
//! Tapping a posted notification reopens the main screen with a payload
//! naming the notification that was tapped. The trigger carrying that
//! payload is sealed at creation: it can be fired, not inspected or edited.

/// Sentinel id meaning "no notification"
pub const NO_NOTIFICATION_ID: i32 = -1;

/// Data delivered back to the app when a notification is tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaunchIntentPayload {
    notification_id: i32,
    title: Option<String>,
}

impl RelaunchIntentPayload {
    pub fn new(notification_id: i32, title: Option<String>) -> Self {
        Self {
            notification_id,
            title,
        }
    }

    /// Build from launch extras, defaulting a missing id to the sentinel.
    pub fn from_extras(notification_id: Option<i32>, title: Option<String>) -> Self {
        Self::new(notification_id.unwrap_or(NO_NOTIFICATION_ID), title)
    }

    pub fn notification_id(&self) -> i32 {
        self.notification_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The notification to clean up, unless the id is the sentinel
    pub fn target_notification(&self) -> Option<i32> {
        (self.notification_id != NO_NOTIFICATION_ID).then_some(self.notification_id)
    }
}

/// Screen a tap trigger reopens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Main screen, clearing anything above it and starting a new task
    MainScreen,
}

/// Immutable tap action attached to a notification.
///
/// Two triggers are equal only when they were sealed with the same token,
/// target and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapTrigger {
    request_token: i32,
    target: LaunchTarget,
    payload: RelaunchIntentPayload,
}

impl TapTrigger {
    /// Seal `payload` into a trigger that reopens the main screen.
    ///
    /// `request_token` must be fresh per post; triggers sharing a token are
    /// not distinguished.
    pub fn new(request_token: i32, payload: RelaunchIntentPayload) -> Self {
        Self {
            request_token,
            target: LaunchTarget::MainScreen,
            payload,
        }
    }

    /// Fire the trigger, delivering its payload to the launch target
    pub fn fire(&self) -> RelaunchIntentPayload {
        self.payload.clone()
    }
}
