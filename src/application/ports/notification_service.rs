//! Notification service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::channel::ChannelDefinition;
use crate::domain::notification::{NotificationRequest, TapTrigger};

/// Notification service errors
#[derive(Debug, Clone, Error)]
pub enum NotificationServiceError {
    #[error("Failed to register channel {identifier}: {message}")]
    ChannelRegistration { identifier: String, message: String },

    #[error("Failed to post notification {notification_id}: {message}")]
    PostFailed { notification_id: i32, message: String },

    #[error("Failed to cancel notification {notification_id}: {message}")]
    CancelFailed { notification_id: i32, message: String },
}

/// Port for the host notification service.
///
/// At most one notification is visible per id: posting an id that is
/// already visible replaces it, cancelling an id that is not visible does
/// nothing.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Create a channel, or update the display name of an existing one.
    ///
    /// Registering the same definition again is a no-op.
    async fn create_or_update_channel(
        &self,
        definition: &ChannelDefinition,
    ) -> Result<(), NotificationServiceError>;

    /// Show `request` under `notification_id`, replacing any visible
    /// notification with the same id.
    async fn post(
        &self,
        notification_id: i32,
        request: NotificationRequest,
    ) -> Result<(), NotificationServiceError>;

    /// Remove the visible notification with `notification_id`, if any.
    async fn cancel(&self, notification_id: i32) -> Result<(), NotificationServiceError>;

    /// Tap action of the visible notification with `notification_id`
    async fn tap_trigger(&self, notification_id: i32) -> Option<TapTrigger>;

    /// Ids of all visible notifications, ascending
    async fn active_notifications(&self) -> Vec<i32>;
}

/// Blanket implementation for boxed notification services
#[async_trait]
impl NotificationService for Box<dyn NotificationService> {
    async fn create_or_update_channel(
        &self,
        definition: &ChannelDefinition,
    ) -> Result<(), NotificationServiceError> {
        self.as_ref().create_or_update_channel(definition).await
    }

    async fn post(
        &self,
        notification_id: i32,
        request: NotificationRequest,
    ) -> Result<(), NotificationServiceError> {
        self.as_ref().post(notification_id, request).await
    }

    async fn cancel(&self, notification_id: i32) -> Result<(), NotificationServiceError> {
        self.as_ref().cancel(notification_id).await
    }

    async fn tap_trigger(&self, notification_id: i32) -> Option<TapTrigger> {
        self.as_ref().tap_trigger(notification_id).await
    }

    async fn active_notifications(&self) -> Vec<i32> {
        self.as_ref().active_notifications().await
    }
}
