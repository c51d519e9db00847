//! Notification lifecycle use case
//!
//! Registers the channel catalog, posts notifications on a selected
//! channel, cancels them, and cleans up the notification whose tap
//! relaunched the app.

use log::debug;
use thiserror::Error;

use crate::domain::channel::{ChannelCatalog, ChannelDefinition};
use crate::domain::notification::{
    NotificationIdentity, NotificationRequest, RelaunchIntentPayload, TapTrigger, SMALL_ICON,
};

use super::ports::{ElapsedClock, NotificationService, NotificationServiceError, RequestTokenSource};

/// Errors from the lifecycle use case
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Notification service error: {0}")]
    Service(#[from] NotificationServiceError),
}

/// Summary of a notification handed to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedNotification {
    pub notification_id: i32,
    pub channel: ChannelDefinition,
    pub title: String,
    pub request_token: i32,
}

/// Orchestrates channel registration and the notification lifecycle.
///
/// Holds no state of its own beyond its collaborators; the notification
/// service owns everything that is visible.
pub struct NotificationLifecycleController<S, C, T>
where
    S: NotificationService,
    C: ElapsedClock,
    T: RequestTokenSource,
{
    service: S,
    clock: C,
    tokens: T,
    icon: String,
}

impl<S, C, T> NotificationLifecycleController<S, C, T>
where
    S: NotificationService,
    C: ElapsedClock,
    T: RequestTokenSource,
{
    /// Create a new controller around an injected notification service
    pub fn new(service: S, clock: C, tokens: T) -> Self {
        Self {
            service,
            clock,
            tokens,
            icon: SMALL_ICON.to_string(),
        }
    }

    /// Use a different icon resource for posted notifications
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// The injected notification service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Register every catalog channel with the service.
    ///
    /// Run once per start before anything is posted. Safe to repeat: the
    /// service treats identical registrations as no-ops.
    pub async fn register_all_channels(&self) -> Result<(), LifecycleError> {
        for definition in ChannelCatalog::all_definitions() {
            debug!(
                "registering channel {} ({}, importance {})",
                definition.identifier(),
                definition.display_name(),
                definition.importance().platform_level()
            );
            self.service.create_or_update_channel(definition).await?;
        }
        Ok(())
    }

    /// Post a notification under `notification_id` on the channel at
    /// `channel_selection_index`.
    ///
    /// Returns `Ok(None)` without touching the service when the index
    /// selects no channel.
    pub async fn post_notification(
        &self,
        notification_id: i32,
        channel_selection_index: i32,
    ) -> Result<Option<PostedNotification>, LifecycleError> {
        let Some(channel) = ChannelCatalog::lookup_by_selection_index(channel_selection_index)
        else {
            debug!("no channel at selection index {channel_selection_index}, skipping post");
            return Ok(None);
        };

        let identity = NotificationIdentity::new(notification_id, self.clock.elapsed_realtime_ms());
        let payload =
            RelaunchIntentPayload::new(notification_id, Some(identity.title().to_string()));
        let request_token = self.tokens.next_token();
        let trigger = TapTrigger::new(request_token, payload);

        let request =
            NotificationRequest::new(&identity, channel, trigger).with_icon(self.icon.as_str());

        debug!(
            "posting notification {} on {} titled {}",
            notification_id,
            channel.identifier(),
            identity.title()
        );
        self.service.post(notification_id, request).await?;

        Ok(Some(PostedNotification {
            notification_id,
            channel,
            title: identity.title().to_string(),
            request_token,
        }))
    }

    /// Remove the visible notification with `notification_id`, if any
    pub async fn cancel_notification(&self, notification_id: i32) -> Result<(), LifecycleError> {
        debug!("cancelling notification {notification_id}");
        self.service.cancel(notification_id).await?;
        Ok(())
    }

    /// Cancel the notification whose tap relaunched the app.
    ///
    /// Returns the cancelled id; `None` when there is no payload or it
    /// carries the sentinel id.
    pub async fn handle_relaunch(
        &self,
        payload: Option<&RelaunchIntentPayload>,
    ) -> Result<Option<i32>, LifecycleError> {
        let Some(notification_id) = payload.and_then(RelaunchIntentPayload::target_notification)
        else {
            return Ok(None);
        };

        self.cancel_notification(notification_id).await?;
        Ok(Some(notification_id))
    }
}
