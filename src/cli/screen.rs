//! Main screen glue
//!
//! Turns screen events (create, resume, button clicks, notification taps)
//! into lifecycle operations. Text-field input is parsed here; an id that
//! does not parse is logged and the click is ignored.

use log::{debug, error, warn};

use crate::application::ports::{
    ElapsedClock, NotificationService, PermissionGate, RequestTokenSource,
};
use crate::application::{LifecycleError, NotificationLifecycleController, PostedNotification};
use crate::domain::channel::ChannelCatalog;
use crate::domain::notification::{parse_notification_id, RelaunchIntentPayload};

/// The single application screen
pub struct MainScreen<S, C, T, P>
where
    S: NotificationService,
    C: ElapsedClock,
    T: RequestTokenSource,
    P: PermissionGate,
{
    controller: NotificationLifecycleController<S, C, T>,
    permission: P,
}

impl<S, C, T, P> MainScreen<S, C, T, P>
where
    S: NotificationService,
    C: ElapsedClock,
    T: RequestTokenSource,
    P: PermissionGate,
{
    pub fn new(controller: NotificationLifecycleController<S, C, T>, permission: P) -> Self {
        Self {
            controller,
            permission,
        }
    }

    pub fn controller(&self) -> &NotificationLifecycleController<S, C, T> {
        &self.controller
    }

    /// Entries of the channel selector
    pub fn channel_entries(&self) -> Vec<&'static str> {
        ChannelCatalog::display_names()
    }

    /// Screen start: register channels, then clean up the notification
    /// whose tap launched us.
    ///
    /// # Returns
    /// The id cancelled on behalf of the launch payload
    pub async fn on_create(
        &self,
        launch: Option<&RelaunchIntentPayload>,
    ) -> Result<Option<i32>, LifecycleError> {
        self.controller.register_all_channels().await?;

        if let Some(payload) = launch {
            debug!(
                "notificationId: {} title: {:?}",
                payload.notification_id(),
                payload.title()
            );
        }
        self.controller.handle_relaunch(launch).await
    }

    /// Screen resume: ask for the notification permission when denied.
    ///
    /// The outcome is only logged; posting goes ahead either way.
    pub async fn on_resume(&self) -> bool {
        let denied = self.permission.is_permission_denied();
        debug!("isDenied: {denied}");
        if denied {
            let granted = self.permission.request_permission().await;
            debug!("granted: {granted}");
        }
        denied
    }

    /// "Show" button
    pub async fn on_show_clicked(
        &self,
        id_text: &str,
        selection_index: i32,
    ) -> Option<PostedNotification> {
        let notification_id = match parse_notification_id(id_text) {
            Ok(id) => id,
            Err(e) => {
                error!("error: {e}");
                return None;
            }
        };

        match self
            .controller
            .post_notification(notification_id, selection_index)
            .await
        {
            Ok(posted) => posted,
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// "Cancel" button
    ///
    /// # Returns
    /// The id a cancel was requested for
    pub async fn on_cancel_clicked(&self, id_text: &str) -> Option<i32> {
        let notification_id = match parse_notification_id(id_text) {
            Ok(id) => id,
            Err(e) => {
                error!("error: {e}");
                return None;
            }
        };

        match self.controller.cancel_notification(notification_id).await {
            Ok(()) => Some(notification_id),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// A visible notification was tapped: fire its trigger and handle the
    /// resulting relaunch.
    ///
    /// # Returns
    /// The payload delivered by the trigger, `None` if nothing with that id
    /// is visible
    pub async fn on_notification_tapped(
        &self,
        notification_id: i32,
    ) -> Option<RelaunchIntentPayload> {
        let trigger = self.controller.service().tap_trigger(notification_id).await?;
        let payload = trigger.fire();
        debug!("relaunched by notification {}", payload.notification_id());

        if let Err(e) = self.controller.handle_relaunch(Some(&payload)).await {
            warn!("{e}");
        }
        Some(payload)
    }

    /// Ids of the visible notifications
    pub async fn active_notifications(&self) -> Vec<i32> {
        self.controller.service().active_notifications().await
    }
}
