//! Headless notification service
//!
//! Keeps channels and visible notifications in memory and logs every call.
//! Used when no desktop notification server is available.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::application::ports::{NotificationService, NotificationServiceError};
use crate::domain::channel::ChannelDefinition;
use crate::domain::notification::{NotificationRequest, TapTrigger};

#[derive(Default)]
struct Tray {
    channels: BTreeMap<&'static str, ChannelDefinition>,
    visible: BTreeMap<i32, NotificationRequest>,
}

/// In-memory notification service
#[derive(Default)]
pub struct ConsoleNotificationService {
    tray: Mutex<Tray>,
}

impl ConsoleNotificationService {
    /// Create an empty service with no channels
    pub fn new() -> Self {
        Self::default()
    }

    fn tray(&self) -> MutexGuard<'_, Tray> {
        self.tray.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registered channels, ordered by identifier
    pub fn channels(&self) -> Vec<ChannelDefinition> {
        self.tray().channels.values().copied().collect()
    }

    /// The visible notification with `notification_id`
    pub fn visible(&self, notification_id: i32) -> Option<NotificationRequest> {
        self.tray().visible.get(&notification_id).cloned()
    }
}

#[async_trait]
impl NotificationService for ConsoleNotificationService {
    async fn create_or_update_channel(
        &self,
        definition: &ChannelDefinition,
    ) -> Result<(), NotificationServiceError> {
        let mut tray = self.tray();
        // Importance is fixed once a channel exists
        if tray.channels.contains_key(definition.identifier()) {
            debug!("channel {} already registered", definition.identifier());
            return Ok(());
        }

        info!(
            "channel {} registered: {} (importance {})",
            definition.identifier(),
            definition.display_name(),
            definition.importance()
        );
        tray.channels.insert(definition.identifier(), *definition);
        Ok(())
    }

    async fn post(
        &self,
        notification_id: i32,
        request: NotificationRequest,
    ) -> Result<(), NotificationServiceError> {
        let mut tray = self.tray();
        if !tray.channels.contains_key(request.channel.identifier()) {
            warn!(
                "no channel {} registered, dropping notification {}",
                request.channel.identifier(),
                notification_id
            );
            return Ok(());
        }

        info!(
            "notification {} on {}: {} / {}",
            notification_id,
            request.channel.identifier(),
            request.title,
            request.content
        );
        if tray.visible.insert(notification_id, request).is_some() {
            debug!("notification {notification_id} replaced");
        }
        Ok(())
    }

    async fn cancel(&self, notification_id: i32) -> Result<(), NotificationServiceError> {
        if self.tray().visible.remove(&notification_id).is_some() {
            info!("notification {notification_id} cancelled");
        }
        Ok(())
    }

    async fn tap_trigger(&self, notification_id: i32) -> Option<TapTrigger> {
        self.tray()
            .visible
            .get(&notification_id)
            .map(|request| request.tap_trigger.clone())
    }

    async fn active_notifications(&self) -> Vec<i32> {
        self.tray().visible.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::{ChannelCatalog, ChannelId};
    use crate::domain::notification::{NotificationIdentity, RelaunchIntentPayload};

    fn request(id: i32, channel: ChannelId, clock: u64) -> NotificationRequest {
        let identity = NotificationIdentity::new(id, clock);
        let payload = RelaunchIntentPayload::new(id, Some(identity.title().to_string()));
        NotificationRequest::new(&identity, channel.definition(), TapTrigger::new(0, payload))
    }

    async fn registered() -> ConsoleNotificationService {
        let service = ConsoleNotificationService::new();
        for def in ChannelCatalog::all_definitions() {
            service.create_or_update_channel(def).await.unwrap();
        }
        service
    }

    #[tokio::test]
    async fn registration_is_idempotent() {
        let service = registered().await;
        let before = service.channels();

        for def in ChannelCatalog::all_definitions() {
            service.create_or_update_channel(def).await.unwrap();
        }

        assert_eq!(service.channels(), before);
        assert_eq!(before.len(), 4);
    }

    #[tokio::test]
    async fn post_replaces_same_id() {
        let service = registered().await;
        service
            .post(1, request(1, ChannelId::LowPriority, 10))
            .await
            .unwrap();
        service
            .post(1, request(1, ChannelId::HighPriority, 20))
            .await
            .unwrap();

        assert_eq!(service.active_notifications().await, vec![1]);
        let visible = service.visible(1).unwrap();
        assert_eq!(visible.title, "鉄人20号");
        assert_eq!(visible.channel.id(), ChannelId::HighPriority);
    }

    #[tokio::test]
    async fn post_without_channel_is_dropped() {
        let service = ConsoleNotificationService::new();
        service
            .post(1, request(1, ChannelId::LowPriority, 10))
            .await
            .unwrap();
        assert!(service.active_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_no_op() {
        let service = registered().await;
        service.cancel(123).await.unwrap();
        assert!(service.active_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn tap_trigger_of_visible_notification() {
        let service = registered().await;
        service
            .post(3, request(3, ChannelId::DefaultPriority, 5))
            .await
            .unwrap();

        let payload = service.tap_trigger(3).await.unwrap().fire();
        assert_eq!(payload.notification_id(), 3);
        assert!(service.tap_trigger(4).await.is_none());
    }

    #[tokio::test]
    async fn repost_keeps_the_newest_trigger() {
        let service = registered().await;
        let first = request(2, ChannelId::LowPriority, 1);
        let second = request(2, ChannelId::LowPriority, 2);
        let newest = second.tap_trigger.clone();

        service.post(2, first).await.unwrap();
        service.post(2, second).await.unwrap();

        assert_eq!(service.tap_trigger(2).await, Some(newest));
    }
}
