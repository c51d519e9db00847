//! Desktop notification adapter using notify-rust
//!
//! Desktop notification servers have no channel concept, so channels are
//! kept in-process and a channel's importance becomes the urgency of each
//! notification posted on it. The server handle of every visible
//! notification is kept so it can be replaced and closed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, warn};

use crate::application::ports::{NotificationService, NotificationServiceError};
use crate::domain::channel::ChannelDefinition;
#[cfg(all(unix, not(target_os = "macos")))]
use crate::domain::channel::Importance;
use crate::domain::notification::{NotificationRequest, TapTrigger, SMALL_ICON};

/// Connection to the desktop notification server.
///
/// Calls may block and are run off the async runtime.
pub trait NotificationServer: Send + Sync + 'static {
    /// Server-side handle of a shown notification
    type Handle: Send + 'static;

    /// Show `notification`, replacing the server notification `replaces`
    fn show(
        &self,
        notification: notify_rust::Notification,
        replaces: Option<u32>,
    ) -> Result<Self::Handle, String>;

    /// Server id of a shown notification, if the host assigns one
    fn server_id(&self, handle: &Self::Handle) -> Option<u32>;

    /// Close a shown notification
    fn close(&self, handle: Self::Handle);
}

/// Notification server reached through notify-rust
#[derive(Debug, Default, Clone, Copy)]
pub struct NotifyRustServer;

#[cfg(all(unix, not(target_os = "macos")))]
impl NotificationServer for NotifyRustServer {
    type Handle = notify_rust::NotificationHandle;

    fn show(
        &self,
        mut notification: notify_rust::Notification,
        replaces: Option<u32>,
    ) -> Result<Self::Handle, String> {
        if let Some(id) = replaces {
            notification.id(id);
        }
        notification.show().map_err(|e| e.to_string())
    }

    fn server_id(&self, handle: &Self::Handle) -> Option<u32> {
        Some(handle.id())
    }

    fn close(&self, handle: Self::Handle) {
        handle.close();
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
impl NotificationServer for NotifyRustServer {
    type Handle = ();

    fn show(
        &self,
        notification: notify_rust::Notification,
        _replaces: Option<u32>,
    ) -> Result<Self::Handle, String> {
        notification.show().map(|_| ()).map_err(|e| e.to_string())
    }

    fn server_id(&self, _handle: &Self::Handle) -> Option<u32> {
        None
    }

    fn close(&self, _handle: Self::Handle) {
        debug!("closing notifications is not supported on this platform");
    }
}

/// A visible notification as tracked by this process
struct Visible<H> {
    tap_trigger: TapTrigger,
    handle: H,
}

/// Cross-platform notification service using notify-rust
pub struct DesktopNotificationService<N: NotificationServer = NotifyRustServer> {
    /// Application name for notifications
    app_name: String,
    server: Arc<N>,
    channels: Mutex<HashMap<&'static str, ChannelDefinition>>,
    visible: Mutex<HashMap<i32, Visible<N::Handle>>>,
}

impl DesktopNotificationService {
    /// Create a new desktop notification service
    pub fn new() -> Self {
        Self::with_app_name(crate::domain::config::DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self::with_server(app_name, NotifyRustServer)
    }
}

impl<N: NotificationServer> DesktopNotificationService<N> {
    /// Create around a specific notification server
    pub fn with_server(app_name: impl Into<String>, server: N) -> Self {
        Self {
            app_name: app_name.into(),
            server: Arc::new(server),
            channels: Mutex::new(HashMap::new()),
            visible: Mutex::new(HashMap::new()),
        }
    }

    fn channels(&self) -> MutexGuard<'_, HashMap<&'static str, ChannelDefinition>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn visible(&self) -> MutexGuard<'_, HashMap<i32, Visible<N::Handle>>> {
        self.visible.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn build(&self, request: &NotificationRequest) -> notify_rust::Notification {
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&self.app_name)
            .summary(&request.title)
            .body(&request.content)
            .icon(desktop_icon_name(&request.icon));

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            use notify_rust::{Hint, Timeout};

            notification
                .urgency(urgency_for(request.channel.importance()))
                .hint(Hint::Category(request.category.as_str().to_string()))
                .hint(Hint::Resident(!request.auto_cancel))
                .timeout(Timeout::Never);
        }

        notification
    }
}

impl Default for DesktopNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the app icon resource to a freedesktop icon name
fn desktop_icon_name(icon: &str) -> &str {
    if icon == SMALL_ICON {
        "dialog-information"
    } else {
        icon
    }
}

/// Map channel importance onto desktop urgency
#[cfg(all(unix, not(target_os = "macos")))]
fn urgency_for(importance: Importance) -> notify_rust::Urgency {
    match importance {
        Importance::Minimal | Importance::Low => notify_rust::Urgency::Low,
        Importance::Default => notify_rust::Urgency::Normal,
        Importance::High => notify_rust::Urgency::Critical,
    }
}

#[async_trait]
impl<N: NotificationServer> NotificationService for DesktopNotificationService<N> {
    async fn create_or_update_channel(
        &self,
        definition: &ChannelDefinition,
    ) -> Result<(), NotificationServiceError> {
        let mut channels = self.channels();
        if channels.contains_key(definition.identifier()) {
            debug!("channel {} already registered", definition.identifier());
        } else {
            debug!(
                "channel {} registered with importance {}",
                definition.identifier(),
                definition.importance()
            );
            channels.insert(definition.identifier(), *definition);
        }
        Ok(())
    }

    async fn post(
        &self,
        notification_id: i32,
        request: NotificationRequest,
    ) -> Result<(), NotificationServiceError> {
        if !self.channels().contains_key(request.channel.identifier()) {
            warn!(
                "no channel {} registered, dropping notification {}",
                request.channel.identifier(),
                notification_id
            );
            return Ok(());
        }

        let notification = self.build(&request);
        // The previous entry stays tracked until the server accepts its replacement
        let replaces = self
            .visible()
            .get(&notification_id)
            .and_then(|previous| self.server.server_id(&previous.handle));

        // notify-rust operations can block, so run in spawn_blocking
        let server = Arc::clone(&self.server);
        let handle = tokio::task::spawn_blocking(move || server.show(notification, replaces))
            .await
            .map_err(|e| NotificationServiceError::PostFailed {
                notification_id,
                message: format!("Task join error: {}", e),
            })?
            .map_err(|message| NotificationServiceError::PostFailed {
                notification_id,
                message,
            })?;

        self.visible().insert(
            notification_id,
            Visible {
                tap_trigger: request.tap_trigger,
                handle,
            },
        );
        Ok(())
    }

    async fn cancel(&self, notification_id: i32) -> Result<(), NotificationServiceError> {
        let Some(entry) = self.visible().remove(&notification_id) else {
            return Ok(());
        };

        let server = Arc::clone(&self.server);
        tokio::task::spawn_blocking(move || server.close(entry.handle))
            .await
            .map_err(|e| NotificationServiceError::CancelFailed {
                notification_id,
                message: format!("Task join error: {}", e),
            })
    }

    async fn tap_trigger(&self, notification_id: i32) -> Option<TapTrigger> {
        self.visible()
            .get(&notification_id)
            .map(|entry| entry.tap_trigger.clone())
    }

    async fn active_notifications(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.visible().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use crate::domain::channel::{ChannelCatalog, ChannelId};
    use crate::domain::notification::{NotificationIdentity, RelaunchIntentPayload};

    /// Server that records shows and closes, and can be made to refuse
    #[derive(Default)]
    struct FakeServer {
        next_id: AtomicU32,
        refuse: AtomicBool,
        shown: Mutex<Vec<(String, Option<u32>)>>,
        closed: Mutex<Vec<u32>>,
    }

    impl FakeServer {
        fn shown(&self) -> Vec<(String, Option<u32>)> {
            self.shown.lock().unwrap().clone()
        }

        fn closed(&self) -> Vec<u32> {
            self.closed.lock().unwrap().clone()
        }
    }

    impl NotificationServer for FakeServer {
        type Handle = u32;

        fn show(
            &self,
            notification: notify_rust::Notification,
            replaces: Option<u32>,
        ) -> Result<u32, String> {
            if self.refuse.load(Ordering::SeqCst) {
                return Err("server unavailable".to_string());
            }
            self.shown
                .lock()
                .unwrap()
                .push((notification.summary.clone(), replaces));
            Ok(replaces.unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst) + 1))
        }

        fn server_id(&self, handle: &u32) -> Option<u32> {
            Some(*handle)
        }

        fn close(&self, handle: u32) {
            self.closed.lock().unwrap().push(handle);
        }
    }

    fn request(id: i32, clock: u64) -> NotificationRequest {
        let identity = NotificationIdentity::new(id, clock);
        let payload = RelaunchIntentPayload::new(id, Some(identity.title().to_string()));
        NotificationRequest::new(
            &identity,
            ChannelId::DefaultPriority.definition(),
            TapTrigger::new(0, payload),
        )
    }

    async fn registered() -> DesktopNotificationService<FakeServer> {
        let service = DesktopNotificationService::with_server("TestApp", FakeServer::default());
        for def in ChannelCatalog::all_definitions() {
            service.create_or_update_channel(def).await.unwrap();
        }
        service
    }

    #[test]
    fn service_creates_successfully() {
        let _service = DesktopNotificationService::new();
    }

    #[test]
    fn service_with_custom_app_name() {
        let service = DesktopNotificationService::with_app_name("TestApp");
        assert_eq!(service.app_name, "TestApp");
    }

    #[test]
    fn service_default_uses_crate_name() {
        let service = DesktopNotificationService::default();
        assert_eq!(service.app_name, "channel-notify");
    }

    #[test]
    fn launcher_icon_maps_to_freedesktop_name() {
        assert_eq!(desktop_icon_name(SMALL_ICON), "dialog-information");
        assert_eq!(desktop_icon_name("mail-unread"), "mail-unread");
    }

    #[test]
    fn built_notification_offers_no_actions() {
        let service = DesktopNotificationService::new();
        let notification = service.build(&request(1, 10));
        assert_eq!(notification.summary, "鉄人10号");
        assert!(notification.actions.is_empty());
    }

    #[test]
    #[cfg(all(unix, not(target_os = "macos")))]
    fn urgency_follows_importance() {
        assert_eq!(urgency_for(Importance::Minimal), notify_rust::Urgency::Low);
        assert_eq!(urgency_for(Importance::Low), notify_rust::Urgency::Low);
        assert_eq!(urgency_for(Importance::Default), notify_rust::Urgency::Normal);
        assert_eq!(urgency_for(Importance::High), notify_rust::Urgency::Critical);
    }

    #[tokio::test]
    async fn registration_is_idempotent() {
        let service = DesktopNotificationService::new();
        for _ in 0..2 {
            for def in ChannelCatalog::all_definitions() {
                service.create_or_update_channel(def).await.unwrap();
            }
        }
        assert_eq!(service.channels().len(), 4);
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_no_op() {
        let service = registered().await;
        service.cancel(1).await.unwrap();
        assert!(service.active_notifications().await.is_empty());
        assert!(service.server.closed().is_empty());
    }

    #[tokio::test]
    async fn post_then_cancel_closes_server_notification() {
        let service = registered().await;
        service.post(5, request(5, 10)).await.unwrap();
        assert_eq!(service.active_notifications().await, vec![5]);

        service.cancel(5).await.unwrap();

        assert!(service.active_notifications().await.is_empty());
        assert_eq!(service.server.closed(), vec![1]);
    }

    #[tokio::test]
    async fn repost_replaces_server_notification_in_place() {
        let service = registered().await;
        service.post(5, request(5, 10)).await.unwrap();
        service.post(5, request(5, 20)).await.unwrap();

        assert_eq!(
            service.server.shown(),
            vec![
                ("鉄人10号".to_string(), None),
                ("鉄人20号".to_string(), Some(1))
            ]
        );
        assert_eq!(service.active_notifications().await, vec![5]);
        let payload = service.tap_trigger(5).await.unwrap().fire();
        assert_eq!(payload.title(), Some("鉄人20号"));
    }

    #[tokio::test]
    async fn failed_repost_keeps_previous_notification_cancellable() {
        let service = registered().await;
        service.post(5, request(5, 10)).await.unwrap();

        service.server.refuse.store(true, Ordering::SeqCst);
        let result = service.post(5, request(5, 20)).await;
        assert!(matches!(
            result,
            Err(NotificationServiceError::PostFailed {
                notification_id: 5,
                ..
            })
        ));

        let payload = service.tap_trigger(5).await.unwrap().fire();
        assert_eq!(payload.title(), Some("鉄人10号"));

        service.cancel(5).await.unwrap();
        assert_eq!(service.server.closed(), vec![1]);
        assert!(service.active_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn failed_first_post_tracks_nothing() {
        let service = registered().await;
        service.server.refuse.store(true, Ordering::SeqCst);

        assert!(service.post(3, request(3, 10)).await.is_err());
        assert!(service.active_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn post_without_channel_is_dropped() {
        let service = DesktopNotificationService::with_server("TestApp", FakeServer::default());
        service.post(1, request(1, 10)).await.unwrap();

        assert!(service.active_notifications().await.is_empty());
        assert!(service.server.shown().is_empty());
    }
}
