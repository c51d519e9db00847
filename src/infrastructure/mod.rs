//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification server, the host clock
//! and the config directory.

pub mod config;
pub mod notification;
pub mod system;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notification_service, ConsoleNotificationService, DesktopNotificationService,
    NotificationBackend,
};
pub use system::{BootClock, GrantedPermission, RandomTokenSource};
