//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clock;
pub mod config;
pub mod notification_service;
pub mod permission;
pub mod token;

// Re-export common types
pub use clock::ElapsedClock;
pub use config::ConfigStore;
pub use notification_service::{NotificationService, NotificationServiceError};
pub use permission::PermissionGate;
pub use token::RequestTokenSource;
