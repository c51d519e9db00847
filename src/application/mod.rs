//! Application layer - Use cases and port interfaces
//!
//! Contains the notification lifecycle and trait definitions
//! for external system interactions.

pub mod lifecycle;
pub mod ports;

// Re-export use cases
pub use lifecycle::{LifecycleError, NotificationLifecycleController, PostedNotification};
