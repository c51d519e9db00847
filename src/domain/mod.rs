//! Domain layer - Core notification policy
//!
//! Contains the channel catalog, notification value objects, configuration
//! and domain errors. This layer has no dependencies on external systems.

pub mod channel;
pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use channel::{ChannelCatalog, ChannelDefinition, ChannelId, Importance};
pub use config::AppConfig;
pub use error::*;
pub use notification::{
    NotificationIdentity, NotificationRequest, RelaunchIntentPayload, TapTrigger,
};
