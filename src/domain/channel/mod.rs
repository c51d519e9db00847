//! Notification channel domain module

mod catalog;
mod importance;

pub use catalog::{ChannelCatalog, ChannelDefinition, ChannelId, ALL_CHANNELS};
pub use importance::Importance;
