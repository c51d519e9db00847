//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::channel::{ChannelCatalog, ChannelDefinition, ChannelId};
use crate::domain::notification::SMALL_ICON;

/// Application name shown by the desktop notification server
pub const DEFAULT_APP_NAME: &str = "channel-notify";

/// Notification backend used when none is configured
pub const DEFAULT_BACKEND: &str = "desktop";

/// Channel preselected in the selector (DEFAULT_PRIORITY)
pub const DEFAULT_CHANNEL_INDEX: i32 = ChannelId::DefaultPriority.ordinal() as i32;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub default_channel: Option<i32>,
    pub icon: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backend: Some(DEFAULT_BACKEND.to_string()),
            default_channel: Some(DEFAULT_CHANNEL_INDEX),
            icon: Some(SMALL_ICON.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            default_channel: other.default_channel.or(self.default_channel),
            icon: other.icon.or(self.icon),
        }
    }

    /// Get app name, or the crate name if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get backend name, or "desktop" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }

    /// Get the preselected channel index, or DEFAULT_PRIORITY if not set
    pub fn default_channel_or_default(&self) -> i32 {
        self.default_channel.unwrap_or(DEFAULT_CHANNEL_INDEX)
    }

    /// Get the preselected channel, falling back to DEFAULT_PRIORITY when
    /// the configured index is out of range
    pub fn default_channel_definition(&self) -> ChannelDefinition {
        ChannelCatalog::lookup_by_selection_index(self.default_channel_or_default())
            .unwrap_or_else(|| ChannelId::DefaultPriority.definition())
    }

    /// Get icon resource, or the launcher icon if not set
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(SMALL_ICON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("channel-notify".to_string()));
        assert_eq!(config.backend, Some("desktop".to_string()));
        assert_eq!(config.default_channel, Some(2));
        assert_eq!(config.icon, Some("ic_launcher_foreground".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.backend.is_none());
        assert!(config.default_channel.is_none());
        assert!(config.icon.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            backend: Some("desktop".to_string()),
            default_channel: Some(1),
            ..Default::default()
        };

        let other = AppConfig {
            app_name: Some("other".to_string()),
            backend: None, // Should not override
            default_channel: Some(3),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("other".to_string()));
        assert_eq!(merged.backend, Some("desktop".to_string())); // Kept from base
        assert_eq!(merged.default_channel, Some(3));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            icon: Some("mail-unread".to_string()),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.icon, Some("mail-unread".to_string()));
    }

    #[test]
    fn getters_fall_back_when_unset() {
        let config = AppConfig::empty();
        assert_eq!(config.app_name_or_default(), "channel-notify");
        assert_eq!(config.backend_or_default(), "desktop");
        assert_eq!(config.default_channel_or_default(), 2);
        assert_eq!(config.icon_or_default(), "ic_launcher_foreground");
    }

    #[test]
    fn default_channel_definition_resolves() {
        let config = AppConfig {
            default_channel: Some(3),
            ..Default::default()
        };
        assert_eq!(
            config.default_channel_definition().id(),
            ChannelId::HighPriority
        );
    }

    #[test]
    fn default_channel_definition_falls_back_on_out_of_range() {
        let config = AppConfig {
            default_channel: Some(9),
            ..Default::default()
        };
        assert_eq!(
            config.default_channel_definition().id(),
            ChannelId::DefaultPriority
        );
    }
}
