//! Channel catalog
//!
//! The fixed set of notification channels the application registers.
//! Display order is the selection order of the channel selector.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownChannelIdentifier;

use super::importance::Importance;

/// All channel ids in display order
pub const ALL_CHANNELS: &[ChannelId] = &[
    ChannelId::MinPriority,
    ChannelId::LowPriority,
    ChannelId::DefaultPriority,
    ChannelId::HighPriority,
];

const DEFINITIONS: [ChannelDefinition; 4] = [
    ChannelId::MinPriority.definition(),
    ChannelId::LowPriority.definition(),
    ChannelId::DefaultPriority.definition(),
    ChannelId::HighPriority.definition(),
];

/// Channel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    MinPriority,
    LowPriority,
    DefaultPriority,
    HighPriority,
}

impl ChannelId {
    /// Stable identifier the channel is registered under
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::MinPriority => "MIN_PRIORITY",
            Self::LowPriority => "LOW_PRIORITY",
            Self::DefaultPriority => "DEFAULT_PRIORITY",
            Self::HighPriority => "HIGH_PRIORITY",
        }
    }

    /// User-visible channel name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MinPriority => "重要度 低の通知チャネル",
            Self::LowPriority => "重要度 中の通知チャネル",
            Self::DefaultPriority => "重要度 高の通知チャネル",
            Self::HighPriority => "重要度 緊急の通知チャネル",
        }
    }

    /// Importance the channel is registered with
    pub const fn importance(&self) -> Importance {
        match self {
            Self::MinPriority => Importance::Minimal,
            Self::LowPriority => Importance::Low,
            Self::DefaultPriority => Importance::Default,
            Self::HighPriority => Importance::High,
        }
    }

    /// Position in the selector
    pub const fn ordinal(&self) -> usize {
        match self {
            Self::MinPriority => 0,
            Self::LowPriority => 1,
            Self::DefaultPriority => 2,
            Self::HighPriority => 3,
        }
    }

    pub const fn definition(&self) -> ChannelDefinition {
        ChannelDefinition {
            id: *self,
            identifier: self.identifier(),
            display_name: self.display_name(),
            importance: self.importance(),
        }
    }
}

impl FromStr for ChannelId {
    type Err = UnknownChannelIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CHANNELS
            .iter()
            .copied()
            .find(|id| id.identifier() == s)
            .ok_or_else(|| UnknownChannelIdentifier {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A registered notification channel. Immutable static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelDefinition {
    id: ChannelId,
    identifier: &'static str,
    display_name: &'static str,
    importance: Importance,
}

impl ChannelDefinition {
    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }
}

/// Read-only access to the fixed channel set
pub struct ChannelCatalog;

impl ChannelCatalog {
    /// All definitions in display order
    pub fn all_definitions() -> &'static [ChannelDefinition] {
        &DEFINITIONS
    }

    /// Display names in display order, for populating the selector
    pub fn display_names() -> Vec<&'static str> {
        DEFINITIONS.iter().map(|d| d.display_name()).collect()
    }

    /// Definition at a selector position.
    ///
    /// Negative or out-of-range positions yield `None`; callers treat that
    /// as "nothing selected".
    pub fn lookup_by_selection_index(index: i32) -> Option<ChannelDefinition> {
        usize::try_from(index)
            .ok()
            .and_then(|i| DEFINITIONS.get(i))
            .copied()
    }

    /// Definition registered under `identifier` (exact match)
    pub fn lookup_by_identifier(identifier: &str) -> Option<ChannelDefinition> {
        identifier.parse::<ChannelId>().ok().map(|id| id.definition())
    }
}
