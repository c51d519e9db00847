//! Channel importance levels

use std::fmt;

/// Urgency tier of a notification channel, ordered from least to most intrusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Importance {
    Minimal,
    Low,
    Default,
    High,
}

impl Importance {
    /// Value on the platform importance scale (IMPORTANCE_MIN .. IMPORTANCE_HIGH)
    pub const fn platform_level(&self) -> i32 {
        match self {
            Self::Minimal => 1,
            Self::Low => 2,
            Self::Default => 3,
            Self::High => 4,
        }
    }

    /// Get the string identifier for this level
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "min",
            Self::Low => "low",
            Self::Default => "default",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Importance::Minimal < Importance::Low);
        assert!(Importance::Low < Importance::Default);
        assert!(Importance::Default < Importance::High);
    }

    #[test]
    fn platform_levels_follow_order() {
        assert_eq!(Importance::Minimal.platform_level(), 1);
        assert_eq!(Importance::Low.platform_level(), 2);
        assert_eq!(Importance::Default.platform_level(), 3);
        assert_eq!(Importance::High.platform_level(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Importance::Minimal.to_string(), "min");
        assert_eq!(Importance::High.to_string(), "high");
    }
}
