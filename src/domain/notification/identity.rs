//! Notification identity value object

use crate::domain::error::InvalidIdFormat;

/// Parse a notification id typed into the id field.
///
/// Accepts an optional sign followed by decimal digits. Surrounding
/// whitespace is not trimmed.
pub fn parse_notification_id(input: &str) -> Result<i32, InvalidIdFormat> {
    input.parse::<i32>().map_err(|_| InvalidIdFormat {
        input: input.to_string(),
    })
}

/// Id and generated title of one posted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationIdentity {
    notification_id: i32,
    title: String,
}

impl NotificationIdentity {
    /// Build an identity whose title embeds the elapsed-since-boot clock,
    /// so repeated posts under one id stay visually distinct.
    pub fn new(notification_id: i32, elapsed_realtime_ms: u64) -> Self {
        Self {
            notification_id,
            title: format!("鉄人{}号", elapsed_realtime_ms),
        }
    }

    pub fn notification_id(&self) -> i32 {
        self.notification_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!(parse_notification_id("0"), Ok(0));
        assert_eq!(parse_notification_id("42"), Ok(42));
        assert_eq!(parse_notification_id("-7"), Ok(-7));
        assert_eq!(parse_notification_id("+7"), Ok(7));
        assert_eq!(parse_notification_id("2147483647"), Ok(i32::MAX));
    }

    #[test]
    fn parse_invalid_ids() {
        assert!(parse_notification_id("abc").is_err());
        assert!(parse_notification_id("").is_err());
        assert!(parse_notification_id(" 1").is_err());
        assert!(parse_notification_id("1.5").is_err());
        assert!(parse_notification_id("2147483648").is_err());
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = parse_notification_id("abc").unwrap_err();
        assert_eq!(err.input, "abc");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn title_embeds_clock() {
        let identity = NotificationIdentity::new(3, 123456);
        assert_eq!(identity.notification_id(), 3);
        assert_eq!(identity.title(), "鉄人123456号");
    }

    #[test]
    fn titles_differ_across_clock_readings() {
        let first = NotificationIdentity::new(1, 1000);
        let second = NotificationIdentity::new(1, 1001);
        assert_ne!(first.title(), second.title());
    }
}
