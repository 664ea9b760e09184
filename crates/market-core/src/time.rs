//! Timestamps
//!
//! Backend dates arrive as RFC 3339, naive ISO strings or epoch millis.

use chrono::{DateTime, NaiveDateTime};

/// Epoch milliseconds, or `None` when unparseable
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    raw.parse::<i64>().ok()
}

/// Relative label such as "5m ago"; older than a week shows the date
pub fn time_ago(raw: &str, now_millis: i64) -> Option<String> {
    let then = parse_timestamp(raw)?;
    let seconds = now_millis.saturating_sub(then).max(0) / 1000;
    let label = match seconds {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", seconds / 60),
        3_600..=86_399 => format!("{}h ago", seconds / 3_600),
        86_400..=604_799 => format!("{}d ago", seconds / 86_400),
        _ => DateTime::from_timestamp_millis(then)?.format("%Y-%m-%d").to_string(),
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_717_243_200_000; // 2024-06-01T12:00:00Z

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_timestamp("2024-06-01T12:00:00Z"), Some(NOW));
        assert_eq!(parse_timestamp("2024-06-01T12:00:00.000"), Some(NOW));
        assert_eq!(parse_timestamp("1717243200000"), Some(NOW));
        assert_eq!(parse_timestamp("last tuesday"), None);
    }

    #[test]
    fn test_time_ago() {
        assert_eq!(time_ago("2024-06-01T11:59:30Z", NOW).as_deref(), Some("just now"));
        assert_eq!(time_ago("2024-06-01T11:15:00Z", NOW).as_deref(), Some("45m ago"));
        assert_eq!(time_ago("2024-06-01T09:00:00Z", NOW).as_deref(), Some("3h ago"));
        assert_eq!(time_ago("2024-05-30T12:00:00Z", NOW).as_deref(), Some("2d ago"));
        assert_eq!(time_ago("2024-01-15T08:00:00Z", NOW).as_deref(), Some("2024-01-15"));
        assert_eq!(time_ago("??", NOW), None);
    }

    #[test]
    fn test_time_ago_extreme_epochs() {
        assert_eq!(time_ago("-9223372036854775808", NOW), None);
        assert_eq!(time_ago("9223372036854775807", NOW).as_deref(), Some("just now"));
    }
}
