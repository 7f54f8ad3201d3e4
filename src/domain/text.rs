use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    s.chars().fold(String::from(""), |acc: String, c: char| {
        let last_line = acc.lines().last().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            #[cfg(windows)]
            {
                format!("{}\r\n...", lines[..max_height - 1].join("\r\n"))
            }
            #[cfg(not(windows))]
            {
                format!("{}\n...", lines[..max_height - 1].join("\n"))
            }
        }
    } else {
        s.to_string()
    }
}

/// Shorten a long wallet address to `head:tail`.
/// Bech32 `npub1` prefixes are dropped first; short addresses are returned as is.
pub fn shorten_address(address: impl Into<String>) -> String {
    let address: String = address.into();
    let body = address.strip_prefix("npub1").unwrap_or(&address);
    let len = body.chars().count();
    if len <= 12 {
        return address;
    }
    let heading: String = body.chars().take(5).collect();
    let trail: String = body.chars().skip(len - 5).collect();
    format!("{heading}:{trail}")
}

/// Relative age of a timestamp as shown on post cards
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if hours < 168 {
        format!("{}d ago", hours / 24)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Cut `s` to at most `max_chars` characters, appending an ellipsis when cut
pub fn excerpt(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        let actual = wrap_text("hello, world!", 4);
        let expected = "hell\no, w\norld\n!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_no_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 18);
        let expected = "こんにちは、世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 7);
        let expected = "こんに\nちは、\n世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 3);
        let expected = "foo\nbar\nbaz";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 2);
        let expected = "foo\n...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_single_line() {
        let actual = truncate_text("foo\nbar", 1);
        let expected = "...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_zero_height() {
        let actual = truncate_text("foo\nbar\nbaz", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("npub1f5uuywemqwlejj2d7he6zjw8jz9wr0r5z6q8lhttxj333ph24cjsymjmug"),
            "f5uuy:mjmug"
        );
        assert_eq!(shorten_address("ST1ABC123DEF456"), "ST1AB:EF456");
        assert_eq!(shorten_address("ST1SHORT"), "ST1SHORT");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "Just now");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative_time(now - Duration::hours(50), now), "2d ago");
        assert_eq!(
            format_relative_time(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(), now),
            "2024-01-01"
        );
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("hello", 10), "hello");
        assert_eq!(excerpt("hello world", 5), "hello...");
    }
}
