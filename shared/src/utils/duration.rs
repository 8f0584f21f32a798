//! Parsing of human-readable expiry strings such as `15m`, `24h` or `7d`

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*(s|sec|secs|m|min|mins|h|hr|hrs|d|day|days)?\s*$")
        .expect("Invalid duration regex")
});

/// Parse an expiry string into a number of seconds
///
/// Accepts a bare number of seconds or a number followed by one of the units
/// `s`, `m`, `h` or `d` (long forms like `min` and `days` also work).
///
/// # Returns
/// * `Some(seconds)` - Parsed, strictly positive duration
/// * `None` - Malformed input or a zero duration
pub fn parse_duration_secs(input: &str) -> Option<i64> {
    let lowered = input.to_lowercase();
    let captures = DURATION_REGEX.captures(&lowered)?;
    let amount: i64 = captures.get(1)?.as_str().parse().ok()?;

    let multiplier = match captures.get(2).map(|m| m.as_str()) {
        None | Some("s") | Some("sec") | Some("secs") => 1,
        Some("m") | Some("min") | Some("mins") => 60,
        Some("h") | Some("hr") | Some("hrs") => 3_600,
        Some(_) => 86_400,
    };

    amount.checked_mul(multiplier).filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_duration_secs("900"), Some(900));
        assert_eq!(parse_duration_secs("30s"), Some(30));
        assert_eq!(parse_duration_secs("15m"), Some(900));
        assert_eq!(parse_duration_secs("24h"), Some(86_400));
        assert_eq!(parse_duration_secs("7d"), Some(604_800));
        assert_eq!(parse_duration_secs("2 Days"), Some(172_800));
    }

    #[test]
    fn test_rejects_garbage_and_zero() {
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("soon"), None);
        assert_eq!(parse_duration_secs("-5m"), None);
        assert_eq!(parse_duration_secs("10w"), None);
        assert_eq!(parse_duration_secs("0h"), None);
    }
}
