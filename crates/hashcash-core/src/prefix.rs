//! Human-readable stamp prefixes.

use chrono::{DateTime, Utc};

use crate::format::StampFormat;

/// Render a date as the six-digit `YYMMDD` stamp field.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%y%m%d").to_string()
}

/// Build the ASCII prefix for a stamp.
///
/// - Version 0: `0:<YYMMDD>:<resource>:`
/// - Version 1: `1:<denomination>:<YYMMDD>:<resource>::`
///
/// The two trailing colons in version 1 stand in for the extension field,
/// which this minter never populates. Stamps are ASCII: any non-ASCII
/// character in the resource is written as `?`. The returned length is the
/// prefix length used by padding and search.
pub fn build_prefix(
    resource: &str,
    denomination: u32,
    date: &DateTime<Utc>,
    format: StampFormat,
) -> Vec<u8> {
    let date = format_date(date);
    let resource: String = resource
        .chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect();
    let prefix = match format {
        StampFormat::Version0 => format!("0:{date}:{resource}:"),
        StampFormat::Version1 => format!("1:{denomination}:{date}:{resource}::"),
    };
    prefix.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 3, 7, 23, 59, 1).unwrap()
    }

    #[test]
    fn test_date_is_year_month_day() {
        assert_eq!(format_date(&date()), "090307");
    }

    #[test]
    fn test_version0_prefix() {
        let prefix = build_prefix("foo@example.com", 20, &date(), StampFormat::Version0);
        assert_eq!(prefix, b"0:090307:foo@example.com:");
    }

    #[test]
    fn test_version0_ignores_denomination() {
        let a = build_prefix("r", 16, &date(), StampFormat::Version0);
        let b = build_prefix("r", 32, &date(), StampFormat::Version0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_version1_prefix() {
        let prefix = build_prefix("foo@example.com", 20, &date(), StampFormat::Version1);
        assert_eq!(prefix, b"1:20:090307:foo@example.com::");
    }

    #[test]
    fn test_non_ascii_resource_replaced() {
        let prefix = build_prefix("büro", 20, &date(), StampFormat::Version0);
        assert_eq!(prefix, b"0:090307:b?ro:");
        assert!(prefix.is_ascii());
    }
}
