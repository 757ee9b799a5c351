//! Time related utils.

use chrono::Utc;

/// DateTime is an alias of `chrono::DateTime<Utc>`.
///
/// Signing never reads the clock; the caller supplies the timestamp.
pub type DateTime = chrono::DateTime<Utc>;

/// Format a DateTime into an HTTP date: `Sat, 01 Jan 2022 00:00:00 GMT`
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %T GMT").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 8, 12, 34).unwrap();
        assert_eq!(format_http_date(t), "Tue, 01 Mar 2022 08:12:34 GMT");

        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(format_http_date(epoch), "Thu, 01 Jan 1970 00:00:00 GMT");
    }
}
