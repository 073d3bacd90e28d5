//! Date-key and clock helpers for presence-tracker
//!
//! Attendance is keyed by ISO calendar dates (`YYYY-MM-DD`); snapshots are
//! stamped with epoch milliseconds. Column labels in the exported sheet use
//! the abbreviated French day name plus a `DD/MM` short date, matching the
//! format the tracked rosters have always been exported with.

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};

/// Format used for date-keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Current wall-clock time
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Current instant as epoch milliseconds (snapshot timestamps)
pub fn now_millis() -> i64 {
    now().timestamp_millis()
}

/// Parse an ISO `YYYY-MM-DD` date-key
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Render a date as a `YYYY-MM-DD` date-key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Short `DD/MM` form of a date-key, or the key itself if it fails to parse
pub fn format_short_date(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => date.format("%d/%m").to_string(),
        None => key.to_string(),
    }
}

/// Abbreviated French day name for a date-key (`lun.`, `mar.`, ...)
pub fn format_day_name(key: &str) -> String {
    let Some(date) = parse_date_key(key) else {
        return String::new();
    };

    let name = match date.weekday() {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    };
    name.to_string()
}

/// `HH:MM:SS` clock label used in auto-generated snapshot names
pub fn format_clock_label(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
        let key = date_key(date);
        assert_eq!(key, "2025-11-22");
        assert_eq!(parse_date_key(&key), Some(date));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(parse_date_key("22/11/2025").is_none());
        assert!(parse_date_key("2025-13-01").is_none());
        assert!(parse_date_key("").is_none());
    }

    #[test]
    fn short_date_label() {
        assert_eq!(format_short_date("2025-11-22"), "22/11");
        // Unparseable keys pass through untouched
        assert_eq!(format_short_date("n/a"), "n/a");
    }

    #[test]
    fn french_day_names() {
        // 2025-11-22 is a Saturday
        assert_eq!(format_day_name("2025-11-22"), "sam.");
        assert_eq!(format_day_name("2025-11-24"), "lun.");
        assert_eq!(format_day_name("bogus"), "");
    }

    #[test]
    fn clock_label() {
        let dt = Local.with_ymd_and_hms(2025, 11, 22, 14, 30, 5).unwrap();
        assert_eq!(format_clock_label(&dt), "14:30:05");
    }
}
