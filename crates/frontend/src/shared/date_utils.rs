//! Date and time rendering for the views

use chrono::{DateTime, Utc};
use contracts::domain::common::format_relative;

/// Absolute timestamp as DD.MM.YYYY HH:MM (UTC)
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

/// Relative time against the current clock, absolute beyond `threshold_hours`
pub fn relative_time(ts: DateTime<Utc>, threshold_hours: i64) -> String {
    format_relative(ts, Utc::now(), threshold_hours)
}

/// Today in `YYYY-MM-DD`, the format of `<input type="date">`
pub fn today_input_value() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(ts), "15.03.2024 14:02");
    }

    #[test]
    fn test_relative_time_switches_to_absolute() {
        let recent = Utc::now() - Duration::minutes(5);
        assert_eq!(relative_time(recent, 24), "5 minutes ago");

        let old = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 0).unwrap();
        assert_eq!(relative_time(old, 24), "02.01.2020 03:04");
    }

    #[test]
    fn test_today_input_value_shape() {
        let today = today_input_value();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
    }
}
