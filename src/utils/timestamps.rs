use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};

/// Converts epoch seconds to a `SystemTime`, including times before 1970
pub fn epoch_to_system_time(seconds: i64) -> SystemTime {
    let offset = Duration::from_secs(seconds.unsigned_abs());
    if seconds >= 0 { UNIX_EPOCH + offset } else { UNIX_EPOCH - offset }
}

/// Formats epoch seconds in local time as `YYYY-MM-DD HH:MM:SS`
///
/// Falls back to the raw number when the timestamp is out of chrono's range.
pub fn format_local(seconds: i64) -> String {
    match Local.timestamp_opt(seconds, 0).single() {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => seconds.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn test_epoch_to_system_time_positive() {
        let time = epoch_to_system_time(1_700_000_000);
        assert_eq!(time.duration_since(UNIX_EPOCH).unwrap().as_secs(), 1_700_000_000);
    }

    #[test]
    fn test_epoch_to_system_time_negative() {
        let time = epoch_to_system_time(-60);
        assert_eq!(UNIX_EPOCH.duration_since(time).unwrap().as_secs(), 60);
    }

    #[test]
    fn test_format_local_matches_local_timezone() {
        let formatted = format_local(1_700_000_000);
        let parsed = NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%d %H:%M:%S").unwrap();
        let roundtrip = Local.from_local_datetime(&parsed).earliest().unwrap();
        assert_eq!(roundtrip.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_format_local_out_of_range() {
        assert_eq!(format_local(i64::MAX), i64::MAX.to_string());
    }
}
