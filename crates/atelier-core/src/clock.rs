//! Fixed-timezone clock and year display.
//!
//! The site shows studio-local time (Europe/Berlin) in 24-hour HH:MM,
//! refreshed once a minute, plus the current calendar year in the
//! footer. No locale or timezone configurability is exposed.

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Europe::Berlin;

/// Refresh cadence for the clock line; the timer runs for the app's lifetime
pub const CLOCK_REFRESH: Duration = Duration::from_secs(60);

/// The clock line as rendered, e.g. `Berlin · Local time 14:05`
pub fn local_time_line(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&Berlin);
    format!("Berlin · Local time {}", local.format("%H:%M"))
}

/// Calendar year for the footer, in studio-local time
pub fn current_year(now: DateTime<Utc>) -> i32 {
    now.with_timezone(&Berlin).year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_winter_time_is_cet() {
        // 2026-01-15 12:30 UTC is 13:30 in Berlin (UTC+1)
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(local_time_line(now), "Berlin · Local time 13:30");
    }

    #[test]
    fn test_summer_time_is_cest() {
        // 2026-07-15 12:30 UTC is 14:30 in Berlin (UTC+2)
        let now = Utc.with_ymd_and_hms(2026, 7, 15, 12, 30, 0).unwrap();
        assert_eq!(local_time_line(now), "Berlin · Local time 14:30");
    }

    #[test]
    fn test_two_digit_padding() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 6, 5, 0).unwrap();
        assert_eq!(local_time_line(now), "Berlin · Local time 07:05");
    }

    #[test]
    fn test_year_follows_local_midnight() {
        // 23:30 UTC on New Year's Eve is already next year in Berlin
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(current_year(now), 2026);
    }
}
