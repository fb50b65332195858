//! Clock helpers for the fixed UTC+5:30 (IST) offset.

use chrono::{DateTime, FixedOffset, SubsecRound, TimeZone, Timelike, Utc};
use std::fmt;

/// Offset of Indian Standard Time from UTC, in seconds.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Format used in export file names.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns the fixed UTC+5:30 offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("UTC+5:30 is a valid offset")
}

/// Converts a UTC instant into IST.
pub fn to_ist(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&ist())
}

/// Current time in IST, truncated to the microsecond precision of the store.
pub fn now_ist() -> DateTime<FixedOffset> {
    to_ist(Utc::now()).trunc_subsecs(6)
}

/// Renders a timestamp for use inside a file name, e.g. `20240131_174502`.
pub fn file_stamp(ts: &DateTime<FixedOffset>) -> String {
    ts.format(FILE_STAMP_FORMAT).to_string()
}

/// ISO-8601 with the offset, printing microseconds only when present:
/// `2024-01-31T17:45:02+05:30` or `2024-01-31T17:45:02.250000+05:30`.
pub fn isoformat<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ist_offset() {
        assert_eq!(ist().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_to_ist_shifts_wall_clock() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 31, 20, 0, 0).unwrap();
        let local = to_ist(utc);
        assert_eq!(local.hour(), 1);
        assert_eq!(local.minute(), 30);
        assert_eq!(local.date_naive().to_string(), "2024-02-01");
        assert_eq!(local, utc);
    }

    #[test]
    fn test_now_ist_has_micro_precision() {
        let now = now_ist();
        assert_eq!(now.offset().local_minus_utc(), IST_OFFSET_SECS);
        assert_eq!(now.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_file_stamp() {
        let ts = ist().with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(file_stamp(&ts), "20240305_070809");
    }

    #[test]
    fn test_isoformat_carries_offset() {
        let ts = ist().with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(isoformat(&ts), "2024-03-05T07:08:09+05:30");

        let with_micros = ts + chrono::Duration::microseconds(250_000);
        assert_eq!(isoformat(&with_micros), "2024-03-05T07:08:09.250000+05:30");
    }
}
