//! Stay-duration estimation for exit events.

use chrono::{DateTime, TimeZone};

const MICROS_PER_MINUTE: i64 = 60_000_000;

/// Whole minutes elapsed between the latest arrival and an exit.
///
/// The arrival is the most recent `arrive` entry anywhere in the log, not
/// necessarily at the same place. Returns 0 without a prior arrival, and
/// clamps out-of-order timestamps to 0.
pub fn estimate_duration<Tz1, Tz2>(exit: &DateTime<Tz1>, last_arrival: Option<&DateTime<Tz2>>) -> i32
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let Some(arrival) = last_arrival else {
        return 0;
    };

    let elapsed_micros = exit.timestamp_micros() - arrival.timestamp_micros();
    let minutes = elapsed_micros.div_euclid(MICROS_PER_MINUTE);

    i32::try_from(minutes.max(0)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use shared::time::ist;

    fn exit_time() -> DateTime<chrono::FixedOffset> {
        ist().with_ymd_and_hms(2024, 1, 10, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_no_prior_arrival() {
        assert_eq!(estimate_duration::<_, Utc>(&exit_time(), None), 0);
    }

    #[test]
    fn test_ninety_minutes() {
        let arrival = exit_time() - Duration::minutes(90);
        assert_eq!(estimate_duration(&exit_time(), Some(&arrival)), 90);
    }

    #[test]
    fn test_partial_minutes_round_down() {
        let arrival = exit_time() - Duration::seconds(59 * 60 + 59);
        assert_eq!(estimate_duration(&exit_time(), Some(&arrival)), 59);
    }

    #[test]
    fn test_sub_second_precision() {
        let arrival = exit_time() - Duration::seconds(60) + Duration::milliseconds(1);
        assert_eq!(estimate_duration(&exit_time(), Some(&arrival)), 0);
    }

    #[test]
    fn test_out_of_order_clamps_to_zero() {
        let arrival = exit_time() + Duration::minutes(5);
        assert_eq!(estimate_duration(&exit_time(), Some(&arrival)), 0);
    }

    #[test]
    fn test_mixed_offsets() {
        let arrival_utc = exit_time().with_timezone(&Utc) - Duration::minutes(30);
        assert_eq!(estimate_duration(&exit_time(), Some(&arrival_utc)), 30);
    }
}
