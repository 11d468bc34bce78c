use chrono::{DateTime, Duration, Timelike, Utc};

/// Rounds the minute component to the nearest multiple of five (half
/// rounds up) and zeroes seconds and sub-seconds. Rounding up past :59
/// carries into the next hour.
pub fn snap_to_five_minutes(t: DateTime<Utc>) -> DateTime<Utc> {
    let minute = t.minute() as i64;
    let snapped = (minute + 2) / 5 * 5;
    let truncated = t
        - Duration::seconds(t.second() as i64)
        - Duration::nanoseconds(t.nanosecond() as i64);
    truncated + Duration::minutes(snapped - minute)
}

/// Earliest feasible start of a follow-up activity: the block's end plus
/// travel time.
pub fn with_travel_buffer(
    start: DateTime<Utc>,
    duration_min: i64,
    travel_min: i64,
) -> DateTime<Utc> {
    start + Duration::minutes(duration_min + travel_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn snap_rounds_down_below_half() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 9, 12, 31).unwrap();
        assert_eq!(
            snap_to_five_minutes(t),
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 10, 0).unwrap()
        );
    }

    #[test]
    fn snap_rounds_up_from_half() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 9, 13, 0).unwrap();
        assert_eq!(
            snap_to_five_minutes(t),
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap()
        );
    }

    #[test]
    fn snap_carries_into_next_hour() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 9, 58, 45).unwrap();
        assert_eq!(
            snap_to_five_minutes(t),
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn snap_is_idempotent() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 23, 57, 12).unwrap();
        let once = snap_to_five_minutes(t);
        assert_eq!(snap_to_five_minutes(once), once);
        assert_eq!(once.minute() % 5, 0);
        assert_eq!(once.second(), 0);
    }

    #[test]
    fn travel_buffer_adds_both_components() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(
            with_travel_buffer(start, 30, 10),
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 40, 0).unwrap()
        );
    }
}
