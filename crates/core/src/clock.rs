use chrono::{DateTime, SecondsFormat, SubsecRound as _, Utc};

/// Current time truncated to the microsecond precision timestamps are stored with,
/// so a record returned from a write compares equal to the same record read back.
#[must_use]
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339 form. Lexicographic order equals chronological order.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn formatted_timestamps_sort_chronologically() {
        let early = Utc.with_ymd_and_hms(2026, 1, 9, 23, 59, 59).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        assert!(format_timestamp(&early) < format_timestamp(&late));
        assert_eq!(format_timestamp(&late), "2026-01-10T00:00:00.000000Z");
    }

    #[test]
    fn now_round_trips_through_text() {
        let now = timestamp_now();
        let parsed = DateTime::parse_from_rfc3339(&format_timestamp(&now)).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), now);
    }
}
