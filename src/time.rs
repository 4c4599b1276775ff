//! Julian-day arithmetic for the closed-form solar formulas.
//!
//! The event solver works on fractional day counts since the J2000 epoch
//! (2000-01-01 12:00 UTC), reached from Unix time via the J1970 offset.

use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian day number of the Unix epoch (1970-01-01 00:00 UTC).
pub const J1970: f64 = 2_440_587.5;

/// Julian day number of the J2000 epoch (2000-01-01 12:00 UTC).
pub const J2000: f64 = 2_451_545.0;

/// Converts an instant to its Julian day number.
#[must_use]
pub fn julian_day<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    datetime.timestamp_millis() as f64 / MILLIS_PER_DAY + J1970
}

/// Converts an instant to fractional days since the J2000 epoch.
#[must_use]
pub fn days_since_j2000<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    julian_day(datetime) - J2000
}

/// Converts a Julian day number back to an instant in the given time zone.
///
/// Sub-millisecond precision is truncated, matching the millisecond
/// resolution of [`julian_day`].
///
/// # Errors
/// Returns `ComputationError` if the Julian day is not finite or falls
/// outside the representable timestamp range.
pub fn datetime_from_julian<Tz: TimeZone>(julian: f64, timezone: &Tz) -> Result<DateTime<Tz>> {
    if !julian.is_finite() {
        return Err(Error::computation_error("Julian day is not finite"));
    }
    let millis = (julian - J1970) * MILLIS_PER_DAY;
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|utc| utc.with_timezone(timezone))
        .ok_or_else(|| Error::computation_error("Julian day outside representable range"))
}

/// Returns 12:00 of the date containing `datetime`, as a UTC instant.
///
/// With `utc_anchor` the UTC calendar date is used; otherwise the date in
/// the instant's own time zone. The choice of anchor decides which solar
/// day is computed, so callers comparing events across days must anchor
/// consistently.
pub(crate) fn noon_of_day<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    utc_anchor: bool,
) -> Result<DateTime<Utc>> {
    if utc_anchor {
        let noon = datetime
            .with_timezone(&Utc)
            .date_naive()
            .and_hms_opt(12, 0, 0)
            .expect("noon is always a valid time of day");
        Ok(Utc.from_utc_datetime(&noon))
    } else {
        let noon = datetime
            .date_naive()
            .and_hms_opt(12, 0, 0)
            .expect("noon is always a valid time of day");
        datetime
            .timezone()
            .from_local_datetime(&noon)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| Error::invalid_datetime("local noon does not exist in this time zone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_unix_epoch_julian_day() {
        let epoch = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        assert!((julian_day(&epoch) - J1970).abs() < EPSILON);
    }

    #[test]
    fn test_j2000_epoch_is_day_zero() {
        let j2000 = "2000-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert!(days_since_j2000(&j2000).abs() < EPSILON);
        assert!((julian_day(&j2000) - J2000).abs() < EPSILON);
    }

    #[test]
    fn test_julian_round_trip() {
        let instant = "2013-03-05T10:10:57.157Z".parse::<DateTime<Utc>>().unwrap();
        let j = julian_day(&instant);
        let back = datetime_from_julian(j, &Utc).unwrap();
        assert_eq!(back, instant);
    }

    #[test]
    fn test_datetime_from_julian_rejects_nan() {
        assert!(datetime_from_julian(f64::NAN, &Utc).is_err());
        assert!(datetime_from_julian(f64::INFINITY, &Utc).is_err());
    }

    #[test]
    fn test_noon_anchor_utc() {
        let instant = "2024-01-01T23:59:59Z".parse::<DateTime<Utc>>().unwrap();
        let noon = noon_of_day(&instant, true).unwrap();
        assert_eq!(noon, "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_noon_anchor_local_date_differs_from_utc_date() {
        // 23:30 UTC on Jan 1 is already Jan 2 in UTC+9.
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = "2024-01-01T23:30:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap()
            .with_timezone(&tz);

        let local_noon = noon_of_day(&instant, false).unwrap();
        assert_eq!(
            local_noon,
            "2024-01-02T03:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );

        let utc_noon = noon_of_day(&instant, true).unwrap();
        assert_eq!(
            utc_noon,
            "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
