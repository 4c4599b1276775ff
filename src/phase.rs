//! Day-phase resolution: which named window of the solar day an instant
//! falls in, and which event comes next.
//!
//! The resolver merges the event timelines of three consecutive UTC days
//! and brackets the instant between two adjacent events. Three days are
//! enough because every day's timeline spans from before the previous
//! midnight to past the next one, so the bracket always closes even right
//! at a date boundary or under polar conditions.

use chrono::{DateTime, Duration, TimeZone};

use crate::ephemeris::{DayEventOptions, SunEphemeris};
use crate::types::SolarEvent;
use crate::{Error, Result};

/// One endpoint of a resolved day-phase bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseWindow<Tz: TimeZone> {
    name: String,
    time: DateTime<Tz>,
}

impl<Tz: TimeZone> PhaseWindow<Tz> {
    fn from_event(event: &SolarEvent<Tz>) -> Self {
        Self {
            name: event.name().to_owned(),
            time: event.time().clone(),
        }
    }

    /// Gets the name of the event opening (or closing) the window.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the instant of that event.
    #[must_use]
    pub const fn time(&self) -> &DateTime<Tz> {
        &self.time
    }
}

/// The day phase an instant falls in: the most recent event at or before
/// it, and the next event strictly after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPhase<Tz: TimeZone> {
    current: PhaseWindow<Tz>,
    upcoming: PhaseWindow<Tz>,
}

impl<Tz: TimeZone> ResolvedPhase<Tz> {
    /// Gets the event that opened the current phase (its time is `<= now`).
    #[must_use]
    pub const fn current(&self) -> &PhaseWindow<Tz> {
        &self.current
    }

    /// Gets the next event (its time is `> now`).
    #[must_use]
    pub const fn upcoming(&self) -> &PhaseWindow<Tz> {
        &self.upcoming
    }
}

/// Resolves the day phase containing `now` at the given coordinates.
///
/// Event times of an instant exactly on an event boundary count toward the
/// phase that the event opens.
///
/// # Errors
/// Returns an error when the coordinates are out of range; a
/// `ComputationError` is the (never expected in practice) case of the
/// three-day timeline failing to bracket the instant.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use sun_phases::{resolve_phase, SunEphemeris};
///
/// let now = "2013-03-05T10:00:00Z".parse::<DateTime<chrono::Utc>>()?;
/// let phase = resolve_phase(&SunEphemeris::standard(), now, 50.5, 30.5)?;
/// assert_eq!(phase.current().name(), "goldenHourDawnEnd");
/// assert_eq!(phase.upcoming().name(), "solarNoon");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_phase<Tz: TimeZone>(
    ephemeris: &SunEphemeris,
    now: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<ResolvedPhase<Tz>> {
    let options = DayEventOptions {
        utc_day_anchor: true,
        ..DayEventOptions::default()
    };

    let mut current: Option<PhaseWindow<Tz>> = None;
    for day_offset in -1..=1 {
        let anchor = now.clone() + Duration::days(day_offset);
        let day = ephemeris.day_events_with_options(anchor, latitude, longitude, &options)?;
        for event in day.chronological() {
            if *event.time() > now {
                let current = current
                    .ok_or_else(|| Error::computation_error("no event precedes the instant"))?;
                return Ok(ResolvedPhase {
                    current,
                    upcoming: PhaseWindow::from_event(event),
                });
            }
            current = Some(PhaseWindow::from_event(event));
        }
    }

    Err(Error::computation_error(
        "three-day timeline does not bracket the instant",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_boundary_instant_opens_its_phase() {
        let ephemeris = SunEphemeris::standard();
        let noon_day = "2013-03-05T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let events = ephemeris.day_events(noon_day, 50.5, 30.5).unwrap();
        let noon = events.solar_noon().time().clone();

        let phase = resolve_phase(&ephemeris, noon, 50.5, 30.5).unwrap();
        assert_eq!(phase.current().name(), "solarNoon");
        assert_eq!(phase.upcoming().name(), "goldenHourDuskStart");
    }

    #[test]
    fn test_bracket_is_strictly_ordered() {
        let ephemeris = SunEphemeris::standard();
        let now = "2024-01-01T15:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let phase = resolve_phase(&ephemeris, now, 0.0, 0.0).unwrap();

        assert!(*phase.current().time() <= now);
        assert!(*phase.upcoming().time() > now);
        assert!(phase.current().time() < phase.upcoming().time());
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let now = "2024-01-01T15:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert!(resolve_phase(&SunEphemeris::standard(), now, -90.5, 0.0).is_err());
    }
}
