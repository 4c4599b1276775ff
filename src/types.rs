//! Core value objects produced by the ephemeris calculations.

use chrono::{DateTime, TimeZone};

/// Ordinal position assigned to alias events, outside the primary ordering.
pub const ALIAS_POSITION: i32 = -2;

/// Solar position in horizontal coordinates, as seen from a point on Earth.
///
/// Azimuth is measured from north, increasing clockwise, in `[0, 2π)`.
/// Altitude is the angle above the horizon; zenith is its complement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    azimuth: f64,
    altitude: f64,
    declination: f64,
}

impl SolarPosition {
    pub(crate) const fn new(azimuth: f64, altitude: f64, declination: f64) -> Self {
        Self {
            azimuth,
            altitude,
            declination,
        }
    }

    /// Gets the azimuth angle in radians (0 = north, increasing clockwise).
    #[must_use]
    pub const fn azimuth_radians(&self) -> f64 {
        self.azimuth
    }

    /// Gets the azimuth angle in degrees.
    #[must_use]
    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth.to_degrees()
    }

    /// Gets the altitude angle above the horizon in radians.
    #[must_use]
    pub const fn altitude_radians(&self) -> f64 {
        self.altitude
    }

    /// Gets the altitude angle in degrees.
    #[must_use]
    pub fn altitude_degrees(&self) -> f64 {
        self.altitude.to_degrees()
    }

    /// Gets the zenith angle in radians (0 = directly overhead).
    #[must_use]
    pub fn zenith_radians(&self) -> f64 {
        core::f64::consts::FRAC_PI_2 - self.altitude
    }

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub fn zenith_degrees(&self) -> f64 {
        90.0 - self.altitude.to_degrees()
    }

    /// Gets the sun's declination in radians.
    #[must_use]
    pub const fn declination_radians(&self) -> f64 {
        self.declination
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// A single named solar event of one solar day at one location.
///
/// Events whose elevation threshold is never reached (polar day or night)
/// carry `is_valid() == false` and the solar nadir instant, so a full day
/// of events always forms a total order.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvent<Tz: TimeZone> {
    name: String,
    time: DateTime<Tz>,
    julian_day: f64,
    elevation_degrees: Option<f64>,
    valid: bool,
    position: i32,
    deprecated_alias: bool,
}

impl<Tz: TimeZone> SolarEvent<Tz> {
    pub(crate) fn new(
        name: impl Into<String>,
        time: DateTime<Tz>,
        julian_day: f64,
        elevation_degrees: Option<f64>,
        valid: bool,
        position: i32,
    ) -> Self {
        Self {
            name: name.into(),
            time,
            julian_day,
            elevation_degrees,
            valid,
            position,
            deprecated_alias: false,
        }
    }

    /// Shallow copy of this event under an alias name, flagged deprecated.
    pub(crate) fn as_alias(&self, alias: &str) -> Self {
        Self {
            name: alias.to_owned(),
            time: self.time.clone(),
            julian_day: self.julian_day,
            elevation_degrees: self.elevation_degrees,
            valid: self.valid,
            position: ALIAS_POSITION,
            deprecated_alias: true,
        }
    }

    /// Gets the event name (e.g. `"sunriseStart"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the event instant.
    #[must_use]
    pub const fn time(&self) -> &DateTime<Tz> {
        &self.time
    }

    /// Gets the event instant as a fractional Julian day number.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Gets the configured elevation threshold in degrees.
    ///
    /// `None` for `solarNoon` and `nadir`, which are transit events without
    /// an elevation threshold.
    #[must_use]
    pub const fn elevation_degrees(&self) -> Option<f64> {
        self.elevation_degrees
    }

    /// Whether the elevation threshold is actually reached on this day.
    ///
    /// `false` under polar day/night conditions; the instant then defaults
    /// to the solar nadir and must be treated as non-authoritative.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Gets the ordinal position within the day's chronological ordering.
    ///
    /// [`ALIAS_POSITION`] for alias entries, which sit outside the primary
    /// ordering.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Whether this entry is a deprecated alias of a canonical event.
    #[must_use]
    pub const fn is_deprecated_alias(&self) -> bool {
        self.deprecated_alias
    }
}

/// All named solar events of one solar day at one location.
///
/// Always contains `solarNoon` and `nadir` plus one rise/set pair per
/// event-table entry; alias copies are appended when requested.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEvents<Tz: TimeZone> {
    solar_noon: SolarEvent<Tz>,
    nadir: SolarEvent<Tz>,
    events: Vec<SolarEvent<Tz>>,
}

impl<Tz: TimeZone> DayEvents<Tz> {
    pub(crate) fn new(
        solar_noon: SolarEvent<Tz>,
        nadir: SolarEvent<Tz>,
        events: Vec<SolarEvent<Tz>>,
    ) -> Self {
        Self {
            solar_noon,
            nadir,
            events,
        }
    }

    /// Gets the solar noon (transit) event.
    #[must_use]
    pub const fn solar_noon(&self) -> &SolarEvent<Tz> {
        &self.solar_noon
    }

    /// Gets the solar nadir (anti-transit) event.
    #[must_use]
    pub const fn nadir(&self) -> &SolarEvent<Tz> {
        &self.nadir
    }

    /// Looks up an event by name, including alias entries when present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SolarEvent<Tz>> {
        if self.solar_noon.name() == name {
            return Some(&self.solar_noon);
        }
        if self.nadir.name() == name {
            return Some(&self.nadir);
        }
        self.events.iter().find(|event| event.name() == name)
    }

    /// Iterates over all events: noon, nadir, then rise/set pairs in table
    /// order (and alias entries last, when requested).
    pub fn iter(&self) -> impl Iterator<Item = &SolarEvent<Tz>> {
        core::iter::once(&self.solar_noon)
            .chain(core::iter::once(&self.nadir))
            .chain(self.events.iter())
    }

    /// Canonical events sorted by ordinal position, i.e. chronologically
    /// for a table ordered by descending elevation angle. Aliases are
    /// excluded.
    #[must_use]
    pub fn chronological(&self) -> Vec<&SolarEvent<Tz>> {
        let mut ordered: Vec<&SolarEvent<Tz>> = self
            .iter()
            .filter(|event| !event.is_deprecated_alias())
            .collect();
        ordered.sort_by_key(|event| event.position());
        ordered
    }

    /// Total number of entries, including noon, nadir and aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len() + 2
    }

    /// Always `false`; noon and nadir are present in every result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Rise/set pair from the single-elevation query.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationEvents<Tz: TimeZone> {
    rise: SolarEvent<Tz>,
    set: SolarEvent<Tz>,
}

impl<Tz: TimeZone> ElevationEvents<Tz> {
    pub(crate) const fn new(rise: SolarEvent<Tz>, set: SolarEvent<Tz>) -> Self {
        Self { rise, set }
    }

    /// Gets the rising crossing of the requested elevation.
    #[must_use]
    pub const fn rise(&self) -> &SolarEvent<Tz> {
        &self.rise
    }

    /// Gets the setting crossing of the requested elevation.
    #[must_use]
    pub const fn set(&self) -> &SolarEvent<Tz> {
        &self.set
    }
}
