//! Closed-form solar ephemeris: position of the sun and the named
//! elevation-crossing events of a solar day.
//!
//! The formulas are the classic low-precision astronomical approximations
//! (mean anomaly, equation of center, fixed obliquity). Accuracy is on the
//! order of a minute for event times, which is ample for day-phase work;
//! no ΔT or refraction model beyond the standard horizon dip is applied.

use chrono::{DateTime, TimeZone};

use crate::error::{check_coordinates, check_elevation_angle};
use crate::events::EventTable;
use crate::time::{datetime_from_julian, days_since_j2000, noon_of_day, J2000};
use crate::types::{DayEvents, ElevationEvents, SolarEvent, SolarPosition};
use crate::Result;

/// Mean obliquity of the ecliptic, in degrees.
const EARTH_OBLIQUITY_DEGREES: f64 = 23.4397;

/// Ecliptic longitude of Earth's perihelion, in degrees.
const EARTH_PERIHELION_DEGREES: f64 = 102.9372;

/// Standard atmospheric refraction at the horizon, in degrees.
const STANDARD_REFRACTION_DEGREES: f64 = 0.833;

/// Leap-second/transit fudge term of the Julian cycle estimate, in days.
const J0: f64 = 0.0009;

fn solar_mean_anomaly(days: f64) -> f64 {
    (357.5291 + 0.985_600_28 * days).to_radians()
}

fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    // Equation of center, truncated after the third harmonic.
    let center = (1.9148 * mean_anomaly.sin()
        + 0.02 * (2.0 * mean_anomaly).sin()
        + 0.0003 * (3.0 * mean_anomaly).sin())
    .to_radians();
    mean_anomaly + center + EARTH_PERIHELION_DEGREES.to_radians() + core::f64::consts::PI
}

fn declination(ecliptic_lon: f64) -> f64 {
    let obliquity = EARTH_OBLIQUITY_DEGREES.to_radians();
    (obliquity.sin() * ecliptic_lon.sin()).asin()
}

fn right_ascension(ecliptic_lon: f64) -> f64 {
    let obliquity = EARTH_OBLIQUITY_DEGREES.to_radians();
    f64::atan2(ecliptic_lon.sin() * obliquity.cos(), ecliptic_lon.cos())
}

fn sidereal_time(days: f64, lw: f64) -> f64 {
    (280.16 + 360.985_623_5 * days).to_radians() - lw
}

fn julian_cycle(days: f64, lw: f64) -> f64 {
    (days - J0 - lw / core::f64::consts::TAU).round()
}

fn approx_transit(hour_angle: f64, lw: f64, cycle: f64) -> f64 {
    J0 + (hour_angle + lw) / core::f64::consts::TAU + cycle
}

fn solar_transit_julian(days: f64, mean_anomaly: f64, ecliptic_lon: f64) -> f64 {
    J2000 + days + 0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_lon).sin()
}

/// Hour angle at which the sun's center reaches elevation `h`.
/// `NaN` when the elevation is never reached at this latitude and season.
fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Horizon dip for an observer `height` meters above ground, in degrees.
fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}

/// Per-day quantities shared by every event of the same solar day.
struct TransitGeometry {
    lw: f64,
    phi: f64,
    cycle: f64,
    mean_anomaly: f64,
    ecliptic_lon: f64,
    declination: f64,
    j_noon: f64,
    j_nadir: f64,
}

impl TransitGeometry {
    fn at_noon(anchor_days: f64, latitude: f64, longitude: f64) -> Self {
        let lw = (-longitude).to_radians();
        let phi = latitude.to_radians();
        let cycle = julian_cycle(anchor_days, lw);
        let transit_days = approx_transit(0.0, lw, cycle);
        let mean_anomaly = solar_mean_anomaly(transit_days);
        let ecliptic_lon = ecliptic_longitude(mean_anomaly);
        let declination = declination(ecliptic_lon);
        let j_noon = solar_transit_julian(transit_days, mean_anomaly, ecliptic_lon);
        Self {
            lw,
            phi,
            cycle,
            mean_anomaly,
            ecliptic_lon,
            declination,
            j_noon,
            j_nadir: j_noon + 0.5,
        }
    }

    /// Julian day of the setting crossing of elevation `h0` (radians).
    /// `NaN` when the elevation is out of reach.
    fn set_julian(&self, h0: f64) -> f64 {
        let w = hour_angle(h0, self.phi, self.declination);
        let transit_days = approx_transit(w, self.lw, self.cycle);
        solar_transit_julian(transit_days, self.mean_anomaly, self.ecliptic_lon)
    }
}

/// Calculates topocentric solar azimuth, altitude and declination for the
/// given instant and coordinates.
///
/// Azimuth is measured from north, increasing clockwise.
///
/// # Errors
/// Returns an error when the coordinates are out of range.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use sun_phases::solar_position;
///
/// let when = "2013-03-05T10:10:57Z".parse::<DateTime<chrono::Utc>>()?;
/// let position = solar_position(when, 50.5, 30.5)?;
/// assert!(position.is_sun_up());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let lw = (-longitude).to_radians();
    let phi = latitude.to_radians();
    let days = days_since_j2000(&datetime);

    let mean_anomaly = solar_mean_anomaly(days);
    let ecliptic_lon = ecliptic_longitude(mean_anomaly);
    let dec = declination(ecliptic_lon);
    let ra = right_ascension(ecliptic_lon);
    let hour = sidereal_time(days, lw) - ra;

    let azimuth = f64::atan2(
        hour.sin(),
        hour.cos() * phi.sin() - dec.tan() * phi.cos(),
    ) + core::f64::consts::PI;
    let altitude = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour.cos()).asin();

    Ok(SolarPosition::new(azimuth, altitude, dec))
}

/// Calculates the rising and setting crossings of a single elevation angle
/// (degrees, relative to the true horizon) on the solar day containing
/// `datetime`.
///
/// The standard horizon refraction and the observer-height dip are applied
/// on top of the requested angle. When the elevation is never reached, both
/// crossings default to the solar nadir with `is_valid() == false`.
///
/// # Errors
/// Returns an error when the coordinates are out of range or the elevation
/// angle is not finite.
pub fn elevation_events<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation_degrees: f64,
    observer_height: f64,
) -> Result<ElevationEvents<Tz>> {
    check_coordinates(latitude, longitude)?;
    check_elevation_angle(elevation_degrees)?;

    let timezone = datetime.timezone();
    let anchor = noon_of_day(&datetime, false)?;
    let geometry = TransitGeometry::at_noon(days_since_j2000(&anchor), latitude, longitude);

    let h0 = (elevation_degrees - STANDARD_REFRACTION_DEGREES + observer_angle(observer_height))
        .to_radians();
    let raw_set = geometry.set_julian(h0);
    let valid = raw_set.is_finite();
    let j_set = if valid { raw_set } else { geometry.j_nadir };
    let j_rise = geometry.j_noon - (j_set - geometry.j_noon);

    let rise = SolarEvent::new(
        "rise",
        datetime_from_julian(j_rise, &timezone)?,
        j_rise,
        Some(elevation_degrees),
        valid,
        0,
    );
    let set = SolarEvent::new(
        "set",
        datetime_from_julian(j_set, &timezone)?,
        j_set,
        Some(elevation_degrees),
        valid,
        1,
    );
    Ok(ElevationEvents::new(rise, set))
}

/// Options for a day-event computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEventOptions {
    /// Observer height above ground in meters; lowers the effective horizon.
    pub observer_height: f64,
    /// Append deprecated alias entries to the result.
    pub include_aliases: bool,
    /// Anchor the solar day to the UTC calendar date instead of the date in
    /// the input's own time zone.
    pub utc_day_anchor: bool,
}

impl Default for DayEventOptions {
    fn default() -> Self {
        Self {
            observer_height: 0.0,
            include_aliases: false,
            utc_day_anchor: false,
        }
    }
}

/// Solar event engine for one frozen [`EventTable`].
///
/// Construction takes the table by value; freezing it here means every
/// [`day_events`](Self::day_events) call sees the same definitions.
#[derive(Debug, Clone)]
pub struct SunEphemeris {
    table: EventTable,
}

impl SunEphemeris {
    /// Creates an engine from an event table, freezing it.
    #[must_use]
    pub const fn new(table: EventTable) -> Self {
        Self { table }
    }

    /// Creates an engine with the standard event table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(EventTable::standard())
    }

    /// Gets the frozen event table.
    #[must_use]
    pub const fn table(&self) -> &EventTable {
        &self.table
    }

    /// Calculates all named events of the solar day containing `datetime`
    /// at the given coordinates, with default options.
    ///
    /// # Errors
    /// Returns an error when the coordinates are out of range or the day
    /// anchor cannot be resolved in the input's time zone.
    ///
    /// # Examples
    /// ```
    /// use chrono::DateTime;
    /// use sun_phases::SunEphemeris;
    ///
    /// let day = "2013-03-05T12:00:00Z".parse::<DateTime<chrono::Utc>>()?;
    /// let events = SunEphemeris::standard().day_events(day, 50.5, 30.5)?;
    /// let sunrise = events.get("sunriseStart").unwrap();
    /// assert!(sunrise.is_valid());
    /// assert!(sunrise.time() < events.solar_noon().time());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn day_events<Tz: TimeZone>(
        &self,
        datetime: DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<DayEvents<Tz>> {
        self.day_events_with_options(datetime, latitude, longitude, &DayEventOptions::default())
    }

    /// Calculates all named events of the solar day containing `datetime`,
    /// honoring [`DayEventOptions`].
    ///
    /// Threshold events that are unreachable on this day (polar day or
    /// night) are reported at the solar nadir with `is_valid() == false`,
    /// keeping the result totally ordered.
    ///
    /// # Errors
    /// Returns an error when the coordinates are out of range or the day
    /// anchor cannot be resolved in the input's time zone.
    pub fn day_events_with_options<Tz: TimeZone>(
        &self,
        datetime: DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        options: &DayEventOptions,
    ) -> Result<DayEvents<Tz>> {
        check_coordinates(latitude, longitude)?;

        let timezone = datetime.timezone();
        let anchor = noon_of_day(&datetime, options.utc_day_anchor)?;
        let geometry = TransitGeometry::at_noon(days_since_j2000(&anchor), latitude, longitude);

        let definition_count = self.table.definitions().len() as i32;
        let solar_noon = SolarEvent::new(
            "solarNoon",
            datetime_from_julian(geometry.j_noon, &timezone)?,
            geometry.j_noon,
            None,
            true,
            definition_count,
        );
        let nadir = SolarEvent::new(
            "nadir",
            datetime_from_julian(geometry.j_nadir, &timezone)?,
            geometry.j_nadir,
            None,
            true,
            2 * definition_count + 1,
        );

        let dip = observer_angle(options.observer_height);
        let mut events = Vec::with_capacity(2 * self.table.definitions().len());
        for (index, definition) in self.table.definitions().iter().enumerate() {
            let index = index as i32;
            let h0 = (definition.angle_degrees() + dip).to_radians();

            let raw_set = geometry.set_julian(h0);
            let valid = raw_set.is_finite();
            let j_set = if valid { raw_set } else { geometry.j_nadir };
            // The rise crossing mirrors the set crossing around transit.
            let j_rise = geometry.j_noon - (j_set - geometry.j_noon);

            let set_position = definition
                .set_position()
                .unwrap_or(definition_count + index + 1);
            let rise_position = definition
                .rise_position()
                .unwrap_or(definition_count - index - 1);

            events.push(SolarEvent::new(
                definition.set_name(),
                datetime_from_julian(j_set, &timezone)?,
                j_set,
                Some(definition.angle_degrees()),
                valid,
                set_position,
            ));
            events.push(SolarEvent::new(
                definition.rise_name(),
                datetime_from_julian(j_rise, &timezone)?,
                j_rise,
                Some(definition.angle_degrees()),
                valid,
                rise_position,
            ));
        }

        if options.include_aliases {
            let mut alias_events = Vec::with_capacity(self.table.aliases().len());
            for alias in self.table.aliases() {
                let source = if alias.canonical() == solar_noon.name() {
                    Some(&solar_noon)
                } else if alias.canonical() == nadir.name() {
                    Some(&nadir)
                } else {
                    events.iter().find(|event| event.name() == alias.canonical())
                };
                if let Some(source) = source {
                    alias_events.push(source.as_alias(alias.alias()));
                }
            }
            events.append(&mut alias_events);
        }

        Ok(DayEvents::new(solar_noon, nadir, events))
    }
}

impl Default for SunEphemeris {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn march_noon() -> DateTime<Utc> {
        "2013-03-05T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_position_rejects_bad_coordinates() {
        assert!(solar_position(march_noon(), 91.0, 0.0).is_err());
        assert!(solar_position(march_noon(), 0.0, 181.0).is_err());
        assert!(solar_position(march_noon(), f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_day_events_are_idempotent() {
        let ephemeris = SunEphemeris::standard();
        let first = ephemeris.day_events(march_noon(), 50.5, 30.5).unwrap();
        let second = ephemeris.day_events(march_noon(), 50.5, 30.5).unwrap();
        assert_eq!(first, second);

        // Any instant of the same anchored day yields the same events.
        let late = "2013-03-05T23:59:00Z".parse::<DateTime<Utc>>().unwrap();
        let third = ephemeris.day_events(late, 50.5, 30.5).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn test_day_events_ordering_and_symmetry() {
        let events = SunEphemeris::standard()
            .day_events(march_noon(), 50.5, 30.5)
            .unwrap();

        let chronological = events.chronological();
        assert_eq!(chronological.len(), 22);
        assert_eq!(chronological.first().unwrap().name(), "astronomicalDawn");
        assert_eq!(chronological.last().unwrap().name(), "nadir");
        for pair in chronological.windows(2) {
            assert!(pair[0].time() <= pair[1].time());
        }

        // Rise and set crossings mirror around solar noon.
        let noon = events.solar_noon().julian_day();
        let rise = events.get("sunriseStart").unwrap().julian_day();
        let set = events.get("sunsetEnd").unwrap().julian_day();
        assert!((noon - rise - (set - noon)).abs() < 1e-12);
    }

    #[test]
    fn test_aliases_only_on_request() {
        let ephemeris = SunEphemeris::standard();
        let plain = ephemeris.day_events(march_noon(), 50.5, 30.5).unwrap();
        assert!(plain.get("dawn").is_none());

        let options = DayEventOptions {
            include_aliases: true,
            ..DayEventOptions::default()
        };
        let with_aliases = ephemeris
            .day_events_with_options(march_noon(), 50.5, 30.5, &options)
            .unwrap();
        let dawn = with_aliases.get("dawn").unwrap();
        assert!(dawn.is_deprecated_alias());
        assert_eq!(dawn.time(), with_aliases.get("civilDawn").unwrap().time());
        // Aliases never enter the chronological ordering.
        assert_eq!(with_aliases.chronological().len(), 22);
    }

    #[test]
    fn test_observer_height_widens_the_day() {
        let ephemeris = SunEphemeris::standard();
        let ground = ephemeris.day_events(march_noon(), 50.5, 30.5).unwrap();
        let options = DayEventOptions {
            observer_height: 2000.0,
            ..DayEventOptions::default()
        };
        let elevated = ephemeris
            .day_events_with_options(march_noon(), 50.5, 30.5, &options)
            .unwrap();

        assert!(
            elevated.get("sunriseStart").unwrap().time()
                < ground.get("sunriseStart").unwrap().time()
        );
        assert!(elevated.get("sunsetEnd").unwrap().time() > ground.get("sunsetEnd").unwrap().time());
    }

    #[test]
    fn test_custom_positions_override_derived_ordinals() {
        let mut table = EventTable::standard();
        table
            .register_event_with_positions(-2.5, "lampOff", "lampOn", -1, 100)
            .unwrap();
        let events = SunEphemeris::new(table)
            .day_events(march_noon(), 50.5, 30.5)
            .unwrap();

        assert_eq!(events.get("lampOff").unwrap().position(), -1);
        assert_eq!(events.get("lampOn").unwrap().position(), 100);
        let chronological = events.chronological();
        assert_eq!(chronological.first().unwrap().name(), "lampOff");
        assert_eq!(chronological.last().unwrap().name(), "lampOn");
    }
}
