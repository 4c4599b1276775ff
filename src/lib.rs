//! Solar ephemeris and day-phase calculations for Rust.
//!
//! This crate computes topocentric solar positions, the named elevation
//! events of a solar day (sunrise, twilights, golden and blue hours, solar
//! noon and nadir) from an extensible event table, and resolves which day
//! phase an arbitrary instant falls in.
//!
//! The math is the classic closed-form low-precision solar approximation:
//! fast, dependency-light and accurate to about a minute for event times.
//!
//! # Examples
//!
//! Sunrise and sunset for Kyiv:
//!
//! ```
//! use chrono::DateTime;
//! use sun_phases::SunEphemeris;
//!
//! let day = "2013-03-05T00:00:00Z".parse::<DateTime<chrono::Utc>>()?;
//! let events = SunEphemeris::standard().day_events(day, 50.5, 30.5)?;
//!
//! let sunrise = events.get("sunriseStart").unwrap();
//! let sunset = events.get("sunsetEnd").unwrap();
//! assert!(sunrise.time() < sunset.time());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Which phase of the day is it?
//!
//! ```
//! use chrono::DateTime;
//! use sun_phases::{resolve_phase, SunEphemeris};
//!
//! let now = "2013-03-05T04:36:00Z".parse::<DateTime<chrono::Utc>>()?;
//! let phase = resolve_phase(&SunEphemeris::standard(), now, 50.5, 30.5)?;
//! assert_eq!(phase.current().name(), "sunriseStart");
//! assert_eq!(phase.upcoming().name(), "sunriseEnd");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Custom events:
//!
//! ```
//! use chrono::DateTime;
//! use sun_phases::{EventTable, SunEphemeris};
//!
//! let mut table = EventTable::standard();
//! table.register_event(-10.0, "deepDawn", "deepDusk")?;
//!
//! let day = "2013-03-05T00:00:00Z".parse::<DateTime<chrono::Utc>>()?;
//! let events = SunEphemeris::new(table).day_events(day, 50.5, 30.5)?;
//! assert!(events.get("deepDawn").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod ephemeris;
pub mod error;
pub mod events;
pub mod phase;
pub mod time;
pub mod types;

pub use ephemeris::{elevation_events, solar_position, DayEventOptions, SunEphemeris};
pub use error::{Error, Result};
pub use events::{AliasDefinition, EventDefinition, EventTable};
pub use phase::{resolve_phase, PhaseWindow, ResolvedPhase};
pub use types::{DayEvents, ElevationEvents, SolarEvent, SolarPosition, ALIAS_POSITION};
