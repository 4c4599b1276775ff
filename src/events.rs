//! The extensible table of named solar-elevation events and their aliases.
//!
//! The table is plain owned configuration: build it up with the
//! registration methods, then hand it to
//! [`SunEphemeris::new`](crate::ephemeris::SunEphemeris::new). Passing it
//! by value is the freeze step; the engine never mutates it afterwards.

use crate::{Error, Result};

/// Names of the two fixed transit events present in every day computation.
/// They count as canonical for uniqueness checks and as alias targets.
const RESERVED_NAMES: [&str; 2] = ["solarNoon", "nadir"];

/// Default event table: elevation thresholds in degrees, from highest to
/// lowest, with the rise (morning) and set (evening) names of each pair.
const DEFAULT_EVENTS: [(f64, &str, &str); 10] = [
    (6.0, "goldenHourDawnEnd", "goldenHourDuskStart"),
    (-0.3, "sunriseEnd", "sunsetStart"),
    (-0.833, "sunriseStart", "sunsetEnd"),
    (-1.0, "goldenHourDawnStart", "goldenHourDuskEnd"),
    (-4.0, "blueHourDawnEnd", "blueHourDuskStart"),
    (-6.0, "civilDawn", "civilDusk"),
    (-8.0, "blueHourDawnStart", "blueHourDuskEnd"),
    (-12.0, "nauticalDawn", "nauticalDusk"),
    (-15.0, "amateurDawn", "amateurDusk"),
    (-18.0, "astronomicalDawn", "astronomicalDusk"),
];

/// Default aliases: legacy names mapped onto the canonical table.
const DEFAULT_ALIASES: [(&str, &str); 10] = [
    ("dawn", "civilDawn"),
    ("dusk", "civilDusk"),
    ("nightEnd", "astronomicalDawn"),
    ("night", "astronomicalDusk"),
    ("nightStart", "astronomicalDusk"),
    ("goldenHour", "goldenHourDuskStart"),
    ("sunrise", "sunriseStart"),
    ("sunset", "sunsetEnd"),
    ("goldenHourEnd", "goldenHourDawnEnd"),
    ("goldenHourStart", "goldenHourDuskStart"),
];

/// One elevation threshold with its rise and set event names.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDefinition {
    angle_degrees: f64,
    rise_name: String,
    set_name: String,
    rise_position: Option<i32>,
    set_position: Option<i32>,
}

impl EventDefinition {
    /// Gets the elevation threshold in degrees.
    #[must_use]
    pub const fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Gets the name of the rising (morning) crossing.
    #[must_use]
    pub fn rise_name(&self) -> &str {
        &self.rise_name
    }

    /// Gets the name of the setting (evening) crossing.
    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// Custom ordinal for the rise event, overriding the table-derived one.
    #[must_use]
    pub const fn rise_position(&self) -> Option<i32> {
        self.rise_position
    }

    /// Custom ordinal for the set event, overriding the table-derived one.
    #[must_use]
    pub const fn set_position(&self) -> Option<i32> {
        self.set_position
    }
}

/// A legacy or alternate name for a canonical event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDefinition {
    alias: String,
    canonical: String,
}

impl AliasDefinition {
    /// Gets the alias name.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Gets the canonical event name the alias resolves to.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Ordered table of event definitions plus the alias table.
///
/// A failed registration returns [`Error::RegistrationRejected`] and leaves
/// the table untouched; callers are expected to attempt registrations
/// speculatively.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTable {
    definitions: Vec<EventDefinition>,
    aliases: Vec<AliasDefinition>,
}

impl EventTable {
    /// Creates the standard table: ten twilight/golden/blue-hour pairs and
    /// the backward-compatible alias set.
    #[must_use]
    pub fn standard() -> Self {
        let definitions = DEFAULT_EVENTS
            .iter()
            .map(|&(angle_degrees, rise, set)| EventDefinition {
                angle_degrees,
                rise_name: rise.to_owned(),
                set_name: set.to_owned(),
                rise_position: None,
                set_position: None,
            })
            .collect();
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|&(alias, canonical)| AliasDefinition {
                alias: alias.to_owned(),
                canonical: canonical.to_owned(),
            })
            .collect();
        Self {
            definitions,
            aliases,
        }
    }

    /// Creates an empty table. Day computations against it still produce
    /// `solarNoon` and `nadir`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            definitions: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Gets the event definitions in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[EventDefinition] {
        &self.definitions
    }

    /// Gets the alias definitions in registration order.
    #[must_use]
    pub fn aliases(&self) -> &[AliasDefinition] {
        &self.aliases
    }

    /// Checks whether `name` is a canonical event name, including the
    /// reserved `solarNoon` and `nadir`.
    #[must_use]
    pub fn contains_canonical(&self, name: &str) -> bool {
        RESERVED_NAMES.contains(&name)
            || self
                .definitions
                .iter()
                .any(|def| def.rise_name == name || def.set_name == name)
    }

    /// Registers a new rise/set pair for an elevation angle in degrees.
    ///
    /// Both names must match the identifier pattern (ASCII letters, digits,
    /// `$`, `_`; not starting with a digit) and must not collide with any
    /// existing canonical name. Alias entries shadowed by the new canonical
    /// names are removed silently.
    ///
    /// # Errors
    /// Returns `RegistrationRejected` on a malformed or duplicate name or a
    /// non-finite angle; the table is left unchanged.
    pub fn register_event(
        &mut self,
        angle_degrees: f64,
        rise_name: &str,
        set_name: &str,
    ) -> Result<()> {
        self.insert_event(angle_degrees, rise_name, set_name, None, None)
    }

    /// Registers a new rise/set pair with the elevation angle in radians.
    ///
    /// # Errors
    /// Same conditions as [`register_event`](Self::register_event).
    pub fn register_event_radians(
        &mut self,
        angle_radians: f64,
        rise_name: &str,
        set_name: &str,
    ) -> Result<()> {
        self.insert_event(angle_radians.to_degrees(), rise_name, set_name, None, None)
    }

    /// Registers a new rise/set pair with explicit ordinal positions that
    /// override the table-derived ones in day computations.
    ///
    /// # Errors
    /// Same conditions as [`register_event`](Self::register_event).
    pub fn register_event_with_positions(
        &mut self,
        angle_degrees: f64,
        rise_name: &str,
        set_name: &str,
        rise_position: i32,
        set_position: i32,
    ) -> Result<()> {
        self.insert_event(
            angle_degrees,
            rise_name,
            set_name,
            Some(rise_position),
            Some(set_position),
        )
    }

    fn insert_event(
        &mut self,
        angle_degrees: f64,
        rise_name: &str,
        set_name: &str,
        rise_position: Option<i32>,
        set_position: Option<i32>,
    ) -> Result<()> {
        if !angle_degrees.is_finite() {
            return Err(Error::registration_rejected(
                "elevation angle must be finite",
            ));
        }
        if !is_well_formed_name(rise_name) || !is_well_formed_name(set_name) {
            return Err(Error::registration_rejected(
                "event names must be non-empty identifiers not starting with a digit",
            ));
        }
        if rise_name == set_name {
            return Err(Error::registration_rejected(
                "rise and set names must differ",
            ));
        }
        if self.contains_canonical(rise_name) || self.contains_canonical(set_name) {
            return Err(Error::registration_rejected(
                "event name collides with an existing canonical name",
            ));
        }

        self.definitions.push(EventDefinition {
            angle_degrees,
            rise_name: rise_name.to_owned(),
            set_name: set_name.to_owned(),
            rise_position,
            set_position,
        });
        // Canonical registration wins over a stale alias of the same name.
        self.aliases
            .retain(|alias| alias.alias != rise_name && alias.alias != set_name);
        Ok(())
    }

    /// Registers an alias for an existing canonical event name.
    ///
    /// The alias must be a well-formed identifier, must not be a canonical
    /// name or an already-registered alias, and the canonical name must
    /// exist at registration time (no forward references).
    ///
    /// # Errors
    /// Returns `RegistrationRejected` on any violation; the table is left
    /// unchanged.
    pub fn register_alias(&mut self, alias: &str, canonical: &str) -> Result<()> {
        if !is_well_formed_name(alias) {
            return Err(Error::registration_rejected(
                "alias must be a non-empty identifier not starting with a digit",
            ));
        }
        if self.contains_canonical(alias) {
            return Err(Error::registration_rejected(
                "alias collides with a canonical event name",
            ));
        }
        if self.aliases.iter().any(|entry| entry.alias == alias) {
            return Err(Error::registration_rejected("alias is already registered"));
        }
        if !self.contains_canonical(canonical) {
            return Err(Error::registration_rejected(
                "alias target is not a canonical event name",
            ));
        }

        self.aliases.push(AliasDefinition {
            alias: alias.to_owned(),
            canonical: canonical.to_owned(),
        });
        Ok(())
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Identifier pattern: ASCII letters/digits/`$`/`_`, not starting with a digit.
fn is_well_formed_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    let is_valid_char = |c: char| c.is_ascii_alphanumeric() || c == '$' || c == '_';
    is_valid_char(first) && chars.all(is_valid_char)
}
