//! Custom event and alias registration observed through full day
//! computations.

use chrono::{DateTime, Utc};
use sun_phases::{DayEventOptions, EventTable, SunEphemeris, ALIAS_POSITION};

fn march_day() -> DateTime<Utc> {
    "2013-03-05T00:00:00Z".parse().unwrap()
}

#[test]
fn registered_event_appears_in_day_output() {
    let mut table = EventTable::standard();
    table.register_event(-2.5, "lampOff", "lampOn").unwrap();

    let events = SunEphemeris::new(table)
        .day_events(march_day(), 50.5, 30.5)
        .unwrap();

    let lamp_off = events.get("lampOff").unwrap();
    let lamp_on = events.get("lampOn").unwrap();
    assert!(lamp_off.is_valid() && lamp_on.is_valid());
    assert_eq!(lamp_off.elevation_degrees(), Some(-2.5));

    // -2.5° sits between civil dawn (-6°) and the golden hour start (-1°).
    assert!(lamp_off.time() > events.get("civilDawn").unwrap().time());
    assert!(lamp_off.time() < events.get("goldenHourDawnStart").unwrap().time());
    assert!(lamp_on.time() > events.get("goldenHourDuskEnd").unwrap().time());
    assert!(lamp_on.time() < events.get("civilDusk").unwrap().time());
}

#[test]
fn radian_registration_matches_degree_registration() {
    let mut degrees = EventTable::standard();
    degrees.register_event(-2.5, "lampOff", "lampOn").unwrap();
    let mut radians = EventTable::standard();
    radians
        .register_event_radians((-2.5_f64).to_radians(), "lampOff", "lampOn")
        .unwrap();

    let from_degrees = SunEphemeris::new(degrees)
        .day_events(march_day(), 50.5, 30.5)
        .unwrap();
    let from_radians = SunEphemeris::new(radians)
        .day_events(march_day(), 50.5, 30.5)
        .unwrap();

    let a = from_degrees.get("lampOff").unwrap();
    let b = from_radians.get("lampOff").unwrap();
    assert!((a.julian_day() - b.julian_day()).abs() < 1e-9);
}

#[test]
fn aliases_carry_marker_position() {
    let options = DayEventOptions {
        include_aliases: true,
        ..DayEventOptions::default()
    };
    let events = SunEphemeris::standard()
        .day_events_with_options(march_day(), 50.5, 30.5, &options)
        .unwrap();

    for alias_name in ["dawn", "dusk", "sunrise", "sunset", "night", "nightEnd"] {
        let alias = events
            .get(alias_name)
            .unwrap_or_else(|| panic!("missing alias {alias_name}"));
        assert!(alias.is_deprecated_alias());
        assert_eq!(alias.position(), ALIAS_POSITION);
    }

    assert_eq!(
        events.get("sunrise").unwrap().time(),
        events.get("sunriseStart").unwrap().time()
    );
    assert_eq!(
        events.get("night").unwrap().time(),
        events.get("astronomicalDusk").unwrap().time()
    );
}

#[test]
fn canonical_registration_shadows_alias() {
    let mut table = EventTable::standard();
    table.register_event(3.0, "goldenHour", "silverHour").unwrap();

    let options = DayEventOptions {
        include_aliases: true,
        ..DayEventOptions::default()
    };
    let events = SunEphemeris::new(table)
        .day_events_with_options(march_day(), 50.5, 30.5, &options)
        .unwrap();

    // "goldenHour" now names the canonical +3° rise event, not the alias.
    let golden = events.get("goldenHour").unwrap();
    assert!(!golden.is_deprecated_alias());
    assert_eq!(golden.elevation_degrees(), Some(3.0));
}

#[test]
fn alias_of_transit_events() {
    let mut table = EventTable::standard();
    table.register_alias("highNoon", "solarNoon").unwrap();
    table.register_alias("midnight", "nadir").unwrap();

    let options = DayEventOptions {
        include_aliases: true,
        ..DayEventOptions::default()
    };
    let events = SunEphemeris::new(table)
        .day_events_with_options(march_day(), 50.5, 30.5, &options)
        .unwrap();

    assert_eq!(
        events.get("highNoon").unwrap().time(),
        events.solar_noon().time()
    );
    assert_eq!(events.get("midnight").unwrap().time(), events.nadir().time());
}

#[test]
fn empty_table_still_has_transits() {
    let events = SunEphemeris::new(EventTable::empty())
        .day_events(march_day(), 50.5, 30.5)
        .unwrap();

    assert_eq!(events.len(), 2);
    let names: Vec<&str> = events.chronological().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["solarNoon", "nadir"]);
}
