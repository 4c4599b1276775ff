//! Prints today's solar events for a fixed location.
//!
//! Run with: `cargo run --example sun_times`

use chrono::Utc;
use sun_phases::SunEphemeris;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Berlin
    let latitude = 52.52;
    let longitude = 13.405;
    let now = Utc::now();

    let events = SunEphemeris::standard().day_events(now, latitude, longitude)?;

    println!("Solar events for {:.2}°N {:.2}°E on {}", latitude, longitude, now.date_naive());
    println!();
    for event in events.chronological() {
        let validity = if event.is_valid() { "" } else { "  (not reached today)" };
        println!(
            "{:<22} {}{}",
            event.name(),
            event.time().format("%H:%M:%S UTC"),
            validity
        );
    }

    let position = sun_phases::solar_position(now, latitude, longitude)?;
    println!();
    println!(
        "Sun right now: azimuth {:.1}°, altitude {:.1}°",
        position.azimuth_degrees(),
        position.altitude_degrees()
    );

    Ok(())
}
