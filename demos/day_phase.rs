//! Answers "which part of the day is it right now?" for a fixed location.
//!
//! Run with: `cargo run --example day_phase`

use chrono::Utc;
use sun_phases::{resolve_phase, SunEphemeris};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Berlin
    let latitude = 52.52;
    let longitude = 13.405;
    let now = Utc::now();

    let phase = resolve_phase(&SunEphemeris::standard(), now, latitude, longitude)?;

    println!(
        "Current phase: {} (since {})",
        phase.current().name(),
        phase.current().time().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Next event:    {} (at    {})",
        phase.upcoming().name(),
        phase.upcoming().time().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let remaining = *phase.upcoming().time() - now;
    println!("Time until next event: {} min", remaining.num_minutes());

    Ok(())
}
