//! Seed a random fleet, run the full command flow for every rider, and
//! print the bills plus a telemetry summary.
//!
//! Run with: cargo run -p ride_core --example fleet_run

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ride_core::engine::RideHailing;
use ride_core::geo::Point;

fn main() {
    const NUM_DRIVERS: usize = 40;
    const NUM_RIDERS: usize = 10;
    const SEED: u64 = 123;

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut engine = RideHailing::new();

    for i in 1..=NUM_DRIVERS {
        let location = Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
        engine.add_driver(&format!("D{i}"), location);
    }
    for i in 1..=NUM_RIDERS {
        let location = Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
        engine.add_rider(&format!("R{i}"), location);
    }

    println!(
        "--- Fleet run ({NUM_DRIVERS} drivers, {NUM_RIDERS} riders, seed {SEED}) ---"
    );

    for i in 1..=NUM_RIDERS {
        let rider_id = format!("R{i}");
        let ride_id = format!("RIDE-{i:03}");

        let Some(matched) = engine.run_command("MATCH", &[&rider_id]) else {
            continue;
        };
        println!("{matched}");
        if matched == "NO_DRIVERS_AVAILABLE" {
            continue;
        }

        // Take the nearest driver, drive for a random leg, bill it.
        let dest_x = format!("{:.2}", rng.gen_range(0.0..10.0));
        let dest_y = format!("{:.2}", rng.gen_range(0.0..10.0));
        let minutes = format!("{}", rng.gen_range(5..45));

        for output in [
            engine.run_command("START_RIDE", &[&ride_id, "1", &rider_id]),
            engine.run_command("STOP_RIDE", &[&ride_id, &dest_x, &dest_y, &minutes]),
            engine.run_command("BILL", &[&ride_id]),
        ]
        .into_iter()
        .flatten()
        {
            println!("{output}");
        }
    }

    let telemetry = engine.telemetry();
    println!("\nCompleted rides: {}", telemetry.completed_count());
    println!("Total distance: {:.2} km", telemetry.total_distance_km());
    println!("Total ride time: {:.0} min", telemetry.total_duration_min());
}
