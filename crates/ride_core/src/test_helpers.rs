//! Shared helpers for constructing engines with a known fleet.

use crate::engine::RideHailing;
use crate::geo::Point;

/// Drivers of the reference fleet used across test files.
pub const REFERENCE_DRIVERS: [(&str, f64, f64); 6] = [
    ("D1", 2.0, 1.0),
    ("D2", 3.0, 5.0),
    ("D4", 4.0, 4.0),
    ("D5", 5.0, 4.0),
    ("D6", 6.0, 3.0),
    ("D7", 7.0, 2.0),
];

/// An engine preloaded with the reference fleet: six drivers plus riders
/// R1 at (5, 5) and R2 at (0, 1).
pub fn engine_with_reference_fleet() -> RideHailing {
    let mut engine = RideHailing::new();
    for (id, x, y) in REFERENCE_DRIVERS {
        engine.add_driver(id, Point::new(x, y));
    }
    engine.add_rider("R1", Point::new(5.0, 5.0));
    engine.add_rider("R2", Point::new(0.0, 1.0));
    engine
}

/// Feed one raw input line to the engine, tokenizing on whitespace.
pub fn run(engine: &mut RideHailing, line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();
    engine.run_command(command, &args)
}
