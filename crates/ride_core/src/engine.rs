//! The command engine: owns the world and applies commands in input order.

use bevy_ecs::prelude::World;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::directory::{AgentDirectory, MatchBook};
use crate::ecs::{Driver, ExternalId, Position, Ride, RideState, Rider};
use crate::error::EngineError;
use crate::geo::Point;
use crate::lifecycle;
use crate::matching::{self, create_nearest_matching, MatchRadius};
use crate::pricing::{self, PricingConfig};
use crate::telemetry::RideTelemetry;

/// Run parameters for one engine instance, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pricing: PricingConfig,
    pub match_radius_km: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            match_radius_km: MatchRadius::default().0,
        }
    }
}

/// The ride-hailing engine. One instance holds exclusive mutable access
/// to all registries; commands run to completion strictly in input order,
/// so the effect of command N is fully visible to command N+1.
pub struct RideHailing {
    world: World,
}

impl Default for RideHailing {
    fn default() -> Self {
        Self::new()
    }
}

impl RideHailing {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(AgentDirectory::new());
        world.insert_resource(MatchBook::new());
        world.insert_resource(RideTelemetry::default());
        world.insert_resource(config.pricing);
        world.insert_resource(MatchRadius(config.match_radius_km));
        world.insert_resource(create_nearest_matching());
        Self { world }
    }

    /// Entry point for the I/O layer: a `(command, args)` pair in, at most
    /// one output line back. Registration commands return `None`.
    pub fn run_command(&mut self, command: &str, args: &[&str]) -> Option<String> {
        match Command::from_parts(command, args) {
            Ok(command) => self.execute(command),
            Err(_) => Some(EngineError::InvalidCommand.to_string()),
        }
    }

    /// Apply one validated command.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::AddDriver { id, location } => {
                self.add_driver(&id, location);
                None
            }
            Command::AddRider { id, location } => {
                self.add_rider(&id, location);
                None
            }
            Command::Match { rider_id } => {
                Some(match matching::match_rider(&mut self.world, &rider_id) {
                    Ok(driver_ids) => format!("DRIVERS_MATCHED {}", driver_ids.join(" ")),
                    Err(err) => err.to_string(),
                })
            }
            Command::StartRide {
                ride_id,
                match_index,
                rider_id,
            } => Some(
                match lifecycle::start_ride(&mut self.world, &ride_id, match_index, &rider_id) {
                    Ok(()) => format!("RIDE_STARTED {ride_id}"),
                    Err(err) => err.to_string(),
                },
            ),
            Command::StopRide {
                ride_id,
                destination,
                duration_min,
            } => Some(
                match lifecycle::stop_ride(&mut self.world, &ride_id, destination, duration_min) {
                    Ok(()) => format!("RIDE_STOPPED {ride_id}"),
                    Err(err) => err.to_string(),
                },
            ),
            Command::Bill { ride_id } => Some(match pricing::generate_bill(&self.world, &ride_id) {
                Ok(bill) => format!("BILL {} {} {:.2}", bill.ride_id, bill.driver_id, bill.total_fare),
                Err(err) => err.to_string(),
            }),
        }
    }

    /// Register a driver, initially available. Re-registering an existing
    /// id updates the location in place; availability stays with the ride
    /// lifecycle.
    pub fn add_driver(&mut self, id: &str, location: Point) {
        if let Some(existing) = self.world.resource::<AgentDirectory>().driver(id) {
            if let Some(mut position) = self.world.get_mut::<Position>(existing) {
                position.0 = location;
            }
            return;
        }
        let entity = self
            .world
            .spawn((
                ExternalId(id.to_string()),
                Position(location),
                Driver::available(),
            ))
            .id();
        self.world
            .resource_mut::<AgentDirectory>()
            .insert_driver(id, entity);
    }

    /// Register a rider. Re-registering an existing id updates the
    /// location in place.
    pub fn add_rider(&mut self, id: &str, location: Point) {
        if let Some(existing) = self.world.resource::<AgentDirectory>().rider(id) {
            if let Some(mut position) = self.world.get_mut::<Position>(existing) {
                position.0 = location;
            }
            return;
        }
        let entity = self
            .world
            .spawn((ExternalId(id.to_string()), Position(location), Rider))
            .id();
        self.world
            .resource_mut::<AgentDirectory>()
            .insert_rider(id, entity);
    }

    pub fn driver_is_available(&self, id: &str) -> Option<bool> {
        let entity = self.world.resource::<AgentDirectory>().driver(id)?;
        self.world.get::<Driver>(entity).map(Driver::is_available)
    }

    pub fn ride_state(&self, ride_id: &str) -> Option<RideState> {
        let entity = self.world.resource::<AgentDirectory>().ride(ride_id)?;
        self.world.get::<Ride>(entity).map(|ride| ride.state)
    }

    pub fn telemetry(&self) -> &RideTelemetry {
        self.world.resource::<RideTelemetry>()
    }

    pub fn directory(&self) -> &AgentDirectory {
        self.world.resource::<AgentDirectory>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registrations_produce_no_output() {
        let mut engine = RideHailing::new();
        assert_eq!(engine.run_command("ADD_DRIVER", &["D1", "0", "1"]), None);
        assert_eq!(engine.run_command("ADD_RIDER", &["R1", "0", "1"]), None);
        assert_eq!(engine.directory().driver_count(), 1);
        assert_eq!(engine.directory().rider_count(), 1);
        assert_eq!(engine.driver_is_available("D1"), Some(true));
    }

    #[test]
    fn unknown_command_reports_invalid_command() {
        let mut engine = RideHailing::new();
        assert_eq!(
            engine.run_command("SOME_RANDOM_COMMAND", &[]),
            Some("INVALID_COMMAND".to_string())
        );
    }

    #[test]
    fn malformed_arguments_degrade_to_invalid_command() {
        let mut engine = RideHailing::new();
        assert_eq!(
            engine.run_command("ADD_DRIVER", &["D1", "not-a-number", "1"]),
            Some("INVALID_COMMAND".to_string())
        );
        assert_eq!(
            engine.run_command("MATCH", &[]),
            Some("INVALID_COMMAND".to_string())
        );
        // The failed registration left no state behind.
        assert_eq!(engine.directory().driver_count(), 0);
    }

    #[test]
    fn re_registering_a_driver_updates_location_only() {
        let mut engine = RideHailing::new();
        engine.add_driver("D1", Point::new(0.0, 1.0));
        engine.add_rider("R1", Point::new(0.0, 0.0));
        engine.run_command("MATCH", &["R1"]);
        engine.run_command("START_RIDE", &["RIDE-1", "1", "R1"]);
        assert_eq!(engine.driver_is_available("D1"), Some(false));

        engine.add_driver("D1", Point::new(3.0, 3.0));
        assert_eq!(engine.directory().driver_count(), 1);
        // Still on the ride; re-registration does not free the driver.
        assert_eq!(engine.driver_is_available("D1"), Some(false));
    }
}
