//! Ride lifecycle: Started → Completed, and the driver availability flag
//! that tracks it.

use bevy_ecs::prelude::World;

use crate::directory::{AgentDirectory, MatchBook};
use crate::ecs::{Driver, DriverState, ExternalId, Position, Ride, RideState};
use crate::error::EngineError;
use crate::geo::{distance_km, Point};
use crate::telemetry::{CompletedRideRecord, RideTelemetry};

/// Create a ride for `rider_id` using the driver at 1-based `match_index`
/// in the rider's stored match snapshot, and mark that driver unavailable.
///
/// Fails with [EngineError::InvalidRide] when the rider has no snapshot,
/// the index is out of bounds, the ride id already exists, or the rider is
/// unknown. The snapshot is consumed as-is: availability was checked at
/// match time, not here.
pub fn start_ride(
    world: &mut World,
    ride_id: &str,
    match_index: usize,
    rider_id: &str,
) -> Result<(), EngineError> {
    let (rider_entity, driver_entity, source) = {
        let directory = world.resource::<AgentDirectory>();
        if directory.ride(ride_id).is_some() {
            return Err(EngineError::InvalidRide);
        }
        let rider_entity = directory.rider(rider_id).ok_or(EngineError::InvalidRide)?;

        let book = world.resource::<MatchBook>();
        let snapshot = book.get(rider_id).ok_or(EngineError::InvalidRide)?;
        if match_index == 0 || match_index > snapshot.len() {
            return Err(EngineError::InvalidRide);
        }
        let candidate = &snapshot[match_index - 1];

        let source = world
            .get::<Position>(rider_entity)
            .ok_or(EngineError::InvalidRide)?
            .0;
        (rider_entity, candidate.driver, source)
    };

    let ride_entity = world
        .spawn((
            ExternalId(ride_id.to_string()),
            Ride {
                state: RideState::Started,
                rider: rider_entity,
                driver: driver_entity,
                source,
                destination: None,
                duration_min: None,
            },
        ))
        .id();
    world
        .resource_mut::<AgentDirectory>()
        .insert_ride(ride_id, ride_entity);

    if let Some(mut driver) = world.get_mut::<Driver>(driver_entity) {
        driver.state = DriverState::OnRide;
    }
    Ok(())
}

/// Complete a ride: record destination and time taken, and mark the
/// ride's driver available again.
///
/// Fails with [EngineError::InvalidRide] when the id is empty or unknown.
/// Stopping an already-completed ride re-applies the same updates; the
/// telemetry record is written only on the first completion.
pub fn stop_ride(
    world: &mut World,
    ride_id: &str,
    destination: Point,
    duration_min: f64,
) -> Result<(), EngineError> {
    if ride_id.is_empty() {
        return Err(EngineError::InvalidRide);
    }
    let ride_entity = world
        .resource::<AgentDirectory>()
        .ride(ride_id)
        .ok_or(EngineError::InvalidRide)?;

    let (rider_entity, driver_entity, source, first_completion) = {
        let mut ride = world
            .get_mut::<Ride>(ride_entity)
            .ok_or(EngineError::InvalidRide)?;
        let first_completion = ride.state == RideState::Started;
        ride.state = RideState::Completed;
        ride.destination = Some(destination);
        ride.duration_min = Some(duration_min);
        (ride.rider, ride.driver, ride.source, first_completion)
    };

    if let Some(mut driver) = world.get_mut::<Driver>(driver_entity) {
        driver.state = DriverState::Available;
    }

    if first_completion {
        let rider_id = world
            .get::<ExternalId>(rider_entity)
            .map(|id| id.0.clone())
            .unwrap_or_default();
        let driver_id = world
            .get::<ExternalId>(driver_entity)
            .map(|id| id.0.clone())
            .unwrap_or_default();
        let record = CompletedRideRecord {
            ride_id: ride_id.to_string(),
            rider_id,
            driver_id,
            distance_km: distance_km(source, destination),
            duration_min,
        };
        world.resource_mut::<RideTelemetry>().record(record);
    }
    Ok(())
}
