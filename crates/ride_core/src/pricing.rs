//! Fare computation for completed rides.

use bevy_ecs::prelude::{Resource, World};
use serde::{Deserialize, Serialize};

use crate::directory::AgentDirectory;
use crate::ecs::{ExternalId, Ride, RideState};
use crate::error::EngineError;
use crate::geo::{distance_km, round2};

/// Fare components applied to every completed ride. Values are fixed for
/// a run and supplied at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Flat charge applied to every ride.
    pub base_fare: f64,
    /// Charge per kilometre between ride source and destination.
    pub per_km_rate: f64,
    /// Charge per minute of ride time.
    pub per_minute_rate: f64,
    /// Proportional surcharge applied to the summed fare (0.2 = 20 %).
    pub service_tax: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: 50.0,
            per_km_rate: 6.5,
            per_minute_rate: 2.0,
            service_tax: 0.2,
        }
    }
}

/// Total fare: `(base + distance * per_km + minutes * per_minute) *
/// (1 + tax)`, rounded to two decimal places.
pub fn calculate_ride_fare(config: &PricingConfig, distance_km: f64, duration_min: f64) -> f64 {
    let fare = config.base_fare
        + distance_km * config.per_km_rate
        + duration_min * config.per_minute_rate;
    round2(fare * (1.0 + config.service_tax))
}

/// A rendered bill for a completed ride.
#[derive(Debug, Clone, PartialEq)]
pub struct BillSummary {
    pub ride_id: String,
    pub driver_id: String,
    pub total_fare: f64,
}

/// Compute the bill for `ride_id`.
///
/// Fails with [EngineError::InvalidRide] when the ride is unknown and
/// [EngineError::RideNotCompleted] while it is still in progress.
pub fn generate_bill(world: &World, ride_id: &str) -> Result<BillSummary, EngineError> {
    let ride_entity = world
        .resource::<AgentDirectory>()
        .ride(ride_id)
        .ok_or(EngineError::InvalidRide)?;
    let ride = world
        .get::<Ride>(ride_entity)
        .ok_or(EngineError::InvalidRide)?;

    if ride.state != RideState::Completed {
        return Err(EngineError::RideNotCompleted);
    }
    let destination = ride.destination.ok_or(EngineError::RideNotCompleted)?;
    let duration_min = ride.duration_min.ok_or(EngineError::RideNotCompleted)?;

    let driver_id = world
        .get::<ExternalId>(ride.driver)
        .ok_or(EngineError::InvalidRide)?
        .0
        .clone();
    let pricing = world.resource::<PricingConfig>();
    let total_fare = calculate_ride_fare(pricing, distance_km(ride.source, destination), duration_min);

    Ok(BillSummary {
        ride_id: ride_id.to_string(),
        driver_id,
        total_fare,
    })
}
