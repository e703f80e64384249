use bevy_ecs::prelude::{Component, Entity};

use crate::geo::Point;

/// External identifier shared by drivers, riders and rides.
#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct ExternalId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position(pub Point);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Available,
    OnRide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Driver {
    pub state: DriverState,
}

impl Driver {
    pub fn available() -> Self {
        Self {
            state: DriverState::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == DriverState::Available
    }
}

/// Marker for rider entities. Riders are immutable after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Rider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideState {
    Started,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Ride {
    pub state: RideState,
    pub rider: Entity,
    pub driver: Entity,
    /// Rider's location when the ride was started.
    pub source: Point,
    /// Dropoff location; set when the ride is stopped.
    pub destination: Option<Point>,
    /// Ride time in minutes; set when the ride is stopped.
    pub duration_min: Option<f64>,
}
