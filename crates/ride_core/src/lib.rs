//! In-memory ride-hailing engine driven by a sequential command stream.
//!
//! Drivers and riders register locations, riders are matched to nearby
//! available drivers, rides are started and stopped, and completed rides
//! are billed. State lives in a [bevy_ecs::world::World]: drivers, riders
//! and rides are entities, while registries, match snapshots and pricing
//! are resources. [engine::RideHailing] owns the world and applies
//! commands strictly in input order.

pub mod command;
pub mod directory;
pub mod ecs;
pub mod engine;
pub mod error;
pub mod geo;
pub mod lifecycle;
pub mod matching;
pub mod pricing;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
