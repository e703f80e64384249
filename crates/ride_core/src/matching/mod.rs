pub mod algorithm;
pub mod nearest;
pub mod types;

use bevy_ecs::prelude::{Entity, Resource, World};

pub use algorithm::MatchingAlgorithm;
pub use nearest::NearestDriverMatching;
pub use types::MatchCandidate;

use crate::directory::{AgentDirectory, MatchBook};
use crate::ecs::{Driver, ExternalId, Position};
use crate::error::EngineError;
use crate::geo::Point;

/// Maximum pickup distance in kilometres, inclusive. Drivers farther from
/// the rider than this are never matched.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct MatchRadius(pub f64);

impl Default for MatchRadius {
    fn default() -> Self {
        Self(5.0)
    }
}

/// Resource wrapper for the matching algorithm trait object.
#[derive(Resource)]
pub struct MatchingAlgorithmResource(pub Box<dyn MatchingAlgorithm>);

impl MatchingAlgorithmResource {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }
}

impl std::ops::Deref for MatchingAlgorithmResource {
    type Target = dyn MatchingAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn create_nearest_matching() -> MatchingAlgorithmResource {
    MatchingAlgorithmResource::new(Box::new(NearestDriverMatching))
}

/// Compute and store the match snapshot for `rider_id`, returning the
/// matched driver ids nearest-first.
///
/// An unknown rider is an [EngineError::InvalidCommand] (the recognized
/// command has no applicable branch); an empty candidate set is
/// [EngineError::NoDriversAvailable] and stores nothing.
pub fn match_rider(world: &mut World, rider_id: &str) -> Result<Vec<String>, EngineError> {
    let candidates = {
        let directory = world.resource::<AgentDirectory>();
        let rider = directory.rider(rider_id).ok_or(EngineError::InvalidCommand)?;
        let rider_pos = world
            .get::<Position>(rider)
            .ok_or(EngineError::InvalidCommand)?
            .0;

        let available: Vec<(Entity, String, Point)> = directory
            .drivers_in_registration_order()
            .iter()
            .filter_map(|&entity| {
                let driver = world.get::<Driver>(entity)?;
                if !driver.is_available() {
                    return None;
                }
                let id = world.get::<ExternalId>(entity)?;
                let position = world.get::<Position>(entity)?;
                Some((entity, id.0.clone(), position.0))
            })
            .collect();

        let radius = world.resource::<MatchRadius>().0;
        let algorithm = world.resource::<MatchingAlgorithmResource>();
        algorithm.rank_candidates(rider_pos, &available, radius, None)
    };

    if candidates.is_empty() {
        return Err(EngineError::NoDriversAvailable);
    }

    let ids = candidates.iter().map(|c| c.driver_id.clone()).collect();
    world.resource_mut::<MatchBook>().store(rider_id, candidates);
    Ok(ids)
}
