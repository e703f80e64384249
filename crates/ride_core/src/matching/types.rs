use bevy_ecs::prelude::Entity;

/// One ranked driver candidate in a rider's match snapshot.
///
/// Carries both the entity (consumed by START_RIDE) and the external id
/// (reported by MATCH), plus the rounded pickup distance used for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub driver: Entity,
    pub driver_id: String,
    pub distance_km: f64,
}
