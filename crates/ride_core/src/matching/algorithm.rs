use bevy_ecs::prelude::Entity;

use crate::geo::Point;

use super::types::MatchCandidate;

/// Trait for matching algorithms that rank available drivers for a rider.
///
/// Implementations receive every currently available driver and decide
/// which of them are candidates and in what order. The returned list is
/// stored verbatim as the rider's match snapshot.
pub trait MatchingAlgorithm: Send + Sync {
    /// Rank candidates for a rider at `rider_pos`.
    ///
    /// # Arguments
    ///
    /// * `rider_pos` - pickup location of the rider
    /// * `available_drivers` - `(entity, external id, position)` for every
    ///   driver currently flagged available, in registration order
    /// * `radius_km` - maximum pickup distance; drivers farther than this
    ///   (after rounding) are not candidates
    /// * `limit` - optional top-K truncation of the ranked list. No caller
    ///   in the command layer passes `Some` today; the parameter is kept
    ///   for algorithm-level configurability.
    fn rank_candidates(
        &self,
        rider_pos: Point,
        available_drivers: &[(Entity, String, Point)],
        radius_km: f64,
        limit: Option<usize>,
    ) -> Vec<MatchCandidate>;
}
