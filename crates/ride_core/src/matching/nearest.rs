use bevy_ecs::prelude::Entity;

use crate::geo::{distance_km, Point};

use super::algorithm::MatchingAlgorithm;
use super::types::MatchCandidate;

/// Nearest-first matching: every available driver within the radius,
/// ordered ascending by rounded pickup distance.
///
/// The sort is stable and candidates arrive in registration order, so
/// equidistant drivers keep the order they were registered; there is no
/// secondary sort key.
#[derive(Debug, Default)]
pub struct NearestDriverMatching;

impl MatchingAlgorithm for NearestDriverMatching {
    fn rank_candidates(
        &self,
        rider_pos: Point,
        available_drivers: &[(Entity, String, Point)],
        radius_km: f64,
        limit: Option<usize>,
    ) -> Vec<MatchCandidate> {
        let mut candidates: Vec<MatchCandidate> = available_drivers
            .iter()
            .filter_map(|(entity, id, pos)| {
                let distance = distance_km(rider_pos, *pos);
                if distance > radius_km {
                    return None;
                }
                Some(MatchCandidate {
                    driver: *entity,
                    driver_id: id.clone(),
                    distance_km: distance,
                })
            })
            .collect();

        candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        if let Some(limit) = limit {
            candidates.truncate(limit);
        }
        candidates
    }
}
