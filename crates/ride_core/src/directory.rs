//! Registries mapping external ids to entities, plus per-rider match
//! snapshots.
//!
//! Lookups are indexed maps rather than entity scans, so id resolution is
//! O(1). Driver registration order is kept separately: matching ranks
//! candidates with a stable sort, so equidistant drivers stay in the order
//! they were registered.

use std::collections::HashMap;

use bevy_ecs::prelude::{Entity, Resource};

use crate::matching::MatchCandidate;

/// Index from external ids to entities for the three registries.
/// Entities are never removed; rides and agents live for the whole run.
#[derive(Debug, Default, Resource)]
pub struct AgentDirectory {
    drivers: HashMap<String, Entity>,
    driver_order: Vec<Entity>,
    riders: HashMap<String, Entity>,
    rides: HashMap<String, Entity>,
}

impl AgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_driver(&mut self, id: &str, entity: Entity) {
        self.drivers.insert(id.to_string(), entity);
        self.driver_order.push(entity);
    }

    pub fn insert_rider(&mut self, id: &str, entity: Entity) {
        self.riders.insert(id.to_string(), entity);
    }

    pub fn insert_ride(&mut self, id: &str, entity: Entity) {
        self.rides.insert(id.to_string(), entity);
    }

    pub fn driver(&self, id: &str) -> Option<Entity> {
        self.drivers.get(id).copied()
    }

    pub fn rider(&self, id: &str) -> Option<Entity> {
        self.riders.get(id).copied()
    }

    pub fn ride(&self, id: &str) -> Option<Entity> {
        self.rides.get(id).copied()
    }

    /// Driver entities in the order they were registered.
    pub fn drivers_in_registration_order(&self) -> &[Entity] {
        &self.driver_order
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }
}

/// Point-in-time match snapshots, keyed by rider id.
///
/// A snapshot is overwritten by the rider's next MATCH, never merged, and
/// is not invalidated when drivers later become unavailable; START_RIDE
/// consumes it as-is.
#[derive(Debug, Default, Resource)]
pub struct MatchBook {
    sets: HashMap<String, Vec<MatchCandidate>>,
}

impl MatchBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, rider_id: &str, candidates: Vec<MatchCandidate>) {
        self.sets.insert(rider_id.to_string(), candidates);
    }

    pub fn get(&self, rider_id: &str) -> Option<&[MatchCandidate]> {
        self.sets.get(rider_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_resolves_ids_to_entities() {
        let mut directory = AgentDirectory::new();
        let d1 = Entity::from_raw(1);
        let d2 = Entity::from_raw(2);
        let r1 = Entity::from_raw(3);

        directory.insert_driver("D1", d1);
        directory.insert_driver("D2", d2);
        directory.insert_rider("R1", r1);

        assert_eq!(directory.driver("D1"), Some(d1));
        assert_eq!(directory.driver("D2"), Some(d2));
        assert_eq!(directory.rider("R1"), Some(r1));
        assert_eq!(directory.driver("D3"), None);
        assert_eq!(directory.ride("RIDE-101"), None);
        assert_eq!(directory.driver_count(), 2);
        assert_eq!(directory.drivers_in_registration_order(), &[d1, d2]);
    }

    #[test]
    fn match_book_overwrites_prior_snapshot() {
        let mut book = MatchBook::new();
        let candidate = |raw: u32, id: &str, dist: f64| MatchCandidate {
            driver: Entity::from_raw(raw),
            driver_id: id.to_string(),
            distance_km: dist,
        };

        book.store("R1", vec![candidate(1, "D1", 1.0), candidate(2, "D2", 2.0)]);
        assert_eq!(book.get("R1").map(|s| s.len()), Some(2));

        book.store("R1", vec![candidate(2, "D2", 0.5)]);
        let snapshot = book.get("R1").expect("snapshot");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].driver_id, "D2");

        assert!(book.get("R2").is_none());
    }
}
