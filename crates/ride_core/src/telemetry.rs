//! Telemetry: records completed rides for post-run analysis.
//!
//! Read-only observability; nothing here affects command output.

use bevy_ecs::prelude::Resource;

/// One completed ride, recorded the first time it is stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRideRecord {
    pub ride_id: String,
    pub rider_id: String,
    pub driver_id: String,
    /// Rounded source-to-destination distance, as billed.
    pub distance_km: f64,
    pub duration_min: f64,
}

/// Collects completed rides over a run.
#[derive(Debug, Default, Resource)]
pub struct RideTelemetry {
    pub completed_rides: Vec<CompletedRideRecord>,
}

impl RideTelemetry {
    pub fn record(&mut self, record: CompletedRideRecord) {
        self.completed_rides.push(record);
    }

    pub fn completed_count(&self) -> usize {
        self.completed_rides.len()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.completed_rides.iter().map(|r| r.distance_km).sum()
    }

    pub fn total_duration_min(&self) -> f64 {
        self.completed_rides.iter().map(|r| r.duration_min).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ride_id: &str, distance_km: f64, duration_min: f64) -> CompletedRideRecord {
        CompletedRideRecord {
            ride_id: ride_id.to_string(),
            rider_id: "R1".to_string(),
            driver_id: "D1".to_string(),
            distance_km,
            duration_min,
        }
    }

    #[test]
    fn aggregates_over_recorded_rides() {
        let mut telemetry = RideTelemetry::default();
        telemetry.record(record("RIDE-1", 2.5, 10.0));
        telemetry.record(record("RIDE-2", 4.0, 15.0));

        assert_eq!(telemetry.completed_count(), 2);
        assert_eq!(telemetry.total_distance_km(), 6.5);
        assert_eq!(telemetry.total_duration_min(), 25.0);
    }
}
