use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::distance_miles;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One position report from the location source.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            timestamp,
        }
    }
}

/// A finished run. Sessions only exist once they are ended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunningSession {
    pub id: Uuid,
    /// 1-based position in the session log.
    pub day: u32,
    /// Elapsed seconds.
    pub time: u64,
    /// Miles.
    pub distance: f64,
    pub route: Vec<Coordinate>,
    pub completed: bool,
}

impl RunningSession {
    pub fn new(day: u32, snapshot: SessionSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            time: snapshot.elapsed_seconds,
            distance: snapshot.distance_miles,
            route: snapshot.route,
            completed: true,
        }
    }

    /// `HH:MM:SS`
    pub fn formatted_time(&self) -> String {
        format_elapsed(self.time)
    }
}

pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds / 60 % 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub elapsed_seconds: u64,
    pub distance_miles: f64,
    pub route: Vec<Coordinate>,
}

/// In-progress run state: distance, route and elapsed time.
///
/// Fixes may arrive at any cadence. The first fix of a session only anchors
/// the next delta; every fix lands in the route.
#[derive(Debug, Clone, Default)]
pub struct RunAccumulator {
    active: bool,
    last_fix: Option<LocationFix>,
    distance_miles: f64,
    route: Vec<Coordinate>,
    elapsed_seconds: u64,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.clear();
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the distance added by this fix, in miles.
    pub fn record_fix(&mut self, fix: LocationFix) -> f64 {
        if !self.active {
            return 0.0;
        }

        let delta = self
            .last_fix
            .map(|last| distance_miles(&last.coordinate, &fix.coordinate))
            .unwrap_or(0.0);
        self.distance_miles += delta;
        self.route.push(fix.coordinate);
        self.last_fix = Some(fix);
        delta
    }

    pub fn tick(&mut self) {
        if self.active {
            self.elapsed_seconds += 1;
        }
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn route(&self) -> &[Coordinate] {
        &self.route
    }

    /// Stops the session and hands back what was collected.
    pub fn finish(&mut self) -> SessionSnapshot {
        let snapshot = SessionSnapshot {
            elapsed_seconds: self.elapsed_seconds,
            distance_miles: self.distance_miles,
            route: std::mem::take(&mut self.route),
        };
        self.clear();
        snapshot
    }

    fn clear(&mut self) {
        self.active = false;
        self.last_fix = None;
        self.distance_miles = 0.0;
        self.route.clear();
        self.elapsed_seconds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fixes() -> Vec<LocationFix> {
        let t0 = Utc::now();
        vec![
            LocationFix::new(0.0, 0.0, t0),
            LocationFix::new(0.0, 0.001, t0 + Duration::seconds(3)),
            LocationFix::new(0.0, 0.002, t0 + Duration::seconds(4)),
        ]
    }

    #[test]
    fn test_first_fix_anchors_without_distance() {
        let mut run = RunAccumulator::new();
        run.start();
        let fixes = fixes();
        assert_eq!(run.record_fix(fixes[0]), 0.0);
        assert_eq!(run.route().len(), 1);

        let delta = run.record_fix(fixes[1]);
        assert!(delta > 0.0);
        assert_eq!(run.distance_miles(), delta);
    }

    #[test]
    fn test_distance_is_sum_of_consecutive_deltas() {
        let mut run = RunAccumulator::new();
        run.start();
        let fixes = fixes();
        for fix in &fixes {
            run.record_fix(*fix);
        }
        let expected = distance_miles(&fixes[0].coordinate, &fixes[1].coordinate)
            + distance_miles(&fixes[1].coordinate, &fixes[2].coordinate);
        assert!((run.distance_miles() - expected).abs() < 1e-12);
        assert_eq!(run.route().len(), 3);
    }

    #[test]
    fn test_inactive_accumulator_ignores_input() {
        let mut run = RunAccumulator::new();
        run.record_fix(fixes()[0]);
        run.tick();
        assert!(run.route().is_empty());
        assert_eq!(run.elapsed_seconds(), 0);
    }

    #[test]
    fn test_finish_clears_state_for_next_session() {
        let mut run = RunAccumulator::new();
        run.start();
        for fix in fixes() {
            run.record_fix(fix);
        }
        run.tick();
        run.tick();

        let snapshot = run.finish();
        assert_eq!(snapshot.elapsed_seconds, 2);
        assert_eq!(snapshot.route.len(), 3);
        assert!(!run.is_active());
        assert!(run.route().is_empty());
        assert_eq!(run.distance_miles(), 0.0);

        // The next session must not measure from the previous run's last fix.
        run.start();
        assert_eq!(run.record_fix(fixes()[0]), 0.0);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(3725), "01:02:05");
    }
}
