//! Unit tests for nav-motion.
//!
//! All tests drive the simulator with synthetic elapsed-time values; no
//! real timers are involved.

use nav_core::Point;

use crate::{MotionError, MotionSimulator};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// L-shaped path: (0,0) → (100,0) → (100,50).  Total length 150.
fn l_path() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 50.0)]
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn empty_path_rejected() {
        let result = MotionSimulator::new(vec![], 1.0);
        assert!(matches!(result, Err(MotionError::EmptyPath)));
    }

    #[test]
    fn negative_speed_rejected() {
        let result = MotionSimulator::new(l_path(), -1.0);
        assert!(matches!(result, Err(MotionError::InvalidSpeed(_))));
    }

    #[test]
    fn non_finite_speed_rejected() {
        assert!(MotionSimulator::new(l_path(), f32::NAN).is_err());
        assert!(MotionSimulator::new(l_path(), f32::INFINITY).is_err());
    }

    #[test]
    fn cumulative_total() {
        let sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        assert_eq!(sim.total_length(), 150.0);
        assert_eq!(sim.speed(), 1.0);
    }

    #[test]
    fn initial_state_is_origin() {
        let sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let s = sim.state();
        assert_eq!(s.position, Point::new(0.0, 0.0));
        assert_eq!(s.distance_traveled, 0.0);
        assert!(!s.arrived);
    }
}

// ── Ticking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ticking {
    use super::*;

    #[test]
    fn interpolates_within_first_segment() {
        let mut sim = MotionSimulator::new(l_path(), 2.0).unwrap();
        // 2 units/time × 25 time = 50 units along the first leg.
        let s = sim.tick(25.0);
        assert_eq!(s.position, Point::new(50.0, 0.0));
        assert_eq!(s.distance_traveled, 50.0);
        assert!((s.progress_fraction - 50.0 / 150.0).abs() < 1e-6);
        assert!(!s.arrived);
    }

    #[test]
    fn crosses_into_second_segment() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let s = sim.tick(120.0);
        // 120 units: 100 along the first leg, 20 up the second.
        assert_eq!(s.position, Point::new(100.0, 20.0));
        assert!(!s.arrived);
    }

    #[test]
    fn waypoint_boundary_is_exact() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let s = sim.tick(100.0);
        assert_eq!(s.position, Point::new(100.0, 0.0));
    }

    #[test]
    fn arrival_threshold() {
        // Total 150 at speed 2 → arrival at elapsed 75.
        let mut sim = MotionSimulator::new(l_path(), 2.0).unwrap();
        assert!(!sim.tick(74.99).arrived);

        let mut sim = MotionSimulator::new(l_path(), 2.0).unwrap();
        let s = sim.tick(75.0);
        assert!(s.arrived);
        assert_eq!(s.position, Point::new(100.0, 50.0));
        assert_eq!(s.progress_fraction, 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut sim = MotionSimulator::new(l_path(), 1.3).unwrap();
        let mut prev = 0.0;
        for step in 0..200 {
            let s = sim.tick(step as f32);
            assert!(
                s.progress_fraction >= prev,
                "progress regressed at step {step}: {} < {prev}",
                s.progress_fraction
            );
            prev = s.progress_fraction;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn negative_elapsed_treated_as_zero() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let s = sim.tick(-10.0);
        assert_eq!(s.position, Point::new(0.0, 0.0));
        assert_eq!(s.distance_traveled, 0.0);
    }

    #[test]
    fn ticks_after_arrival_are_idempotent() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let terminal = sim.tick(1000.0);
        assert!(terminal.arrived);
        // Later ticks — even with smaller elapsed values — return the
        // identical terminal state.
        assert_eq!(sim.tick(2000.0), terminal);
        assert_eq!(sim.tick(0.0), terminal);
        assert!(sim.is_finished());
    }

    #[test]
    fn overshoot_clamps_to_final_waypoint() {
        let mut sim = MotionSimulator::new(l_path(), 10.0).unwrap();
        let s = sim.tick(1e6);
        assert_eq!(s.position, Point::new(100.0, 50.0));
        assert_eq!(s.distance_traveled, 150.0);
    }
}

// ── Degenerate paths ──────────────────────────────────────────────────────────

#[cfg(test)]
mod degenerate {
    use super::*;

    #[test]
    fn zero_length_path_arrives_at_tick_zero() {
        let mut sim = MotionSimulator::new(vec![Point::new(150.0, 340.0)], 0.05).unwrap();
        let s = sim.tick(0.0);
        assert!(s.arrived);
        assert_eq!(s.position, Point::new(150.0, 340.0));
        assert_eq!(s.progress_fraction, 1.0);
        assert_eq!(s.distance_traveled, 0.0);
    }

    #[test]
    fn zero_length_leg_in_path_is_skipped() {
        // Middle leg has zero length; interpolation must never divide by it.
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ];
        let mut sim = MotionSimulator::new(path, 1.0).unwrap();
        assert_eq!(sim.tick(10.0).position, Point::new(10.0, 0.0));
        assert_eq!(sim.tick(15.0).position, Point::new(15.0, 0.0));
        assert!(sim.tick(20.0).arrived);
    }

    #[test]
    fn zero_speed_never_arrives() {
        let mut sim = MotionSimulator::new(l_path(), 0.0).unwrap();
        for elapsed in [0.0, 100.0, 1e9] {
            let s = sim.tick(elapsed);
            assert!(!s.arrived);
            assert_eq!(s.position, Point::new(0.0, 0.0));
            assert_eq!(s.progress_fraction, 0.0);
        }
    }

    #[test]
    fn zero_speed_on_zero_length_path_arrives() {
        let mut sim = MotionSimulator::new(vec![Point::new(5.0, 5.0)], 0.0).unwrap();
        assert!(sim.tick(0.0).arrived);
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancel_freezes_state() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let mid = sim.tick(50.0);
        sim.cancel();
        assert!(sim.is_finished());
        assert!(sim.is_cancelled());
        // Further ticks do not move the agent or report arrival.
        assert_eq!(sim.tick(1e6), mid);
        assert!(!sim.state().arrived);
    }

    #[test]
    fn cancel_after_arrival_keeps_arrived() {
        let mut sim = MotionSimulator::new(l_path(), 1.0).unwrap();
        let terminal = sim.tick(1000.0);
        sim.cancel();
        assert!(!sim.is_cancelled());
        assert_eq!(sim.state(), terminal);
        assert!(sim.state().arrived);
    }
}
