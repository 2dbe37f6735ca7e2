//! The `MotionSimulator` — position as a function of elapsed time.

use nav_core::Point;

use crate::{MotionError, MotionResult};

// ── MotionState ───────────────────────────────────────────────────────────────

/// The agent's state at one simulation tick.
///
/// Recomputed on every [`MotionSimulator::tick`]; the simulator keeps only
/// the most recent state, callers that want history retain it themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionState {
    /// Interpolated position on the waypoint polyline.
    pub position: Point,
    /// Arc-length distance covered so far, clamped to the total path length.
    pub distance_traveled: f32,
    /// `distance_traveled / total length`, in `[0, 1]`.  `1.0` for a
    /// zero-length path.
    pub progress_fraction: f32,
    /// `true` once the final waypoint is reached; latches permanently.
    pub arrived: bool,
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle of a simulator instance.  Running is the only state that
/// computes; Arrived and Cancelled are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Arrived,
    Cancelled,
}

// ── MotionSimulator ───────────────────────────────────────────────────────────

/// Advances an agent along a waypoint sequence at constant scalar speed.
///
/// Owned by exactly one active navigation; not to be ticked from more than
/// one caller.  The cumulative arc-length table is computed once at
/// construction, so each tick is a table lookup plus one interpolation.
pub struct MotionSimulator {
    waypoints: Vec<Point>,
    /// `cumulative[i]` = arc length from the origin to waypoint `i`.
    /// Non-decreasing; `cumulative[0] == 0`.
    cumulative: Vec<f32>,
    total_length: f32,
    speed: f32,
    phase: Phase,
    last: MotionState,
}

impl MotionSimulator {
    /// Construct a simulator over `waypoints` at `speed` plane units per
    /// time unit.
    ///
    /// A single-waypoint sequence is valid: the journey has zero length and
    /// arrives on the first tick.  Zero speed is valid too — the agent
    /// stands still forever unless the path is zero-length.
    ///
    /// # Errors
    ///
    /// [`MotionError::EmptyPath`] for an empty sequence,
    /// [`MotionError::InvalidSpeed`] for negative or non-finite speed.
    pub fn new(waypoints: Vec<Point>, speed: f32) -> MotionResult<Self> {
        if waypoints.is_empty() {
            return Err(MotionError::EmptyPath);
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(MotionError::InvalidSpeed(speed));
        }

        let mut cumulative = Vec::with_capacity(waypoints.len());
        cumulative.push(0.0);
        for w in waypoints.windows(2) {
            let prev = *cumulative.last().unwrap_or(&0.0);
            cumulative.push(prev + w[0].distance(w[1]));
        }
        let total_length = *cumulative.last().unwrap_or(&0.0);

        let last = MotionState {
            position: waypoints[0],
            distance_traveled: 0.0,
            progress_fraction: 0.0,
            arrived: false,
        };

        Ok(Self { waypoints, cumulative, total_length, speed, phase: Phase::Running, last })
    }

    /// Total arc length of the waypoint polyline.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The most recently produced state, without advancing.
    ///
    /// Before the first tick this is the origin at distance zero.
    pub fn state(&self) -> MotionState {
        self.last
    }

    /// `true` once the simulator is in a terminal phase.
    pub fn is_finished(&self) -> bool {
        self.phase != Phase::Running
    }

    /// `true` if [`cancel`](Self::cancel) ended this journey.
    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }

    /// Compute the state after `elapsed` time units since the journey start.
    ///
    /// Pure in `elapsed` while running: no wall clock, no I/O.  Negative
    /// elapsed values are treated as zero.  Once the path end is reached
    /// the simulator latches **Arrived** and every further tick returns the
    /// identical terminal state; after [`cancel`](Self::cancel), ticks
    /// return the state frozen at cancellation.
    pub fn tick(&mut self, elapsed: f32) -> MotionState {
        if self.phase != Phase::Running {
            return self.last;
        }

        let distance = (elapsed.max(0.0) * self.speed).min(self.total_length);

        if distance >= self.total_length {
            // Covers the zero-length path on its first tick: no segment
            // lookup, no division.
            self.phase = Phase::Arrived;
            self.last = MotionState {
                position: self.waypoints[self.waypoints.len() - 1],
                distance_traveled: self.total_length,
                progress_fraction: 1.0,
                arrived: true,
            };
            return self.last;
        }

        // Containing segment: last boundary at or before `distance`.  With
        // equal boundaries (zero-length legs) partition_point lands past
        // them, so the chosen segment always has positive length; the guard
        // below stays for float safety.
        let i = self.cumulative.partition_point(|&c| c <= distance) - 1;
        let seg_len = self.cumulative[i + 1] - self.cumulative[i];
        let t = if seg_len > 0.0 { (distance - self.cumulative[i]) / seg_len } else { 0.0 };

        self.last = MotionState {
            position: self.waypoints[i].lerp(self.waypoints[i + 1], t),
            distance_traveled: distance,
            progress_fraction: distance / self.total_length,
            arrived: false,
        };
        self.last
    }

    /// End the journey now.  Terminal: later ticks return the state frozen
    /// at cancellation and never report arrival.  Has no effect after
    /// arrival.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }
}
