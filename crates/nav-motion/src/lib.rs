//! `nav-motion` — constant-speed movement along a waypoint sequence.
//!
//! # Crate layout
//!
//! | Module        | Contents                                  |
//! |---------------|-------------------------------------------|
//! | [`simulator`] | `MotionSimulator`, `MotionState`          |
//! | [`error`]     | `MotionError`, `MotionResult<T>`          |
//!
//! # Movement model (externally clocked)
//!
//! A `MotionSimulator` owns one waypoint sequence and a scalar speed.  The
//! caller owns the clock: each `tick(elapsed)` call passes the total time
//! since the journey started, and the simulator answers with the agent's
//! interpolated position, distance traveled, progress fraction, and an
//! arrival flag.  `tick` performs no I/O and reads no wall clock, so tests
//! drive it with synthetic time values.
//!
//! The simulator is single-use: **Running** until it latches the terminal
//! **Arrived** state (or **Cancelled** via [`MotionSimulator::cancel`]), and
//! restarting means constructing a new instance from a fresh route.

pub mod error;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use simulator::{MotionSimulator, MotionState};
