//! Motion-subsystem error type.

use thiserror::Error;

/// Errors produced when constructing a `MotionSimulator`.
///
/// Once constructed, the simulator never fails at runtime.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("waypoint sequence is empty")]
    EmptyPath,

    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
}

pub type MotionResult<T> = Result<T, MotionError>;
