//! Route-planning error type.

use thiserror::Error;

use nav_spatial::SpatialError;

/// Errors produced by `nav-route`.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no origin position set")]
    NoOrigin,

    #[error("unknown destination '{0}'")]
    UnknownDestination(String),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
