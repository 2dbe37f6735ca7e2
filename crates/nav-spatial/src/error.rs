//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::HubId;

/// Errors produced by `nav-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: HubId, to: HubId },

    #[error("hub {0} not found in network")]
    HubNotFound(HubId),

    #[error("unknown hub identifier '{0}'")]
    UnknownHub(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
