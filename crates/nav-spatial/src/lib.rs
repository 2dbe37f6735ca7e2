//! `nav-spatial` — road network graph, segment snapping, and layout loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`segment`]  | `Segment`, `Orientation` — axis-aligned road geometry     |
//! | [`network`]  | `RoadNetwork`, `RoadNetworkBuilder`, BFS hub routing      |
//! | [`layout`]   | `LayoutConfig` — serde-loaded campus layout               |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Validation model
//!
//! A `RoadNetwork` can only be obtained through
//! [`RoadNetworkBuilder::build`], which rejects empty hub or segment sets,
//! duplicate hub identifiers, asymmetric adjacency, and degenerate geometry
//! with [`SpatialError::InvalidConfiguration`].  Configuration problems are
//! therefore fatal at construction time; query methods on a built network
//! never fail for configuration reasons.

pub mod error;
pub mod layout;
pub mod network;
pub mod segment;


pub use error::{SpatialError, SpatialResult};
pub use layout::LayoutConfig;
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use segment::{Orientation, Segment};
