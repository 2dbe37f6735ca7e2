//! JSON layout loader.
//!
//! A campus layout is external configuration, not compiled-in constants:
//! swapping the file swaps the campus without code changes.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "hubs": [
//!     { "id": "entrance", "x": 400.0, "y": 90.0 },
//!     { "id": "quad",     "x": 400.0, "y": 220.0 }
//!   ],
//!   "adjacency": {
//!     "entrance": ["quad"],
//!     "quad":     ["entrance"]
//!   },
//!   "segments": [
//!     { "orientation": "vertical", "fixed": 400.0, "start": 90.0, "end": 590.0 }
//!   ],
//!   "snap_tolerance": 5.0
//! }
//! ```
//!
//! Hubs are numbered in declaration order; each adjacency *list* is the BFS
//! visit order for that hub (the order of keys in the `adjacency` map does
//! not matter).  Adjacency must be symmetric — both directions listed — and
//! is rejected otherwise at build time.
//!
//! `snap_tolerance` is optional and defaults to 5.0 plane units: a point
//! less than a quarter of a road's drawn width away from its snap target is
//! already visually on the road, so the planner skips the zero-ish leg.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use nav_core::Point;

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::segment::Segment;
use crate::{SpatialError, SpatialResult};

/// Default for [`LayoutConfig::snap_tolerance`].
pub const DEFAULT_SNAP_TOLERANCE: f32 = 5.0;

// ── Records ───────────────────────────────────────────────────────────────────

/// One hub row in the layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubRecord {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// A complete campus layout: hubs + adjacency + road segments + tolerances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub hubs: Vec<HubRecord>,
    pub adjacency: FxHashMap<String, Vec<String>>,
    pub segments: Vec<Segment>,
    /// Skip a snapped waypoint when the raw point is already this close to
    /// it.  See [`DEFAULT_SNAP_TOLERANCE`].
    #[serde(default = "default_snap_tolerance")]
    pub snap_tolerance: f32,
}

fn default_snap_tolerance() -> f32 {
    DEFAULT_SNAP_TOLERANCE
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl LayoutConfig {
    /// Parse a layout from any JSON `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or embedded layouts.
    pub fn from_json_reader<R: Read>(reader: R) -> SpatialResult<Self> {
        serde_json::from_reader(reader).map_err(|e| SpatialError::Parse(e.to_string()))
    }

    /// Parse a layout from a JSON file.
    pub fn from_json_file(path: &Path) -> SpatialResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Build the validated [`RoadNetwork`] this layout describes.
    ///
    /// # Errors
    ///
    /// [`SpatialError::UnknownHub`] if the adjacency map references an
    /// undeclared hub id, plus everything
    /// [`RoadNetworkBuilder::build`] rejects.
    pub fn build_network(&self) -> SpatialResult<RoadNetwork> {
        let mut builder = RoadNetworkBuilder::new();

        let mut ids = FxHashMap::default();
        for hub in &self.hubs {
            let id = builder.add_hub(hub.id.clone(), Point::new(hub.x, hub.y));
            // Duplicate idents overwrite here; builder.build() rejects them.
            ids.insert(hub.id.as_str(), id);
        }

        for (from, neighbors) in &self.adjacency {
            let from_id = *ids
                .get(from.as_str())
                .ok_or_else(|| SpatialError::UnknownHub(from.clone()))?;
            for to in neighbors {
                let to_id = *ids
                    .get(to.as_str())
                    .ok_or_else(|| SpatialError::UnknownHub(to.clone()))?;
                builder.add_directed_link(from_id, to_id);
            }
        }

        for &segment in &self.segments {
            builder.add_segment(segment);
        }

        builder.build()
    }
}
