//! Building records and the per-planning-call directory snapshot.
//!
//! Buildings come from an external source (a data service in the reference
//! deployment).  The planner treats the directory as an immutable snapshot
//! per planning call and never caches or refreshes it; only the reference
//! rectangle's center matters for routing.
//!
//! # JSON format
//!
//! ```json
//! [
//!   { "name": "Library", "rect": { "x": 100.0, "y": 300.0, "width": 100.0, "height": 80.0 } }
//! ]
//! ```

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use nav_core::{BuildingId, Point};

use crate::{PlanError, PlanResult};

/// An axis-aligned reference rectangle in campus-plane coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The rectangle's center — the only building geometry routing uses.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One building as supplied by the external building source.
#[derive(Clone, Debug)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub rect: Rect,
}

impl Building {
    /// The routing destination for this building.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }
}

/// Row shape of the external building feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub name: String,
    pub rect: Rect,
}

// ── BuildingDirectory ─────────────────────────────────────────────────────────

/// Immutable snapshot of the building set for one planning call.
///
/// Buildings are numbered in feed order; lookups go through a name index.
pub struct BuildingDirectory {
    buildings: Vec<Building>,
    by_name: FxHashMap<String, BuildingId>,
}

impl BuildingDirectory {
    /// Build a directory from feed records.
    ///
    /// A repeated name keeps the first occurrence — the feed is external
    /// input, and the first-declared building is the one users see listed.
    pub fn from_records(records: Vec<BuildingRecord>) -> Self {
        let mut buildings = Vec::with_capacity(records.len());
        let mut by_name = FxHashMap::default();

        for record in records {
            let id = BuildingId(buildings.len() as u32);
            if by_name.contains_key(&record.name) {
                log::warn!("duplicate building name '{}' ignored", record.name);
                continue;
            }
            by_name.insert(record.name.clone(), id);
            buildings.push(Building { id, name: record.name, rect: record.rect });
        }

        Self { buildings, by_name }
    }

    /// Parse a directory from any JSON `Read` source.
    pub fn from_json_reader<R: Read>(reader: R) -> PlanResult<Self> {
        let records: Vec<BuildingRecord> =
            serde_json::from_reader(reader).map_err(|e| PlanError::Parse(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    /// Parse a directory from a JSON file.
    pub fn from_json_file(path: &Path) -> PlanResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Look up a building by name.
    pub fn get(&self, name: &str) -> Option<&Building> {
        self.by_name.get(name).map(|id| &self.buildings[id.index()])
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Iterate buildings in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter()
    }
}
