//! `nav-route` — building directory and route planning.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`building`]  | `Building`, `Rect`, `BuildingDirectory`, JSON loader |
//! | [`planner`]   | `RoutePlanner`, `PlannedRoute`                       |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                         |
//!
//! # Planning model
//!
//! [`RoutePlanner::plan`] stitches one ordered waypoint sequence from an
//! origin point to a named building's center:
//!
//! ```text
//! origin → snapped origin → hub … hub → snapped destination → center
//! ```
//!
//! Both endpoints are forced onto the road surface via
//! [`RoadNetwork::snap`][nav_spatial::RoadNetwork::snap], the hub legs come
//! from BFS over the hub graph, and consecutive duplicate points are
//! removed so the sequence never contains a zero-length leg.  A failed plan
//! returns a typed [`PlanError`] and produces no sequence — callers must
//! not start a simulation from it.

pub mod building;
pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingDirectory, BuildingRecord, Rect};
pub use error::{PlanError, PlanResult};
pub use planner::{PlannedRoute, RoutePlanner};
