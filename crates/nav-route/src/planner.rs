//! Route planning: snapping + hub search + waypoint stitching.

use nav_core::{HubId, Point};
use nav_spatial::{RoadNetwork, SpatialError};

use crate::building::BuildingDirectory;
use crate::{PlanError, PlanResult};

/// Two waypoints closer than this on both axes are the same place.
/// Well below any meaningful layout distance, well above f32 noise.
const DEDUP_EPS: f32 = 1e-3;

// ── PlannedRoute ──────────────────────────────────────────────────────────────

/// The result of a successful planning call.
///
/// Guarantees: `waypoints` is non-empty, starts at the requested origin,
/// ends at the destination building's center, and contains no consecutive
/// duplicate points.  A degenerate request (origin already at the
/// destination center) collapses to a single waypoint.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    /// Ordered points the agent must pass through, origin first.
    pub waypoints: Vec<Point>,
    /// The hub legs of the route, in traversal order.
    pub hub_path: Vec<HubId>,
    /// Summed Euclidean length of all legs, in plane units.
    pub total_length: f32,
}

impl PlannedRoute {
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// `true` if origin and destination coincide — nothing to traverse.
    pub fn is_degenerate(&self) -> bool {
        self.waypoints.len() < 2
    }

    /// Time to traverse the route at constant `speed` (plane units per time
    /// unit).  Infinite for a non-degenerate route at zero speed.
    pub fn estimated_travel_time(&self, speed: f32) -> f32 {
        self.total_length / speed
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Plans walkable routes from an arbitrary origin to a named building.
///
/// Borrows the immutable [`RoadNetwork`]; one planner (or several — the
/// network is shareable) can serve any number of sequential plan calls.
pub struct RoutePlanner<'net> {
    network: &'net RoadNetwork,
    /// Skip a snapped waypoint when the raw point is already this close to
    /// it (the layout's `snap_tolerance`).
    snap_tolerance: f32,
}

impl<'net> RoutePlanner<'net> {
    pub fn new(network: &'net RoadNetwork, snap_tolerance: f32) -> Self {
        Self { network, snap_tolerance }
    }

    /// Plan a route from `origin` to the building named `destination`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::NoOrigin`] — `origin` is unset.
    /// - [`PlanError::UnknownDestination`] — no building with that name in
    ///   the supplied directory.
    /// - [`PlanError::Routing`] — the hub graph is disconnected between the
    ///   endpoints' nearest hubs.
    pub fn plan(
        &self,
        origin: Option<Point>,
        destination: &str,
        buildings: &BuildingDirectory,
    ) -> PlanResult<PlannedRoute> {
        let origin = origin.ok_or(PlanError::NoOrigin)?;
        let building = buildings
            .get(destination)
            .ok_or_else(|| PlanError::UnknownDestination(destination.to_string()))?;
        let dest_center = building.center();

        // Force entry and exit onto the road surface.
        let origin_road = self.snap(origin)?;
        let dest_road = self.snap(dest_center)?;

        let start_hub = self.nearest_hub(origin_road)?;
        let end_hub = self.nearest_hub(dest_road)?;
        let hub_path = self.network.shortest_hub_path(start_hub, end_hub)?;

        let mut waypoints = Vec::with_capacity(hub_path.len() + 4);
        waypoints.push(origin);
        if origin.distance(origin_road) > self.snap_tolerance {
            waypoints.push(origin_road);
        }
        for &hub in &hub_path {
            waypoints.push(self.network.hub_position(hub));
        }
        if dest_road.distance(dest_center) > self.snap_tolerance {
            waypoints.push(dest_road);
        }
        waypoints.push(dest_center);

        dedup_consecutive(&mut waypoints);
        let total_length = polyline_length(&waypoints);

        log::debug!(
            "planned route to '{}': {} waypoints, {} hub legs, length {:.1}",
            building.name,
            waypoints.len(),
            hub_path.len(),
            total_length
        );

        Ok(PlannedRoute { waypoints, hub_path, total_length })
    }

    fn snap(&self, p: Point) -> PlanResult<Point> {
        // None cannot happen on a validated network (≥ 1 segment).
        self.network
            .snap(p)
            .ok_or_else(|| SpatialError::InvalidConfiguration("no road segments declared".into()).into())
    }

    fn nearest_hub(&self, p: Point) -> PlanResult<HubId> {
        self.network
            .nearest_hub(p)
            .ok_or_else(|| SpatialError::InvalidConfiguration("no hubs declared".into()).into())
    }
}

/// Remove consecutive points closer than [`DEDUP_EPS`], keeping the first
/// of each run.  Zero-length legs are illegal in a planned route.
fn dedup_consecutive(points: &mut Vec<Point>) {
    points.dedup_by(|next, kept| kept.approx_eq(*next, DEDUP_EPS));
}

fn polyline_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
