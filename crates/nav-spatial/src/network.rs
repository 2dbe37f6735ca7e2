//! Road network representation and builder.
//!
//! # Data layout
//!
//! Hub adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `HubId h`, its neighbors occupy the slice:
//!
//! ```text
//! link_to[ hub_link_start[h] .. hub_link_start[h+1] ]
//! ```
//!
//! Links are sorted **stably** by source hub, so within one hub the
//! neighbor order is exactly the declared order.  That order is the BFS
//! visit order, which makes shortest-path tie-breaking a reproducible
//! property of the configuration rather than an implementation accident.
//!
//! # Spatial indices
//!
//! Two R-trees (via `rstar`): one over hub positions for nearest-hub
//! queries, one over segments for snapping arbitrary points onto the road
//! surface.  Exact distance ties are broken toward the first-declared
//! (lowest-id) entry in both cases.

use std::collections::VecDeque;

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::{FxHashMap, FxHashSet};

use nav_core::{HubId, Point, SegmentId};

use crate::SpatialError;
use crate::segment::Segment;

// ── R-tree entries ────────────────────────────────────────────────────────────

/// Entry in the hub spatial index: a 2-D `[x, y]` point with its `HubId`.
#[derive(Clone, Debug)]
struct HubEntry {
    point: [f32; 2],
    id: HubId,
}

impl RTreeObject for HubEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HubEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Entry in the segment spatial index: the segment geometry plus its id.
#[derive(Clone, Debug)]
struct SegmentEntry {
    segment: Segment,
    id: SegmentId,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        let (a, b) = self.segment.endpoints();
        AABB::from_corners([a.x, a.y], [b.x, b.y])
    }
}

impl PointDistance for SegmentEntry {
    /// Squared distance to the clamped projection onto the segment.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let p = Point::new(point[0], point[1]);
        p.distance_sq(self.segment.project_clamped(p))
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Immutable hub graph plus segment geometry and spatial indices.
///
/// Construct via [`RoadNetworkBuilder`] or [`LayoutConfig`][crate::LayoutConfig];
/// `build()` validates the configuration, so every query on a `RoadNetwork`
/// is infallible apart from explicit routing failures.  The network performs
/// no interior mutation and is `Send + Sync`: one instance can serve any
/// number of concurrent route computations.
#[derive(Debug)]
pub struct RoadNetwork {
    // ── Hub data (indexed by HubId) ───────────────────────────────────────
    hub_pos: Vec<Point>,
    hub_ident: Vec<String>,
    ident_index: FxHashMap<String, HubId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of hub `h` are at
    /// `link_to[hub_link_start[h] .. hub_link_start[h+1]]`.
    /// Length = `hub_count + 1`.
    hub_link_start: Vec<u32>,
    link_to: Vec<HubId>,

    // ── Segment data (indexed by SegmentId) ───────────────────────────────
    segments: Vec<Segment>,

    // ── Spatial indices ───────────────────────────────────────────────────
    hub_idx: RTree<HubEntry>,
    segment_idx: RTree<SegmentEntry>,
}

impl RoadNetwork {
    // ── Dimensions & accessors ────────────────────────────────────────────

    pub fn hub_count(&self) -> usize {
        self.hub_pos.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Position of `hub`.
    ///
    /// # Panics
    /// Panics if `hub` is out of range; `HubId`s handed out by this network
    /// are always in range.
    #[inline]
    pub fn hub_position(&self, hub: HubId) -> Point {
        self.hub_pos[hub.index()]
    }

    /// The declared string identifier of `hub`.
    #[inline]
    pub fn hub_ident(&self, hub: HubId) -> &str {
        &self.hub_ident[hub.index()]
    }

    /// Look up a hub by its declared string identifier.
    pub fn hub_by_ident(&self, ident: &str) -> Option<HubId> {
        self.ident_index.get(ident).copied()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the neighbors of `hub`, in declared adjacency order.
    ///
    /// This is a contiguous slice scan — no heap allocation.
    #[inline]
    pub fn neighbors(&self, hub: HubId) -> impl Iterator<Item = HubId> + '_ {
        let start = self.hub_link_start[hub.index()] as usize;
        let end = self.hub_link_start[hub.index() + 1] as usize;
        self.link_to[start..end].iter().copied()
    }

    /// Number of neighbors of `hub`.
    #[inline]
    pub fn degree(&self, hub: HubId) -> usize {
        let start = self.hub_link_start[hub.index()] as usize;
        let end = self.hub_link_start[hub.index() + 1] as usize;
        end - start
    }

    /// Shortest hub-to-hub path by hop count, as an ordered hub sequence
    /// including both endpoints.
    ///
    /// Breadth-first search visiting neighbors in declared adjacency order:
    /// among equal-hop paths the first one discovered under that order wins,
    /// so repeated runs with the same network return identical sequences.
    ///
    /// All edges connect geometrically adjacent hubs in the reference
    /// layouts, so minimum hops coincides with minimum length there; a
    /// denser graph with unequal edge lengths would need a weighted search
    /// instead.
    ///
    /// # Errors
    ///
    /// [`SpatialError::HubNotFound`] if either endpoint is out of range,
    /// [`SpatialError::NoPath`] if the graph is disconnected between them.
    pub fn shortest_hub_path(&self, from: HubId, to: HubId) -> Result<Vec<HubId>, SpatialError> {
        let n = self.hub_count();
        if from.index() >= n {
            return Err(SpatialError::HubNotFound(from));
        }
        if to.index() >= n {
            return Err(SpatialError::HubNotFound(to));
        }
        if from == to {
            return Ok(vec![from]);
        }

        // prev[h] = hub we reached h from; INVALID marks unvisited.
        let mut prev = vec![HubId::INVALID; n];
        let mut queue = VecDeque::new();
        prev[from.index()] = from;
        queue.push_back(from);

        while let Some(hub) = queue.pop_front() {
            for next in self.neighbors(hub) {
                if prev[next.index()] != HubId::INVALID {
                    continue;
                }
                prev[next.index()] = hub;
                if next == to {
                    return Ok(reconstruct(&prev, from, to));
                }
                queue.push_back(next);
            }
        }

        Err(SpatialError::NoPath { from, to })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest hub to `p` by Euclidean distance.
    ///
    /// Exact distance ties go to the first-declared hub.  Returns `None`
    /// only for a network with no hubs, which `build()` rejects.
    pub fn nearest_hub(&self, p: Point) -> Option<HubId> {
        let mut iter = self.hub_idx.nearest_neighbor_iter_with_distance_2(&[p.x, p.y]);
        let (first, best_d2) = iter.next()?;
        let mut best = first.id;
        for (entry, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            best = best.min(entry.id);
        }
        Some(best)
    }

    /// Snap `p` onto the nearest point of the road surface.
    ///
    /// Returns `None` only for a network with no segments, which `build()`
    /// rejects.
    pub fn snap(&self, p: Point) -> Option<Point> {
        self.nearest_segment(p).map(|(_, snapped)| snapped)
    }

    /// Like [`snap`](Self::snap), but also reports which segment won.
    ///
    /// Exact distance ties go to the first-declared segment.
    pub fn nearest_segment(&self, p: Point) -> Option<(SegmentId, Point)> {
        let mut iter = self
            .segment_idx
            .nearest_neighbor_iter_with_distance_2(&[p.x, p.y]);
        let (first, best_d2) = iter.next()?;
        let mut best = first;
        for (entry, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            if entry.id < best.id {
                best = entry;
            }
        }
        Some((best.id, best.segment.project_clamped(p)))
    }
}

/// Walk the BFS parent chain back from `to` and reverse it.
fn reconstruct(prev: &[HubId], from: HubId, to: HubId) -> Vec<HubId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts hubs, links, and segments in any order.  `build()`
/// validates the configuration, constructs the CSR adjacency, and bulk-loads
/// both R-trees.
///
/// # Example
///
/// ```
/// use nav_core::Point;
/// use nav_spatial::{RoadNetworkBuilder, Segment};
///
/// let mut b = RoadNetworkBuilder::new();
/// let top = b.add_hub("top", Point::new(400.0, 90.0));
/// let mid = b.add_hub("mid", Point::new(400.0, 340.0));
/// b.connect(top, mid);
/// b.add_segment(Segment::vertical(400.0, 90.0, 340.0));
/// let net = b.build().unwrap();
/// assert_eq!(net.hub_count(), 2);
/// assert_eq!(net.shortest_hub_path(top, mid).unwrap(), vec![top, mid]);
/// ```
pub struct RoadNetworkBuilder {
    hubs: Vec<(String, Point)>,
    links: Vec<(HubId, HubId)>,
    segments: Vec<Segment>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { hubs: Vec::new(), links: Vec::new(), segments: Vec::new() }
    }

    /// Add a routing hub and return its `HubId` (sequential from 0).
    pub fn add_hub(&mut self, ident: impl Into<String>, pos: Point) -> HubId {
        let id = HubId(self.hubs.len() as u32);
        self.hubs.push((ident.into(), pos));
        id
    }

    /// Add a **one-directional** adjacency link from `a` to `b`.
    ///
    /// The config loader declares each direction explicitly so that
    /// `build()` can detect asymmetric adjacency.  Hand-built networks
    /// usually want [`connect`](Self::connect) instead.
    pub fn add_directed_link(&mut self, a: HubId, b: HubId) {
        self.links.push((a, b));
    }

    /// Convenience: link `a` and `b` in both directions.
    pub fn connect(&mut self, a: HubId, b: HubId) {
        self.add_directed_link(a, b);
        self.add_directed_link(b, a);
    }

    /// Add a road segment (normalized so `start <= end`) and return its id.
    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(segment.normalized());
        id
    }

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Consume the builder and produce a validated [`RoadNetwork`].
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidConfiguration`] if the hub or segment set is
    /// empty, a hub identifier repeats, a coordinate is non-finite, a
    /// segment has zero length, a link references an unknown hub or forms a
    /// self-loop, or the adjacency is asymmetric.
    pub fn build(self) -> Result<RoadNetwork, SpatialError> {
        let hub_count = self.hubs.len();

        if hub_count == 0 {
            return Err(SpatialError::InvalidConfiguration("no hubs declared".into()));
        }
        if self.segments.is_empty() {
            return Err(SpatialError::InvalidConfiguration("no road segments declared".into()));
        }

        let mut ident_index = FxHashMap::default();
        for (i, (ident, pos)) in self.hubs.iter().enumerate() {
            if !pos.is_finite() {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "hub '{ident}' has a non-finite position"
                )));
            }
            if ident_index.insert(ident.clone(), HubId(i as u32)).is_some() {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "duplicate hub identifier '{ident}'"
                )));
            }
        }

        for seg in &self.segments {
            if seg.has_non_finite() {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "segment {seg} has a non-finite coordinate"
                )));
            }
            if seg.length() <= 0.0 {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "segment {seg} has zero length"
                )));
            }
        }

        for &(a, b) in &self.links {
            if a.index() >= hub_count || b.index() >= hub_count {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "link {a} -> {b} references a hub outside the declared set"
                )));
            }
            if a == b {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "hub '{}' links to itself",
                    self.hubs[a.index()].0
                )));
            }
        }

        // Symmetry: every declared direction must have its reverse.  BFS
        // correctness and the no-dead-end guarantee both rely on this.
        let link_set: FxHashSet<(u32, u32)> =
            self.links.iter().map(|&(a, b)| (a.0, b.0)).collect();
        for &(a, b) in &self.links {
            if !link_set.contains(&(b.0, a.0)) {
                return Err(SpatialError::InvalidConfiguration(format!(
                    "asymmetric adjacency: '{}' lists '{}' but not vice versa",
                    self.hubs[a.index()].0,
                    self.hubs[b.index()].0
                )));
            }
        }

        // Stable sort by source hub: declared neighbor order survives within
        // each CSR row.
        let mut links = self.links;
        links.sort_by_key(|&(a, _)| a.0);

        let link_to: Vec<HubId> = links.iter().map(|&(_, b)| b).collect();
        let mut hub_link_start = vec![0u32; hub_count + 1];
        for &(a, _) in &links {
            hub_link_start[a.index() + 1] += 1;
        }
        for i in 1..=hub_count {
            hub_link_start[i] += hub_link_start[i - 1];
        }
        debug_assert_eq!(hub_link_start[hub_count] as usize, link_to.len());

        let hub_pos: Vec<Point> = self.hubs.iter().map(|&(_, p)| p).collect();
        let hub_ident: Vec<String> = self.hubs.into_iter().map(|(s, _)| s).collect();

        // Bulk-load both R-trees (O(N log N), faster than N inserts).
        let hub_entries: Vec<HubEntry> = hub_pos
            .iter()
            .enumerate()
            .map(|(i, p)| HubEntry { point: [p.x, p.y], id: HubId(i as u32) })
            .collect();
        let segment_entries: Vec<SegmentEntry> = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, &segment)| SegmentEntry { segment, id: SegmentId(i as u32) })
            .collect();

        log::debug!(
            "road network built: {} hubs, {} links, {} segments",
            hub_count,
            link_to.len(),
            self.segments.len()
        );

        Ok(RoadNetwork {
            hub_pos,
            hub_ident,
            ident_index,
            hub_link_start,
            link_to,
            segments: self.segments,
            hub_idx: RTree::bulk_load(hub_entries),
            segment_idx: RTree::bulk_load(segment_entries),
        })
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
