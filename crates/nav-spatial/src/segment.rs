//! Axis-aligned road segment geometry.
//!
//! Every traversable road in a campus layout is a straight horizontal or
//! vertical segment.  A segment is described by its orientation, the shared
//! coordinate (`fixed` — y for horizontal roads, x for vertical ones), and
//! the `[start, end]` extent along the other axis.
//!
//! Snapping uses the **clamped** orthogonal projection: a point beyond a
//! segment's endpoint snaps to that endpoint, never onto the infinite
//! extension of the road's line.  Routing an agent off the drawn road is
//! never valid.

use nav_core::Point;
use serde::{Deserialize, Serialize};

/// Which axis a road segment runs along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs along the x axis; all points share one y coordinate.
    Horizontal,
    /// Runs along the y axis; all points share one x coordinate.
    Vertical,
}

/// One straight, axis-aligned traversable road.
///
/// `start`/`end` are as declared; [`Segment::normalized`] (applied by the
/// network builder) guarantees `start <= end` for stored segments.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub orientation: Orientation,
    /// The shared y (if horizontal) or x (if vertical).
    pub fixed: f32,
    /// Extent along the running axis.
    pub start: f32,
    pub end: f32,
}

impl Segment {
    pub fn horizontal(y: f32, x_start: f32, x_end: f32) -> Self {
        Segment { orientation: Orientation::Horizontal, fixed: y, start: x_start, end: x_end }.normalized()
    }

    pub fn vertical(x: f32, y_start: f32, y_end: f32) -> Self {
        Segment { orientation: Orientation::Vertical, fixed: x, start: y_start, end: y_end }.normalized()
    }

    /// The same segment with `start <= end`.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Segment { start: self.end, end: self.start, ..self }
        }
    }

    /// Extent length in plane units.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).abs()
    }

    /// `true` if any field is NaN / infinite.
    pub fn has_non_finite(&self) -> bool {
        !(self.fixed.is_finite() && self.start.is_finite() && self.end.is_finite())
    }

    /// The two endpoints, in `(start, end)` order.
    pub fn endpoints(&self) -> (Point, Point) {
        match self.orientation {
            Orientation::Horizontal => (
                Point::new(self.start, self.fixed),
                Point::new(self.end, self.fixed),
            ),
            Orientation::Vertical => (
                Point::new(self.fixed, self.start),
                Point::new(self.fixed, self.end),
            ),
        }
    }

    /// Orthogonal projection of `p` onto this segment, clamped to its extent.
    ///
    /// The result always lies on the drawn road.
    #[inline]
    pub fn project_clamped(&self, p: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(p.x.clamp(self.start, self.end), self.fixed),
            Orientation::Vertical => Point::new(self.fixed, p.y.clamp(self.start, self.end)),
        }
    }

    /// Distance from `p` to the nearest point on this segment.
    #[inline]
    pub fn distance_to(&self, p: Point) -> f32 {
        p.distance(self.project_clamped(p))
    }

    /// `true` if `p` lies on this segment, within `eps` on both axes.
    pub fn contains(&self, p: Point, eps: f32) -> bool {
        self.project_clamped(p).approx_eq(p, eps)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.orientation {
            Orientation::Horizontal => {
                write!(f, "horizontal y={} x=[{}, {}]", self.fixed, self.start, self.end)
            }
            Orientation::Vertical => {
                write!(f, "vertical x={} y=[{}, {}]", self.fixed, self.start, self.end)
            }
        }
    }
}
