//! Planar coordinate type and distance utilities.
//!
//! `Point` is a position in campus-plane coordinates: arbitrary planar units
//! on a fixed 2D layout, not geographic degrees.  `f32` gives far more
//! precision than a drawn layout a few thousand units wide can ever use.

/// A position in campus-plane coordinates, stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in plane units.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared Euclidean distance — cheaper than `distance` for comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Linear interpolation from `self` toward `other`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`.  `t` is not clamped;
    /// callers that need clamping do it at the call site.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Component-wise closeness check: both `|Δx|` and `|Δy|` within `eps`.
    ///
    /// Used for waypoint deduplication, where "the same place" means within
    /// a fraction of a plane unit, not bit-identical floats.
    #[inline]
    pub fn approx_eq(self, other: Point, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// `true` if both coordinates are finite (no NaN / infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
