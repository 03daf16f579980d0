//! 2D point type for chromaticity coordinates.
//!
//! [`Point2`] represents a CIE 1931 xy chromaticity or a plain 2D vector
//! (the difference of two points). The free functions in this module are
//! the geometry the gamut code is built from.
//!
//! # Usage
//!
//! ```rust
//! use hue_math::{Point2, cross};
//!
//! let a = Point2::new(1.0, 0.0);
//! let b = Point2::new(0.0, 1.0);
//! assert_eq!(cross(a, b), 1.0);
//! ```

use std::ops::{Add, Mul, Sub};

/// A 2D point or vector.
///
/// For chromaticities x and y are the CIE 1931 coordinates, both in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Point2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    #[inline]
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

/// Scalar (z component of the 3D) cross product of two vectors.
///
/// ```text
/// p1.x * p2.y - p1.y * p2.x
/// ```
///
/// Positive when `p2` is counter-clockwise from `p1`.
#[inline]
pub fn cross(p1: Point2, p2: Point2) -> f64 {
    p1.x * p2.y - p1.y * p2.x
}

/// Finds the point on the segment `start..=end` closest to `point`.
///
/// Projects `point` onto the line through `start` and `end`, then clamps
/// the projection parameter to [0, 1] so the result lies on the segment
/// rather than the infinite line. A degenerate segment yields `start`.
///
/// # Example
///
/// ```rust
/// use hue_math::{Point2, closest_point_on_segment};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
///
/// // Beyond the end: clamps to `end`
/// let p = closest_point_on_segment(a, b, Point2::new(2.0, 1.0));
/// assert_eq!(p, b);
/// ```
pub fn closest_point_on_segment(start: Point2, end: Point2, point: Point2) -> Point2 {
    let ap = point - start;
    let ab = end - start;
    let ab2 = ab.length_squared();
    if ab2 == 0.0 {
        return start;
    }

    let t = (ap.dot(ab) / ab2).clamp(0.0, 1.0);
    start + ab * t
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point2, p2: Point2) -> f64 {
    (p1 - p2).length()
}
