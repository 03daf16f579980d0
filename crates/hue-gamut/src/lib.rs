//! # hue-gamut
//!
//! The triangle of CIE 1931 xy chromaticities a lamp can reproduce, and the
//! operations that test and enforce it.
//!
//! # What is a Gamut?
//!
//! Each lamp mixes three emitters. Every color it can show is a blend of
//! those three primaries, so in xy space the reachable colors form the
//! triangle spanned by the primaries' chromaticities. A chromaticity
//! outside the triangle is replaced by the nearest point on its border.
//!
//! # Usage
//!
//! ```rust
//! use hue_gamut::{HUE_GAMUT, RED_VERTEX};
//! use hue_math::Point2;
//!
//! assert!(HUE_GAMUT.contains(RED_VERTEX));
//!
//! let outside = Point2::new(0.0, 0.0);
//! assert!(!HUE_GAMUT.contains(outside));
//!
//! let clamped = HUE_GAMUT.clamp(outside);
//! assert!(HUE_GAMUT.contains(clamped));
//! ```
//!
//! # Dependencies
//!
//! - [`hue-math`] - Point and segment geometry
//! - [`tracing`] - Debug events when a point gets clamped
//!
//! # Used By
//!
//! - `hue-color` - RGB <-> xy conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hue_math::{Point2, closest_point_on_segment, cross, distance};
use tracing::debug;

/// Slack allowed by [`Gamut::contains`].
///
/// Points projected onto an edge by [`Gamut::closest_point`] carry rounding
/// error of a few ulps and must still test as inside.
pub const GAMUT_EPSILON: f64 = 1e-9;

/// Red primary of the lamp gamut.
pub const RED_VERTEX: Point2 = Point2::new(0.675, 0.322);

/// Green (lime) primary of the lamp gamut.
pub const LIME_VERTEX: Point2 = Point2::new(0.4091, 0.518);

/// Blue primary of the lamp gamut.
pub const BLUE_VERTEX: Point2 = Point2::new(0.167, 0.04);

/// The gamut used for every conversion in `hue-color`.
pub const HUE_GAMUT: Gamut = Gamut::new(RED_VERTEX, LIME_VERTEX, BLUE_VERTEX);

/// A triangular gamut in CIE xy space.
///
/// # Example
///
/// ```rust
/// use hue_gamut::Gamut;
/// use hue_math::Point2;
///
/// let unit = Gamut::new(
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.0, 0.0),
/// );
/// assert!(unit.contains(Point2::new(0.25, 0.25)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    /// Red primary chromaticity
    pub red: Point2,
    /// Green primary chromaticity
    pub lime: Point2,
    /// Blue primary chromaticity
    pub blue: Point2,
}

impl Gamut {
    /// Creates a gamut from its three primaries.
    ///
    /// The vertices must not be collinear; a degenerate triangle makes
    /// [`contains`](Self::contains) divide by zero.
    #[inline]
    pub const fn new(red: Point2, lime: Point2, blue: Point2) -> Self {
        Self { red, lime, blue }
    }

    /// The vertices in red, lime, blue order.
    #[inline]
    pub const fn vertices(&self) -> [Point2; 3] {
        [self.red, self.lime, self.blue]
    }

    /// The edges as `(start, end)` segments.
    ///
    /// The order (red-lime, blue-red, lime-blue) decides ties in
    /// [`closest_point`](Self::closest_point).
    #[inline]
    pub const fn edges(&self) -> [(Point2, Point2); 3] {
        [
            (self.red, self.lime),
            (self.blue, self.red),
            (self.lime, self.blue),
        ]
    }

    /// Tests whether `point` lies inside or on the triangle.
    ///
    /// Solves `point = red + s * (lime - red) + t * (blue - red)` and checks
    /// `s >= 0`, `t >= 0` and `s + t <= 1`, each within [`GAMUT_EPSILON`].
    pub fn contains(&self, point: Point2) -> bool {
        let v1 = self.lime - self.red;
        let v2 = self.blue - self.red;
        let q = point - self.red;

        let denom = cross(v1, v2);
        let s = cross(q, v2) / denom;
        let t = cross(v1, q) / denom;

        s >= -GAMUT_EPSILON && t >= -GAMUT_EPSILON && s + t <= 1.0 + GAMUT_EPSILON
    }

    /// Finds the point on the triangle's border closest to `point`.
    ///
    /// Meant for points outside the gamut; an inside point is still
    /// projected onto the nearest edge. On equal distances the earlier edge
    /// in [`edges`](Self::edges) wins.
    pub fn closest_point(&self, point: Point2) -> Point2 {
        let mut edges = self.edges().into_iter();
        let (start, end) = edges.next().unwrap_or((self.red, self.lime));

        let mut closest = closest_point_on_segment(start, end, point);
        let mut lowest = distance(point, closest);

        for (start, end) in edges {
            let candidate = closest_point_on_segment(start, end, point);
            let d = distance(point, candidate);
            if d < lowest {
                lowest = d;
                closest = candidate;
            }
        }

        closest
    }

    /// Returns `point` if the gamut contains it, otherwise the closest
    /// reproducible point.
    pub fn clamp(&self, point: Point2) -> Point2 {
        if self.contains(point) {
            point
        } else {
            let clamped = self.closest_point(point);
            debug!(
                x = point.x,
                y = point.y,
                clamped_x = clamped.x,
                clamped_y = clamped.y,
                "chromaticity outside gamut"
            );
            clamped
        }
    }
}

impl Default for Gamut {
    fn default() -> Self {
        HUE_GAMUT
    }
}

/// Tests `point` against [`HUE_GAMUT`].
#[inline]
pub fn is_in_gamut(point: Point2) -> bool {
    HUE_GAMUT.contains(point)
}

/// Closest point on the border of [`HUE_GAMUT`].
#[inline]
pub fn closest_in_gamut_point(point: Point2) -> Point2 {
    HUE_GAMUT.closest_point(point)
}

/// Clamps `point` into [`HUE_GAMUT`].
#[inline]
pub fn clamp_to_gamut(point: Point2) -> Point2 {
    HUE_GAMUT.clamp(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertices_are_inside() {
        for v in HUE_GAMUT.vertices() {
            assert!(is_in_gamut(v), "vertex {:?} should be in gamut", v);
        }
    }

    #[test]
    fn test_far_points_are_outside() {
        assert!(!is_in_gamut(Point2::new(0.0, 0.0)));
        assert!(!is_in_gamut(Point2::new(1.0, 1.0)));
        assert!(!is_in_gamut(Point2::new(0.1, 0.8)));
    }

    #[test]
    fn test_centroid_and_edge_midpoint_inside() {
        let [r, l, b] = HUE_GAMUT.vertices();
        let centroid = Point2::new((r.x + l.x + b.x) / 3.0, (r.y + l.y + b.y) / 3.0);
        assert!(is_in_gamut(centroid));

        let midpoint = (r + l) * 0.5;
        assert!(is_in_gamut(midpoint));
    }

    #[test]
    fn test_slack_is_far_below_a_micro_step() {
        let edge = BLUE_VERTEX - RED_VERTEX;
        // Perpendicular to red-blue, pointing away from lime
        let outward = Point2::new(-edge.y, edge.x) * (1.0 / edge.length());
        let midpoint = (RED_VERTEX + BLUE_VERTEX) * 0.5;

        assert!(is_in_gamut(midpoint));
        assert!(is_in_gamut(midpoint - outward * 1e-6));
        assert!(!is_in_gamut(midpoint + outward * 1e-6));
    }

    #[test]
    fn test_closest_point_to_vertex_regions() {
        // Past the red corner both adjacent edges clamp to the vertex
        assert_eq!(closest_in_gamut_point(Point2::new(0.8, 0.3)), RED_VERTEX);
        assert_eq!(closest_in_gamut_point(Point2::new(0.0, 0.0)), BLUE_VERTEX);
        assert_eq!(closest_in_gamut_point(Point2::new(0.3, 0.6)), LIME_VERTEX);
    }

    #[test]
    fn test_closest_point_on_edge() {
        let p = closest_in_gamut_point(Point2::new(1.0, 1.0));
        assert_relative_eq!(p.x, 0.561760990611976, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.40547065001900223, epsilon = 1e-9);
        assert!(is_in_gamut(p));
    }

    #[test]
    fn test_closest_point_is_always_in_gamut() {
        for i in 0..=40 {
            for j in 0..=40 {
                let p = Point2::new(i as f64 / 40.0, j as f64 / 40.0);
                if !is_in_gamut(p) {
                    let c = closest_in_gamut_point(p);
                    assert!(is_in_gamut(c), "{:?} clamped to {:?} is outside", p, c);
                }
            }
        }
    }

    #[test]
    fn test_clamp_keeps_inside_points() {
        let p = Point2::new(0.4, 0.3);
        assert!(is_in_gamut(p));
        assert_eq!(clamp_to_gamut(p), p);
    }

    #[test]
    fn test_custom_gamut_tie_break() {
        // (2, -1) projects onto the shared red vertex from both adjacent
        // edges; the first edge's candidate is kept.
        let g = Gamut::new(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        );
        let p = g.closest_point(Point2::new(2.0, -1.0));
        assert_eq!(p, Point2::new(1.0, 0.0));
        assert_eq!(Gamut::default(), HUE_GAMUT);
    }
}
