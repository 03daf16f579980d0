//! # hue-math
//!
//! Math primitives for lighting color conversion.
//!
//! - [`Point2`] - 2D point/vector for CIE xy chromaticity coordinates
//! - [`cross`], [`closest_point_on_segment`], [`distance`] - planar geometry
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//!
//! # Design
//!
//! All values are `f64`. Matrices are written row by row and multiply
//! column triplets (`result = matrix * [r, g, b]`); storage and products
//! are delegated to [`glam`]'s `DMat3`.
//!
//! `Point2` converts to and from `DVec2` for callers that already use glam.
//!
//! # Usage
//!
//! ```rust
//! use hue_math::{Point2, closest_point_on_segment, distance};
//!
//! let a = Point2::new(0.0, 0.0);
//! let b = Point2::new(1.0, 0.0);
//! let p = Point2::new(0.5, 1.0);
//!
//! let on_segment = closest_point_on_segment(a, b, p);
//! assert_eq!(on_segment, Point2::new(0.5, 0.0));
//! assert_eq!(distance(p, on_segment), 1.0);
//! ```
//!
//! # Used By
//!
//! - `hue-gamut` - gamut triangle membership and clamping
//! - `hue-color` - RGB/XYZ matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod point;

pub use mat3::*;
pub use point::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec2};
}
