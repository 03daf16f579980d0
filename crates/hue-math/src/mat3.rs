//! Color matrices for RGB/XYZ transforms.
//!
//! Conversion matrices are published row by row (the way they appear in
//! color-science references) and applied to `[r, g, b]` or `[X, Y, Z]`
//! column triplets. [`Mat3`] keeps that row-major constructor while storing
//! a column-major [`DMat3`] so the products run through glam.
//!
//! ```rust
//! use hue_math::Mat3;
//!
//! let swap_rg = Mat3::from_rows([
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! assert_eq!(swap_rg * [0.25, 0.5, 1.0], [0.5, 0.25, 1.0]);
//! ```

use std::ops::Mul;

use glam::{DMat3, DVec3};

/// Below this determinant a matrix is treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 3x3 matrix that maps one tristimulus triplet to another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat3(DMat3);

impl Mat3 {
    /// Identity: leaves every triplet unchanged.
    pub const IDENTITY: Self = Self(DMat3::IDENTITY);

    /// Builds a matrix from its rows.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(DMat3::from_cols(
            DVec3::new(r0[0], r1[0], r2[0]),
            DVec3::new(r0[1], r1[1], r2[1]),
            DVec3::new(r0[2], r1[2], r2[2]),
        ))
    }

    /// Row `i` (0, 1 or 2).
    ///
    /// # Panics
    ///
    /// If `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 3] {
        self.0.row(i).to_array()
    }

    /// The three rows, in the same layout [`from_rows`](Self::from_rows)
    /// takes.
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Inverse, or `None` when the matrix is (nearly) singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    /// Applies the matrix to a triplet.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        (self.0 * DVec3::from_array(v)).to_array()
    }

    /// The underlying glam matrix (column-major).
    #[inline]
    pub const fn to_glam(self) -> DMat3 {
        self.0
    }

    /// Wraps a glam matrix.
    #[inline]
    pub const fn from_glam(m: DMat3) -> Self {
        Self(m)
    }
}

impl Mul<[f64; 3]> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.transform(rhs)
    }
}

/// Composition: `(a * b) * v == a * (b * v)`.
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}
