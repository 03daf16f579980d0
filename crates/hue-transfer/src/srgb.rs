//! sRGB gamma (IEC 61966-2-1).
//!
//! A straight segment of slope [`SLOPE`] near black, then a 2.4 power curve
//! offset by [`OFFSET`]. Channel values are nominally in [0, 1]; anything
//! outside goes through the same formulas. The xy -> RGB path depends on
//! that: slightly negative linear channels stay on the straight segment and
//! are clipped by the caller.

/// Exponent of the curved segment.
pub const GAMMA: f64 = 2.4;

/// Slope of the straight segment.
pub const SLOPE: f64 = 12.92;

/// Offset of the curved segment.
pub const OFFSET: f64 = 0.055;

/// Encoded value where the curve starts.
pub const ENCODED_KNEE: f64 = 0.04045;

/// Linear value where the curve starts.
pub const LINEAR_KNEE: f64 = 0.0031308;

/// Decodes an sRGB channel to linear light (EOTF).
///
/// ```rust
/// use hue_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(encoded: f64) -> f64 {
    if encoded > ENCODED_KNEE {
        ((encoded + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    } else {
        encoded / SLOPE
    }
}

/// Encodes a linear channel as sRGB (OETF).
#[inline]
pub fn oetf(linear: f64) -> f64 {
    if linear > LINEAR_KNEE {
        (1.0 + OFFSET) * linear.powf(GAMMA.recip()) - OFFSET
    } else {
        linear * SLOPE
    }
}

/// [`eotf`] on each channel.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// [`oetf`] on each channel.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}
