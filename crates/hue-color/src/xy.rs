//! RGB <-> CIE xy conversions.
//!
//! Both directions go through CIE XYZ and clamp the chromaticity into
//! [`HUE_GAMUT`](hue_gamut::HUE_GAMUT) so the result is something a lamp
//! can actually show.
//!
//! ```text
//! rgb (0-1) --eotf--> linear --RGB_TO_XYZ--> XYZ --> xy --clamp--> xy
//! xy --clamp--> xyY --> XYZ --XYZ_TO_RGB--> linear --oetf--> rgb (0-255)
//! ```
//!
//! The two matrices are not inverses of each other, so the path is not
//! lossless even for in-gamut colors.

use hue_gamut::clamp_to_gamut;
use hue_math::{Mat3, Point2};
use hue_transfer::srgb;

use crate::Rgb;

/// Gamma-decoded RGB to XYZ.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4360747, 0.3850649, 0.0930804],
    [0.2225045, 0.7168786, 0.0406169],
    [0.0139322, 0.0971045, 0.7141733],
]);

/// XYZ to linear Wide RGB D65.
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [1.612, -0.203, -0.302],
    [-0.509, 1.412, 0.066],
    [0.026, -0.072, 0.962],
]);

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Converts RGB channels to the closest reproducible xy chromaticity.
///
/// Channels are fractions in [0, 1], not 0-255. A chromaticity that is
/// undefined (black, where X + Y + Z is zero) becomes (0, 0) before
/// clamping, which lands on the blue vertex.
///
/// # Example
///
/// ```rust
/// use hue_color::xy::rgb_to_xy;
/// use hue_gamut::is_in_gamut;
///
/// let p = rgb_to_xy(1.0, 0.0, 0.0);
/// assert!(is_in_gamut(p));
/// assert!(p.x > 0.6);
/// ```
pub fn rgb_to_xy(red: f64, green: f64, blue: f64) -> Point2 {
    let linear = srgb::eotf_rgb([red, green, blue]);
    let [x, y, z] = RGB_TO_XYZ * linear;
    let sum = x + y + z;

    let point = Point2::new(finite_or_zero(x / sum), finite_or_zero(y / sum));
    clamp_to_gamut(point)
}

/// Converts an xy chromaticity and luminance to RGB.
///
/// `brightness` is the relative luminance Y as a fraction in [0, 1].
/// Negative channels are clipped to zero; if any channel exceeds one, all
/// three are divided by the largest so the hue survives. Channels are
/// truncated, not rounded, to 0-255.
///
/// # Example
///
/// ```rust
/// use hue_color::xy::xy_brightness_to_rgb;
/// use hue_color::Rgb;
///
/// assert_eq!(xy_brightness_to_rgb(0.3, 0.3, 0.0), Rgb::BLACK);
/// let red = xy_brightness_to_rgb(0.675, 0.322, 1.0);
/// assert_eq!(red.red, 255);
/// ```
pub fn xy_brightness_to_rgb(x: f64, y: f64, brightness: f64) -> Rgb {
    let point = clamp_to_gamut(Point2::new(finite_or_zero(x), finite_or_zero(y)));

    let luminance = finite_or_zero(brightness);
    let scale = luminance / point.y;
    let xyz = [
        scale * point.x,
        luminance,
        scale * (1.0 - point.x - point.y),
    ];

    let mut rgb = srgb::oetf_rgb(XYZ_TO_RGB * xyz).map(|c| c.max(0.0));

    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max > 1.0 {
        rgb = rgb.map(|c| c / max);
    }

    let [red, green, blue] = rgb.map(|c| (c * 255.0).floor() as u8);
    Rgb::new(red, green, blue)
}
