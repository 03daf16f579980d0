//! Approximate lamp brightness of an RGB color.

use crate::Rgb;
use crate::model::MAX_BRIGHTNESS;

/// ITU-R BT.709 luma weights for red, green, blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Derives device brightness from gamma-encoded RGB.
///
/// The weighted channel sum is truncated and clamped to 1..=254: a lamp
/// never reports 0 (that is "off") and its scale tops out at 254.
///
/// # Example
///
/// ```rust
/// use hue_color::brightness::brightness_from_rgb;
/// use hue_color::Rgb;
///
/// assert_eq!(brightness_from_rgb(Rgb::BLACK), 1);
/// assert_eq!(brightness_from_rgb(Rgb::WHITE), 254);
/// assert_eq!(brightness_from_rgb(Rgb::new(255, 0, 0)), 54);
/// ```
pub fn brightness_from_rgb(rgb: Rgb) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let luma = wr * f64::from(rgb.red) + wg * f64::from(rgb.green) + wb * f64::from(rgb.blue);

    (luma as i32).clamp(1, i32::from(MAX_BRIGHTNESS)) as u8
}
