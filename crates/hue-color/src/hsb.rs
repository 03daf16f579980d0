//! RGB <-> HSB conversions.
//!
//! HSB here uses degrees for hue, percent for saturation and the 0-255
//! channel scale for brightness, so `brightness` equals the largest RGB
//! channel. [`DeviceHsb`] converts to the scales a bridge expects.
//!
//! # Example
//!
//! ```rust
//! use hue_color::hsb::{hsb_to_rgb, rgb_to_hsb};
//! use hue_color::{Hsb, Rgb};
//!
//! let orange = hsb_to_rgb(30.0, 100.0, 255.0);
//! assert_eq!(orange, Rgb::new(255, 127, 0));
//! assert_eq!(rgb_to_hsb(orange), Hsb::new(Some(30), 100, 255));
//! ```

use crate::model::MAX_BRIGHTNESS;
use crate::{Hsb, Rgb};

/// Largest hue value on the bridge scale.
pub const MAX_DEVICE_HUE: u16 = 65535;

/// Wraps `n` into `[0, max)`.
///
/// Negative and overflowing values wrap around, so `-10` becomes `350`
/// and `370` becomes `10` for `max = 360`.
///
/// # Example
///
/// ```rust
/// use hue_color::hsb::fit_into_range;
///
/// assert_eq!(fit_into_range(-10.0, 360.0), 350.0);
/// assert_eq!(fit_into_range(370.0, 360.0), 10.0);
/// ```
#[inline]
pub fn fit_into_range(n: f64, max: f64) -> f64 {
    let r = n.rem_euclid(max);
    // rem_euclid may round up to `max` for tiny negative inputs
    if r >= max { 0.0 } else { r }
}

/// Converts RGB to HSB.
///
/// Black, white and every gray have no hue and get `hue: None`.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let [r, g, b] = rgb.to_array().map(f64::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max <= 0.0 {
        return Hsb::new(None, 0, 0);
    }
    if min >= 255.0 {
        return Hsb::new(None, 0, 255);
    }

    let brightness = max as u8;
    if delta == 0.0 {
        return Hsb::new(None, 0, brightness);
    }
    let saturation = (delta / max * 100.0).round() as u8;

    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let hue = fit_into_range((sector * 60.0).round(), 360.0);
    Hsb::new(Some(hue as u16), saturation, brightness)
}

/// Converts HSB to RGB.
///
/// `hue` is in degrees and wraps, `saturation` is 0-100 and `brightness`
/// 0-255. Channels are truncated toward zero, matching
/// [`xy_brightness_to_rgb`](crate::xy::xy_brightness_to_rgb).
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let v = brightness.clamp(0.0, 255.0);
    if saturation <= 0.0 {
        return Rgb::gray(v as u8);
    }

    let h = fit_into_range(hue, 360.0) / 60.0;
    let s = saturation.min(100.0) / 100.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(r as u8, g as u8, b as u8)
}

/// HSB on the scales a bridge uses.
///
/// | Field      | Range     |
/// |------------|-----------|
/// | hue        | 0-65535   |
/// | saturation | 0-254     |
/// | brightness | 0-254     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceHsb {
    /// Hue, full circle over 0-65535
    pub hue: u16,
    /// Saturation, 0-254
    pub saturation: u8,
    /// Brightness, 0-254
    pub brightness: u8,
}

#[inline]
fn rescale(value: f64, from: f64, to: f64) -> f64 {
    (value * to / from).round()
}

impl From<Hsb> for DeviceHsb {
    /// Achromatic colors map to hue 0 and saturation 0.
    fn from(hsb: Hsb) -> Self {
        let max_brightness = f64::from(MAX_BRIGHTNESS);
        let (hue, saturation) = match hsb.hue {
            Some(h) => (
                rescale(f64::from(h), 360.0, f64::from(MAX_DEVICE_HUE)),
                rescale(f64::from(hsb.saturation), 100.0, max_brightness),
            ),
            None => (0.0, 0.0),
        };

        Self {
            hue: hue as u16,
            saturation: saturation as u8,
            brightness: rescale(f64::from(hsb.brightness), 255.0, max_brightness) as u8,
        }
    }
}

impl From<DeviceHsb> for Hsb {
    fn from(device: DeviceHsb) -> Self {
        let max_brightness = f64::from(MAX_BRIGHTNESS);
        let hue = rescale(f64::from(device.hue), f64::from(MAX_DEVICE_HUE), 360.0);

        Hsb::new(
            Some(fit_into_range(hue, 360.0) as u16),
            rescale(f64::from(device.saturation), max_brightness, 100.0) as u8,
            rescale(f64::from(device.brightness), max_brightness, 255.0) as u8,
        )
    }
}
