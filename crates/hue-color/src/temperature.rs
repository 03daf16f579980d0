//! Color temperature conversions.
//!
//! Lamps take white points in mireds (micro reciprocal degrees,
//! `1_000_000 / kelvin`). Converting a temperature to RGB uses Tanner
//! Helland's curve fit of black-body colors. The reverse direction is not
//! offered: most RGB colors have no meaningful temperature.

use crate::Rgb;

/// Coolest white a lamp supports (~6500K).
pub const MIRED_MIN: u16 = 153;

/// Warmest white a lamp supports (2000K).
pub const MIRED_MAX: u16 = 500;

/// Converts mireds to kelvin. Zero maps to zero.
#[inline]
pub fn mired_to_kelvin(mired: u32) -> u32 {
    1_000_000u32.checked_div(mired).unwrap_or(0)
}

/// Converts kelvin to mireds. Zero maps to zero.
#[inline]
pub fn kelvin_to_mired(kelvin: u32) -> u32 {
    1_000_000u32.checked_div(kelvin).unwrap_or(0)
}

/// Clamps a temperature to the supported [`MIRED_MIN`]..=[`MIRED_MAX`] range.
#[inline]
pub fn clamp_mired(mired: u16) -> u16 {
    mired.clamp(MIRED_MIN, MIRED_MAX)
}

#[inline]
fn channel(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.round().clamp(0.0, 255.0) as u8
    }
}

/// Approximates the RGB color of a black body at `mired`.
///
/// Computed on `temp = kelvin / 100`; red and green switch formulas at
/// 6600K, blue is saturated from there up.
///
/// # Example
///
/// ```rust
/// use hue_color::temperature::mired_to_rgb;
/// use hue_color::Rgb;
///
/// assert_eq!(mired_to_rgb(200.0), Rgb::new(255, 228, 206));
/// ```
pub fn mired_to_rgb(mired: f64) -> Rgb {
    let kelvin = 1_000_000.0 / mired;
    let temp = kelvin / 100.0;

    let red = if temp < 66.0 {
        255.0
    } else {
        329.698727446 * (temp - 60.0).powf(-0.1332047592)
    };

    let green = if temp < 66.0 {
        99.4708025861 * temp.ln() - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.5177312231 * (temp - 10.0).ln() - 305.0447927307
    };

    Rgb::new(channel(red), channel(green), channel(blue))
}
