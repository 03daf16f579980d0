//! Plain value types for each representation.
//!
//! | Type    | Fields                               | Scale                          |
//! |---------|--------------------------------------|--------------------------------|
//! | [`Rgb`] | red, green, blue                     | 0-255                          |
//! | [`Cie`] | x, y, brightness                     | xy in [0, 1], brightness 0-254 |
//! | [`Hsb`] | hue, saturation, brightness          | 0-359 degrees, 0-100 %, 0-255  |
//!
//! Bridge-native scales (hue 0-65535 and so on) live in
//! [`DeviceHsb`](crate::hsb::DeviceHsb).

use hue_math::Point2;

/// Largest brightness a lamp accepts.
pub const MAX_BRIGHTNESS: u8 = 254;

/// Gamma-encoded RGB, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Gray with all channels set to `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Channels as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Channels scaled to [0, 1].
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        self.to_array().map(|c| f64::from(c) / 255.0)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// CIE 1931 chromaticity plus device brightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cie {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
    /// Brightness, 0 to [`MAX_BRIGHTNESS`]
    pub brightness: u8,
}

impl Cie {
    /// Creates a CIE value; brightness saturates at [`MAX_BRIGHTNESS`].
    #[inline]
    pub fn new(x: f64, y: f64, brightness: u8) -> Self {
        Self {
            x,
            y,
            brightness: brightness.min(MAX_BRIGHTNESS),
        }
    }

    /// The chromaticity as a point.
    #[inline]
    pub const fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Brightness as a 0-1 fraction of [`MAX_BRIGHTNESS`].
    #[inline]
    pub fn relative_brightness(&self) -> f64 {
        f64::from(self.brightness) / f64::from(MAX_BRIGHTNESS)
    }
}

/// Hue, saturation and brightness.
///
/// `hue` is `None` for achromatic colors (black, white and grays), which is
/// different from `Some(0)` (red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// Hue in degrees, 0-359
    pub hue: Option<u16>,
    /// Saturation in percent, 0-100
    pub saturation: u8,
    /// Brightness on the channel scale, 0-255
    pub brightness: u8,
}

impl Hsb {
    /// Creates an HSB value. Saturation saturates at 100 and is forced to
    /// 0 when there is no hue.
    #[inline]
    pub fn new(hue: Option<u16>, saturation: u8, brightness: u8) -> Self {
        let saturation = if hue.is_some() { saturation.min(100) } else { 0 };
        Self {
            hue: hue.map(|h| h % 360),
            saturation,
            brightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversions() {
        let rgb = Rgb::from([16, 64, 255]);
        assert_eq!(rgb.green, 64);
        assert_eq!(<[u8; 3]>::from(rgb), [16, 64, 255]);
        assert_eq!(Rgb::gray(7), Rgb::new(7, 7, 7));
        assert_eq!(Rgb::WHITE.to_unit(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cie_brightness_saturates() {
        let cie = Cie::new(0.3, 0.3, 255);
        assert_eq!(cie.brightness, MAX_BRIGHTNESS);
        assert_eq!(cie.relative_brightness(), 1.0);
        assert_eq!(cie.xy(), Point2::new(0.3, 0.3));
    }

    #[test]
    fn test_hsb_normalizes() {
        let hsb = Hsb::new(Some(370), 150, 10);
        assert_eq!(hsb, Hsb::new(Some(10), 100, 10));
        assert_eq!(Hsb::new(None, 0, 0).hue, None);
    }

    #[test]
    fn test_hsb_without_hue_is_unsaturated() {
        assert_eq!(Hsb::new(None, 50, 200).saturation, 0);
        assert_eq!(Hsb::new(Some(0), 50, 200).saturation, 50);
    }
}
