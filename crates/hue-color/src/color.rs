//! Lazily converted color value.
//!
//! A [`Color`] remembers the representation it was created from and
//! computes the others on first request. Each result is cached, so repeated
//! accessor calls return identical values without recomputing.
//!
//! # Cost
//!
//! - Construction: O(1), no conversion.
//! - First access per representation: one conversion.
//! - Later accesses: O(1).
//!
//! # Conversion Routes
//!
//! | From \ To | RGB                  | CIE                      | HSB            |
//! |-----------|----------------------|--------------------------|----------------|
//! | RGB       | stored               | rgb_to_xy + brightness   | rgb_to_hsb     |
//! | CIE       | xy_brightness_to_rgb | stored                   | via RGB        |
//! | HSB       | hsb_to_rgb           | via RGB                  | stored         |
//! | CT        | mired_to_rgb, dimmed | mired_to_rgb + rgb_to_xy | via RGB        |
//!
//! Color temperature is one-way: [`Color::to_ct`] is `None` unless the color
//! was created with [`Color::from_ct`].
//!
//! # Thread Safety
//!
//! Caches are [`OnceLock`] cells. A `Color` can be shared between threads;
//! concurrent first accesses run the conversion once.

use std::sync::OnceLock;

use tracing::trace;

use crate::brightness::brightness_from_rgb;
use crate::hex::{hex_to_rgb, rgb_to_hex};
use crate::hsb::{hsb_to_rgb, rgb_to_hsb};
use crate::model::MAX_BRIGHTNESS;
use crate::temperature::mired_to_rgb;
use crate::xy::{rgb_to_xy, xy_brightness_to_rgb};
use crate::{Cie, ColorKind, ColorResult, Hsb, Rgb};

/// The values a color was created from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Original {
    Rgb(Rgb),
    Cie(Cie),
    Hsb(Hsb),
    Ct { mired: u16, brightness: u8 },
}

impl Original {
    fn kind(&self) -> ColorKind {
        match self {
            Self::Rgb(_) => ColorKind::Rgb,
            Self::Cie(_) => ColorKind::Cie,
            Self::Hsb(_) => ColorKind::Hsb,
            Self::Ct { .. } => ColorKind::Ct,
        }
    }
}

/// A color with memoized conversions between representations.
///
/// # Example
///
/// ```rust
/// use hue_color::{Color, ColorKind, Rgb};
///
/// let color = Color::from_hex("#1040ff").unwrap();
/// assert_eq!(color.original_kind(), ColorKind::Rgb);
/// assert_eq!(color.to_rgb(), Rgb::new(16, 64, 255));
///
/// let cie = color.to_cie();
/// assert_eq!(cie.brightness, 67);
/// assert_eq!(color.to_ct(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Color {
    original: Original,
    rgb: OnceLock<Rgb>,
    cie: OnceLock<Cie>,
    hsb: OnceLock<Hsb>,
}

impl Color {
    fn new(original: Original) -> Self {
        // The original representation's cache starts out filled
        let (rgb, cie, hsb) = match original {
            Original::Rgb(rgb) => (OnceLock::from(rgb), OnceLock::new(), OnceLock::new()),
            Original::Cie(cie) => (OnceLock::new(), OnceLock::from(cie), OnceLock::new()),
            Original::Hsb(hsb) => (OnceLock::new(), OnceLock::new(), OnceLock::from(hsb)),
            Original::Ct { .. } => (OnceLock::new(), OnceLock::new(), OnceLock::new()),
        };

        Self {
            original,
            rgb,
            cie,
            hsb,
        }
    }

    /// Creates a color from RGB channels, 0-255.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(Original::Rgb(Rgb::new(red, green, blue)))
    }

    /// Creates a color from a CIE xy chromaticity and device brightness.
    ///
    /// `brightness` is on the lamp scale 0-254 (larger values saturate).
    /// It is divided by 254 to get the luminance fraction that
    /// [`xy_brightness_to_rgb`] expects.
    pub fn from_cie(x: f64, y: f64, brightness: u8) -> Self {
        Self::new(Original::Cie(Cie::new(x, y, brightness)))
    }

    /// Creates a color from a hex string such as `"#ff00ff"`.
    ///
    /// The result is an RGB-origin color.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`](crate::ColorError::InvalidHex) if the
    /// string holds fewer than six hex digits.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self::new(Original::Rgb(rgb)))
    }

    /// Creates a color from hue (degrees, wraps), saturation (0-100, larger
    /// values saturate) and brightness (0-255).
    pub fn from_hsb(hue: i32, saturation: u8, brightness: u8) -> Self {
        let hue = hue.rem_euclid(360) as u16;
        Self::new(Original::Hsb(Hsb::new(Some(hue), saturation, brightness)))
    }

    /// Creates a color from a temperature in mireds and device brightness
    /// (0-254, larger values saturate).
    pub fn from_ct(mired: u16, brightness: u8) -> Self {
        Self::new(Original::Ct {
            mired,
            brightness: brightness.min(MAX_BRIGHTNESS),
        })
    }

    /// The representation this color was created from.
    pub fn original_kind(&self) -> ColorKind {
        self.original.kind()
    }

    /// RGB channels, 0-255.
    ///
    /// From CIE the conversion is approximate. From a color temperature the
    /// black-body color is dimmed by `brightness / 254`.
    pub fn to_rgb(&self) -> Rgb {
        *self.rgb.get_or_init(|| {
            trace!(from = %self.original_kind(), to = "rgb", "converting color");
            match self.original {
                Original::Rgb(rgb) => rgb,
                Original::Cie(cie) => {
                    xy_brightness_to_rgb(cie.x, cie.y, cie.relative_brightness())
                }
                Original::Hsb(hsb) => match hsb.hue {
                    Some(hue) => hsb_to_rgb(
                        f64::from(hue),
                        f64::from(hsb.saturation),
                        f64::from(hsb.brightness),
                    ),
                    None => Rgb::gray(hsb.brightness),
                },
                Original::Ct { mired, brightness } => {
                    let dim = f64::from(brightness) / f64::from(MAX_BRIGHTNESS);
                    let [r, g, b] = mired_to_rgb(f64::from(mired))
                        .to_array()
                        .map(|c| (f64::from(c) * dim).round() as u8);
                    Rgb::new(r, g, b)
                }
            }
        })
    }

    /// Six lowercase hex digits, e.g. `"1040ff"`.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.to_rgb())
    }

    /// CIE xy chromaticity, clamped into the lamp gamut, and brightness
    /// 0-254.
    ///
    /// From RGB and HSB the brightness is [`brightness_from_rgb`] (1-254).
    /// From a color temperature the given brightness is kept.
    pub fn to_cie(&self) -> Cie {
        *self.cie.get_or_init(|| {
            trace!(from = %self.original_kind(), to = "cie", "converting color");
            match self.original {
                Original::Cie(cie) => cie,
                Original::Ct { mired, brightness } => {
                    let [r, g, b] = mired_to_rgb(f64::from(mired)).to_unit();
                    let xy = rgb_to_xy(r, g, b);
                    Cie::new(xy.x, xy.y, brightness)
                }
                Original::Rgb(_) | Original::Hsb(_) => {
                    let rgb = self.to_rgb();
                    let [r, g, b] = rgb.to_unit();
                    let xy = rgb_to_xy(r, g, b);
                    Cie::new(xy.x, xy.y, brightness_from_rgb(rgb))
                }
            }
        })
    }

    /// Hue (degrees, `None` for grays), saturation (0-100) and brightness
    /// (0-255).
    pub fn to_hsb(&self) -> Hsb {
        *self.hsb.get_or_init(|| {
            trace!(from = %self.original_kind(), to = "hsb", "converting color");
            match self.original {
                Original::Hsb(hsb) => hsb,
                Original::Rgb(_) | Original::Cie(_) | Original::Ct { .. } => {
                    rgb_to_hsb(self.to_rgb())
                }
            }
        })
    }

    /// Temperature in mireds, only for colors created with
    /// [`from_ct`](Self::from_ct).
    pub fn to_ct(&self) -> Option<u16> {
        match self.original {
            Original::Ct { mired, .. } => Some(mired),
            Original::Rgb(_) | Original::Cie(_) | Original::Hsb(_) => None,
        }
    }
}

impl PartialEq for Color {
    /// Colors are equal when created from the same representation with the
    /// same values; cache state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(Original::Rgb(rgb))
    }
}

impl From<Cie> for Color {
    fn from(cie: Cie) -> Self {
        Self::new(Original::Cie(cie))
    }
}

impl From<Hsb> for Color {
    fn from(hsb: Hsb) -> Self {
        Self::new(Original::Hsb(hsb))
    }
}
