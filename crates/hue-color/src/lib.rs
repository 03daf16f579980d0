//! # hue-color
//!
//! Color conversions for networked RGB and white-spectrum lamps.
//!
//! Lamps are driven with CIE 1931 xy chromaticity plus brightness, hue and
//! saturation, or a white color temperature in mireds. Callers mostly
//! think in RGB or hex. This crate converts between all of them, keeping
//! chromaticities inside the triangle a lamp can reproduce.
//!
//! - **Conversion functions** - [`xy`], [`hsb`], [`temperature`], [`hex`],
//!   [`brightness`]: stateless, pure, safe to call from any thread
//! - **[`Color`]** - a value that remembers its original representation and
//!   caches the others as they are requested
//!
//! # Architecture
//!
//! ```text
//!               hue-color
//!                   |
//!        +----------+----------+
//!        |                     |
//!    hue-gamut            hue-transfer
//!        |
//!    hue-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use hue_color::{Color, Hsb, Rgb};
//!
//! let orange = Color::from_hsb(30, 100, 255);
//! assert_eq!(orange.to_rgb(), Rgb::new(255, 127, 0));
//!
//! // xy chromaticity and brightness for the bridge
//! let cie = orange.to_cie();
//! assert!(cie.x > 0.5);
//!
//! // Grays have no hue
//! let gray = Color::from_rgb(160, 160, 160);
//! assert_eq!(gray.to_hsb(), Hsb::new(None, 0, 160));
//!
//! // Color temperature is only known for colors created from one
//! assert_eq!(gray.to_ct(), None);
//! assert_eq!(Color::from_ct(200, 254).to_ct(), Some(200));
//! ```
//!
//! # Scales
//!
//! | Value                    | Range                    |
//! |--------------------------|--------------------------|
//! | RGB channels             | 0-255                    |
//! | CIE x, y                 | 0-1                      |
//! | CIE / CT brightness      | 0-254 (lamp scale)       |
//! | HSB hue                  | 0-359 degrees            |
//! | HSB saturation           | 0-100 percent            |
//! | HSB brightness           | 0-255 (largest channel)  |
//! | Temperature              | mireds, lamps 153-500    |
//!
//! [`xy::xy_brightness_to_rgb`] alone takes brightness as a 0-1 luminance
//! fraction; [`Color`] divides its 0-254 brightness by 254 before calling
//! it.
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the value types
//!
//! # Dependencies
//!
//! - [`hue-math`] - Points and matrices
//! - [`hue-gamut`] - Gamut triangle
//! - [`hue-transfer`] - sRGB gamma
//! - `hex` - Hex encoding
//! - [`tracing`] - Conversion events

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod kind;
mod model;
pub mod brightness;
pub mod hex;
pub mod hsb;
pub mod temperature;
pub mod xy;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use kind::ColorKind;
pub use model::{Cie, Hsb, MAX_BRIGHTNESS, Rgb};

// Re-export sub-crates for convenience
pub use hue_gamut as gamut;
pub use hue_math as math;
pub use hue_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Cie, Color, ColorError, ColorKind, ColorResult, Hsb, MAX_BRIGHTNESS, Rgb};

    pub use crate::hsb::{DeviceHsb, fit_into_range, hsb_to_rgb, rgb_to_hsb};
    pub use crate::temperature::{kelvin_to_mired, mired_to_kelvin, mired_to_rgb};
    pub use crate::xy::{rgb_to_xy, xy_brightness_to_rgb};

    pub use hue_gamut::{HUE_GAMUT, clamp_to_gamut, closest_in_gamut_point, is_in_gamut};
    pub use hue_math::Point2;
}
