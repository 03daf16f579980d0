//! # hue-transfer
//!
//! Transfer functions between gamma-encoded channel values and linear light.
//!
//! Lighting bridges speak linear CIE XYZ, while RGB inputs are
//! gamma-encoded. The conversions in `hue-color` decode with the sRGB
//! EOTF on the way in and re-encode with the sRGB OETF on the way out.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Usage
//!
//! ```rust
//! use hue_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `hue-color` - RGB <-> xy conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
