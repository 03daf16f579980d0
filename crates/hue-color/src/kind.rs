//! Representation tags.

use std::fmt;
use std::str::FromStr;

use crate::{ColorError, ColorResult};

/// The representation a [`Color`](crate::Color) was created from.
///
/// Displayed and parsed as the lowercase tags `rgb`, `cie`, `hsb`, `ct`.
///
/// # Example
///
/// ```rust
/// use hue_color::ColorKind;
///
/// let kind: ColorKind = "CIE".parse().unwrap();
/// assert_eq!(kind, ColorKind::Cie);
/// assert_eq!(kind.to_string(), "cie");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorKind {
    /// Red, green, blue channels 0-255.
    Rgb,
    /// CIE 1931 xy chromaticity plus device brightness.
    Cie,
    /// Hue, saturation, brightness.
    Hsb,
    /// Color temperature in mireds.
    Ct,
}

impl ColorKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Rgb, Self::Cie, Self::Hsb, Self::Ct];

    /// Lowercase tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Cie => "cie",
            Self::Hsb => "hsb",
            Self::Ct => "ct",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKind {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::InvalidColorKind(s.to_string()))
    }
}
