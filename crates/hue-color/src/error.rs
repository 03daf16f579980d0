//! Error types for color operations.
//!
//! Conversions themselves cannot fail: every formula is closed-form and
//! NaN intermediates are normalized to zero. Errors only come from parsing
//! caller-supplied text.
//!
//! "No value" results (the hue of a gray, the color temperature of a color
//! that was not created from one) are `None`, not errors.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Representation tag is not one of `rgb`, `cie`, `hsb`, `ct`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hue_color::{ColorError, ColorKind};
    ///
    /// let err = "lab".parse::<ColorKind>().unwrap_err();
    /// assert_eq!(err, ColorError::InvalidColorKind("lab".into()));
    /// ```
    #[error("unable to process color, unknown kind: {0}")]
    InvalidColorKind(String),

    /// Hex string has fewer than six hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
