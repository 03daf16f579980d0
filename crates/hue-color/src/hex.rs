//! CSS-style hex color strings.

use crate::{ColorError, ColorResult, Rgb};

/// Parses a hex color such as `"ff00ff"` or `"#DEDBEF"`.
///
/// Everything that is not a hex digit is discarded first; the first six
/// remaining digits are read as red, green, blue byte pairs.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] when fewer than six hex digits remain.
///
/// # Example
///
/// ```rust
/// use hue_color::hex::hex_to_rgb;
/// use hue_color::Rgb;
///
/// assert_eq!(hex_to_rgb("#ff00ff").unwrap(), Rgb::new(255, 0, 255));
/// assert!(hex_to_rgb("#fff").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let digits: String = hex
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .collect();

    let mut bytes = [0u8; 3];
    ::hex::decode_to_slice(&digits, &mut bytes)
        .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

    Ok(Rgb::from(bytes))
}

/// Formats RGB as six lowercase hex digits without a leading `#`.
///
/// ```rust
/// use hue_color::hex::rgb_to_hex;
/// use hue_color::Rgb;
///
/// assert_eq!(rgb_to_hex(Rgb::new(16, 64, 255)), "1040ff");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    ::hex::encode(rgb.to_array())
}
