//! Hex color parsing and formatting.

use csscolorparser::Color as CssColor;
use palette::Srgb;

/// Error type for strict hex color parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input does not start with `#`
    MissingPrefix,
    /// Input is not `#` followed by exactly six hex digits (carries input length)
    BadLength(usize),
    /// Non-hexadecimal digit in the channel bytes
    BadHexDigit(char),
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "hex color must start with '#'"),
            Self::BadLength(len) => {
                write!(f, "hex color must be '#' plus 6 digits, got {len} characters")
            }
            Self::BadHexDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parse a strict `#RRGGBB` color into normalized RGB.
///
/// Each channel is its 2-digit hex byte divided by 255, so channels are
/// always in [0, 1]. Shorthand (`#RGB`) and alpha forms are rejected; this is
/// the validating replacement for the usual NaN-propagating hex split.
pub fn parse_hex_rgb(input: &str) -> Result<Srgb<f32>, ColorParseError> {
    let digits = input
        .strip_prefix('#')
        .ok_or(ColorParseError::MissingPrefix)?;
    if digits.len() != 6 {
        return Err(ColorParseError::BadLength(input.len()));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadHexDigit(bad));
    }

    // Validated above, the byte parses cannot fail
    let byte = |i: usize| -> f32 {
        let b = u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        f32::from(b) / 255.0
    };

    Ok(Srgb::new(byte(0), byte(2), byte(4)))
}

/// Parse any CSS color string into normalized RGB.
///
/// Supports: hex (#RRGGBB), rgb(), oklch(), named colors, etc. Used for rig
/// config files; control inputs go through [`parse_hex_rgb`] instead.
pub fn parse_css_color(input: &str) -> Result<Srgb<f32>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ))
}

/// Quantize a normalized color to 8-bit channels.
pub fn to_rgb8(color: Srgb<f32>) -> (u8, u8, u8) {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    (
        quantize(color.red),
        quantize(color.green),
        quantize(color.blue),
    )
}

/// Format a normalized color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb<f32>) -> String {
    let (r, g, b) = to_rgb8(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
