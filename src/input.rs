//! Tagged control input values.
//!
//! The raw string from a UI input is interpreted exactly once, at the
//! boundary, into a [`ControlInput`]; controllers never sniff string shapes
//! themselves.

use palette::Srgb;

use crate::color::{ColorParseError, parse_hex_rgb};

/// How out-of-range intensity percentages are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Clamp the percentage into [0, 100]
    #[default]
    Clamp,
    /// Reject with [`InputError::OutOfRange`]
    Reject,
}

/// Error type for control input parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Hex color failed validation
    InvalidColor(ColorParseError),
    /// Intensity is not a finite number (carries the raw input)
    InvalidIntensity(String),
    /// Intensity percentage outside [0, 100] under [`ClampPolicy::Reject`]
    OutOfRange(f32),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor(e) => write!(f, "invalid color: {e}"),
            Self::InvalidIntensity(raw) => write!(f, "invalid intensity '{raw}'"),
            Self::OutOfRange(v) => write!(f, "intensity {v} outside 0-100"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for InputError {
    fn from(e: ColorParseError) -> Self {
        Self::InvalidColor(e)
    }
}

/// A control value, decided at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    /// Assigns a normalized color to every target's color/emissive field
    Color(Srgb<f32>),
    /// Assigns a normalized intensity (percentage / 100) to every target
    Intensity(f32),
}

impl ControlInput {
    /// Interpret a raw input string.
    ///
    /// A leading `#` means a strict `#RRGGBB` color; anything else is an
    /// intensity percentage in [0, 100] mapped to [0, 1]. `"0"` maps to 0.0
    /// and `"100"` to 1.0. Malformed values are rejected before any target is
    /// touched.
    pub fn parse(raw: &str, policy: ClampPolicy) -> Result<Self, InputError> {
        let raw = raw.trim();
        if raw.starts_with('#') {
            return Ok(Self::Color(parse_hex_rgb(raw)?));
        }

        let percent: f32 = raw
            .parse()
            .map_err(|_| InputError::InvalidIntensity(raw.to_string()))?;
        Self::intensity(percent, policy).map_err(|e| match e {
            // Report the raw string for non-finite parses like "NaN"
            InputError::InvalidIntensity(_) => InputError::InvalidIntensity(raw.to_string()),
            other => other,
        })
    }

    /// Build an intensity input from an already-numeric percentage.
    pub fn intensity(percent: f32, policy: ClampPolicy) -> Result<Self, InputError> {
        if !percent.is_finite() {
            return Err(InputError::InvalidIntensity(percent.to_string()));
        }
        let percent = if (0.0..=100.0).contains(&percent) {
            percent
        } else {
            match policy {
                ClampPolicy::Clamp => percent.clamp(0.0, 100.0),
                ClampPolicy::Reject => return Err(InputError::OutOfRange(percent)),
            }
        };
        Ok(Self::Intensity(percent / 100.0))
    }
}
