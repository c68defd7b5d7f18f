//! Hex color value type.
//!
//! Design-token color values are 7-character `#rrggbb` strings. Validation
//! happens at parse time so a loaded config can never hold a malformed color.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a hex color.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Value does not start with `#`.
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    /// Value is not 7 characters long.
    #[error("Color must be '#' followed by 6 hex digits, got {0} character(s)")]
    BadLength(usize),

    /// Value contains a non-hex digit after the `#`.
    #[error("Invalid hex digit: {0:?}")]
    BadDigit(char),
}

/// A validated `#rrggbb` color value.
///
/// Stored exactly as written (digit case is preserved), compared as a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// The color as the original `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green, and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        // Infallible after FromStr validation.
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        (byte(0), byte(2), byte(4))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ColorError::MissingHash(s.to_string()));
        };
        if s.chars().count() != 7 {
            return Err(ColorError::BadLength(s.chars().count()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(bad));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
