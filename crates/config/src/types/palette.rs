//! Palette color parsing and console-format conversion.
//!
//! Responsibilities:
//! - Parse six-hex-digit color strings from the form into RGB channels.
//! - Convert colors to the console's 15-bit BGR555 palette word.
//!
//! Does NOT handle:
//! - Rendering the energy-cell preview (see the form crate).
//!
//! Invariants:
//! - Colors serialize as bare six-digit lowercase hex, the same spelling
//!   the form field stores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a palette color.
#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    /// The value is not exactly six hex digits.
    #[error("Invalid color '{value}': expected six hex digits like 'f09890'")]
    InvalidLength {
        /// The rejected value.
        value: String,
    },

    /// The value contains non-hex characters.
    #[error("Invalid color '{value}': {source}")]
    InvalidHex {
        /// The rejected value.
        value: String,
        /// The underlying decode error.
        source: hex::FromHexError,
    },
}

/// An RGB color chosen on the customization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColor {
    /// Parses a color from six hex digits, with or without a leading '#'.
    pub fn from_hex(value: &str) -> Result<Self, PaletteError> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(PaletteError::InvalidLength {
                value: value.to_string(),
            });
        }
        let bytes = hex::decode(digits).map_err(|source| PaletteError::InvalidHex {
            value: value.to_string(),
            source,
        })?;
        Ok(Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        })
    }

    /// The six-digit lowercase hex spelling of this color.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The console palette word: each channel reduced to five bits, packed
    /// little-endian as red, green, blue.
    pub fn to_bgr555(self) -> u16 {
        let r = u16::from(self.r / 8);
        let g = u16::from(self.g / 8);
        let b = u16::from(self.b / 8);
        r | (g << 5) | (b << 10)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for PaletteColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for PaletteColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for PaletteColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
