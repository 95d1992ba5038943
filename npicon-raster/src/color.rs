// SPDX-License-Identifier: LGPL-3.0-only

//! # Flat RGBA Colors
//!
//! Icons are painted with a single base color per glyph plus a few shades
//! derived from it. Every derivation clamps each channel to `[0, 255]`, so a
//! shade can saturate but never wraps around.
//!
//! ```rust
//! use npicon_raster::color::Color;
//!
//! let base = Color::rgb(200, 120, 40);
//! assert_eq!(base.scaled(2.0), Color::rgb(255, 240, 80));
//! assert_eq!(Color::from_hex("#c87828").unwrap(), base);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A color with four independent 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. `0` is fully transparent.
    pub a: u8,
}

/// Errors produced when parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not have 6 or 8 hex digits.
    #[error("Hex color must be 6 or 8 characters, got {0}")]
    InvalidLength(usize),

    /// A digit pair could not be parsed.
    #[error("Invalid hex color '{0}'")]
    InvalidDigit(String),
}

impl Color {
    /// Fully transparent black, the initial value of every canvas cell.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if the alpha channel is zero.
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Return this color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply the RGB channels by `factor`, clamping each to `[0, 255]`.
    ///
    /// Alpha is left untouched. Negative factors clamp to black.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| clamp_channel(c as f32 * factor);
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Darken towards black. `factor` is clamped to `[0, 1]`; `1.0` yields black.
    pub fn darker(self, factor: f32) -> Self {
        self.scaled(1.0 - factor.clamp(0.0, 1.0))
    }

    /// Lighten towards white. `factor` is clamped to `[0, 1]`; `1.0` yields white.
    pub fn lighter(self, factor: f32) -> Self {
        let t = factor.clamp(0.0, 1.0);
        let mix = |c: u8| clamp_channel(c as f32 + (255.0 - c as f32) * t);
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            a: self.a,
        }
    }

    /// The channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a color from `[r, g, b, a]`.
    pub const fn from_array(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Parse `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn clamp_channel(value: f32) -> u8 {
    // NaN falls through `clamp` unchanged and `as u8` maps it to 0.
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(Error::custom)
    }
}
