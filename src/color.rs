//! DotColor: fill and stroke color for the dots.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parses the color strings a
//! layout file would carry: `#RRGGBB`, `#AARRGGBB`, `#RGB` shorthand and a
//! handful of named colors.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DotColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl DotColor {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Create from 0–255 RGB values with full opacity.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to 0–255 ARGB tuple.
    pub fn to_argb(&self) -> (u8, u8, u8, u8) {
        (
            (self.a * 255.0).round() as u8,
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as AARRGGBB. 3 and 6-char hex default to
    /// full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::from_argb(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Look up one of the named colors layout files commonly accept.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "black" => 0x000000,
            "darkgray" | "darkgrey" => 0x444444,
            "gray" | "grey" => 0x888888,
            "lightgray" | "lightgrey" => 0xCCCCCC,
            "white" => 0xFFFFFF,
            "red" => 0xFF0000,
            "green" => 0x00FF00,
            "blue" => 0x0000FF,
            "yellow" => 0xFFFF00,
            "cyan" | "aqua" => 0x00FFFF,
            "magenta" | "fuchsia" => 0xFF00FF,
            "lime" => 0x00FF00,
            "maroon" => 0x800000,
            "navy" => 0x000080,
            "olive" => 0x808000,
            "purple" => 0x800080,
            "silver" => 0xC0C0C0,
            "teal" => 0x008080,
            _ => return None,
        };
        Some(Self::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }

    /// Format as `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    pub fn to_hex(&self) -> String {
        let (a, r, g, b) = self.to_argb();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        }
    }

    /// The same color with its alpha multiplied by `opacity` (0.0–1.0).
    pub fn faded(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    #[cfg(feature = "view")]
    pub(crate) fn to_peniko(self) -> floem::peniko::Color {
        floem::peniko::Color::rgba(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for DotColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else {
            Self::from_name(trimmed).or_else(|| Self::from_hex(trimmed))
        };
        parsed.ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for DotColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DotColor> for String {
    fn from(color: DotColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
