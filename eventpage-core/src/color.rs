//! Color Derivation - Total Functions
//!
//! Malformed input never fails. It degrades to black.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strict `#RRGGBB` parse. `None` for anything else.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Lowercase, zero-padded `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `r,g,b` triple for use inside `rgba(...)`
    pub fn css_triple(self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Move each channel toward 255 by `percent`% of its remaining distance.
    pub fn lighten(self, percent: f64) -> Self {
        let pct = if percent.is_finite() { percent } else { 0.0 };
        let step = |c: u8| {
            let c = f64::from(c);
            let moved = c + ((255.0 - c) * pct / 100.0).round();
            moved.clamp(0.0, 255.0) as u8
        };
        Self {
            r: step(self.r),
            g: step(self.g),
            b: step(self.b),
        }
    }
}

/// True when `hex` is a well-formed `#RRGGBB` color.
pub fn is_valid_hex(hex: &str) -> bool {
    Rgb::parse_hex(hex).is_some()
}

/// Parse a hex color, falling back to black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or(Rgb::BLACK)
}

/// Lighten a hex color and re-encode it as `#rrggbb`.
pub fn lighten(hex: &str, percent: f64) -> String {
    hex_to_rgb(hex).lighten(percent).to_hex()
}
