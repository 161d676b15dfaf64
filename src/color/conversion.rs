//! Color space conversions and the perceptual difference metric
//!
//! Provides the caller-facing representations of a [`Color`]:
//! - integer HSL and CMYK component views
//! - hex string formatting and parsing (3, 6 or 8 digits)
//! - perceptual difference as Euclidean ΔE76 in CIE Lab
//!
//! Algorithm tag: `algo-lab-delta-e76`

use palette::{FromColor, Lab};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::{PaletteError, Result};

/// Integer HSL view of a color
///
/// Hue is reported as 0 when saturation is 0 (hue is undefined for
/// achromatic colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslComponents {
    /// Hue in degrees, 0-359
    pub hue: u16,
    /// Saturation, 0-100
    pub saturation: u8,
    /// Lightness, 0-100
    pub lightness: u8,
    /// Alpha, 0-100
    pub alpha: u8,
}

/// Integer CMYK view of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmykComponents {
    /// Cyan, 0-100
    pub cyan: u8,
    /// Magenta, 0-100
    pub magenta: u8,
    /// Yellow, 0-100
    pub yellow: u8,
    /// Key (black), 0-100
    pub key: u8,
    /// Alpha, 0-100
    pub alpha: u8,
}

impl Color {
    /// Integer HSL components for display
    pub fn to_hsl(&self) -> HslComponents {
        let hsl = self.hsl();
        let saturation = hsl.saturation;
        let hue = if saturation == 0.0 {
            0
        } else {
            (hsl.hue.into_positive_degrees().round() as u16) % 360
        };
        HslComponents {
            hue,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (hsl.lightness * 100.0).round() as u8,
            alpha: (self.alpha() * 100.0).round() as u8,
        }
    }

    /// Integer CMYK components for display
    ///
    /// Pure black reports key = 100 with zero chromatic components.
    pub fn to_cmyk(&self) -> CmykComponents {
        let key = 1.0 - self.red().max(self.green()).max(self.blue());
        let (cyan, magenta, yellow) = if key >= 1.0 {
            (0.0, 0.0, 0.0)
        } else {
            let denom = 1.0 - key;
            (
                (1.0 - self.red() - key) / denom,
                (1.0 - self.green() - key) / denom,
                (1.0 - self.blue() - key) / denom,
            )
        };
        CmykComponents {
            cyan: (cyan * 100.0).round() as u8,
            magenta: (magenta * 100.0).round() as u8,
            yellow: (yellow * 100.0).round() as u8,
            key: (key * 100.0).round() as u8,
            alpha: (self.alpha() * 100.0).round() as u8,
        }
    }

    /// Hex string representation: 6 uppercase digits, no `#`
    ///
    /// Translucent colors append a 2-digit alpha component.
    pub fn to_hex(&self) -> String {
        let r = (self.red() * 255.0).round() as u8;
        let g = (self.green() * 255.0).round() as u8;
        let b = (self.blue() * 255.0).round() as u8;
        if self.alpha() < 1.0 {
            let a = (self.alpha() * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        } else {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        }
    }

    /// Parse a hex color string
    ///
    /// Accepts 3 (shorthand), 6 (RGB) or 8 (RGBA) hex digits with an
    /// optional `#` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidFormat`] for any other length or
    /// for non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');

        let expanded;
        let digits = match digits.len() {
            3 => {
                expanded = digits
                    .chars()
                    .flat_map(|c| [c, c])
                    .collect::<String>();
                expanded.as_str()
            }
            6 | 8 => digits,
            len => {
                return Err(PaletteError::invalid_format(
                    hex,
                    format!("expected 3, 6 or 8 hex digits, got {}", len),
                ))
            }
        };

        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| PaletteError::invalid_format(hex, "non-hex digits"))
        };

        let red = channel(0..2)?;
        let green = channel(2..4)?;
        let blue = channel(4..6)?;
        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };

        Ok(Color::with_alpha(red, green, blue, alpha))
    }

    /// The color in CIE Lab, the difference metric's working space
    pub fn lab(&self) -> Lab {
        Lab::from_color(self.srgb())
    }

    /// Perceptual color difference (Euclidean ΔE76 in CIE Lab)
    ///
    /// Symmetric, and zero exactly when the two colors are channel-wise
    /// equal. The engine's distinctness threshold (15.0) lives on this
    /// scale.
    pub fn difference(&self, other: &Color) -> f32 {
        if self.red() == other.red()
            && self.green() == other.green()
            && self.blue() == other.blue()
        {
            return 0.0;
        }
        let a = self.lab();
        let b = other.lab();
        let dl = a.l - b.l;
        let da = a.a - b.a;
        let db = a.b - b.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}
