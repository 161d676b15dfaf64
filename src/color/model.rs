//! The core color value type
//!
//! A [`Color`] is an immutable normalized RGB triple with alpha. All
//! derived representations (HSL, CMYK, hex, Lab) are computed on demand
//! in [`super::conversion`]; nothing but the four channels is stored.

use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

/// An opaque perceptual color value
///
/// Channels are stored normalized to [0, 1]. Construction clamps out-of
/// range inputs rather than failing; only hex parsing can error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Color {
    /// Create an opaque color from normalized channels
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self::with_alpha(red, green, blue, 1.0)
    }

    /// Create a color from normalized channels and alpha
    pub fn with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from 8-bit channels
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    /// Create an opaque color from HSL components
    ///
    /// * `hue` - degrees, wrapped into [0, 360)
    /// * `saturation`, `lightness` - fractions in [0, 1], clamped
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Create a color from HSL components and alpha
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hsl = Hsl::new(
            hue.rem_euclid(360.0),
            saturation.clamp(0.0, 1.0),
            lightness.clamp(0.0, 1.0),
        );
        let srgb = Srgb::from_color(hsl);
        Self::with_alpha(srgb.red, srgb.green, srgb.blue, alpha)
    }

    /// Red channel in [0, 1]
    pub fn red(&self) -> f32 {
        self.red
    }

    /// Green channel in [0, 1]
    pub fn green(&self) -> f32 {
        self.green
    }

    /// Blue channel in [0, 1]
    pub fn blue(&self) -> f32 {
        self.blue
    }

    /// Alpha channel in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The color as a `palette` sRGB value (alpha dropped)
    pub fn srgb(&self) -> Srgb {
        Srgb::new(self.red, self.green, self.blue)
    }

    /// The color in floating HSL, the generator's working space
    pub fn hsl(&self) -> Hsl {
        Hsl::from_color(self.srgb())
    }

    /// Same color with a different alpha
    pub fn alpha_replaced(&self, alpha: f32) -> Self {
        Self::with_alpha(self.red, self.green, self.blue, alpha)
    }
}

impl From<Srgb> for Color {
    fn from(srgb: Srgb) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Srgb::from_color(hsl).into()
    }
}
