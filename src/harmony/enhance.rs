//! Harmony enhancement of existing palettes
//!
//! Nudges a color set toward stronger internal harmony without
//! regenerating it: every color's hue is rotated toward the canonical
//! harmonic angle nearest its offset from the palette's first color,
//! proportionally to an adjustable strength. Order and count are
//! always preserved.
//!
//! Algorithm tag: `algo-canonical-angle-nudging`

use crate::color::Color;
use crate::config::EnhancerConfig;
use crate::constants::enhancement::SATURATION_PULL;
use crate::constants::harmony::ACHROMATIC_SATURATION;
use crate::harmony::HarmonyType;

/// Enhancer pulling palettes toward canonical harmonic relationships
pub struct HarmonyEnhancer {
    saturation_pull: f32,
}

impl Default for HarmonyEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyEnhancer {
    /// Create an enhancer with the default saturation pull
    pub fn new() -> Self {
        Self {
            saturation_pull: SATURATION_PULL,
        }
    }

    /// Create an enhancer with a custom saturation pull
    pub fn with_params(saturation_pull: f32) -> Self {
        Self { saturation_pull }
    }

    /// Create an enhancer from an engine configuration section
    pub fn from_config(config: &EnhancerConfig) -> Self {
        Self::with_params(config.saturation_pull)
    }

    /// Nudge a color set toward stronger internal harmony
    ///
    /// The first color anchors the palette and is returned unchanged.
    /// `strength` is clamped to [0, 1]: 0 is the identity, 1 snaps every
    /// hue fully onto its nearest canonical angle relative to the anchor.
    /// Achromatic colors carry no usable hue and pass through untouched.
    pub fn enhance(&self, colors: &[Color], strength: f32) -> Vec<Color> {
        let strength = strength.clamp(0.0, 1.0);
        if strength == 0.0 || colors.len() < 2 {
            return colors.to_vec();
        }

        let anchor = colors[0].hsl();
        if anchor.saturation < ACHROMATIC_SATURATION {
            return colors.to_vec();
        }
        let anchor_hue = anchor.hue.into_positive_degrees();

        let mut enhanced = Vec::with_capacity(colors.len());
        enhanced.push(colors[0]);

        for color in &colors[1..] {
            let hsl = color.hsl();
            if hsl.saturation < ACHROMATIC_SATURATION {
                enhanced.push(*color);
                continue;
            }

            let offset = signed_hue_offset(hsl.hue.into_positive_degrees(), anchor_hue);
            let canonical = HarmonyType::nearest(offset.abs()).canonical_angle();
            let target = canonical.copysign(offset);
            let rotated = offset + (target - offset) * strength;

            let saturation = hsl.saturation
                + (anchor.saturation - hsl.saturation) * strength * self.saturation_pull;

            enhanced.push(Color::from_hsla(
                anchor_hue + rotated,
                saturation,
                hsl.lightness,
                color.alpha(),
            ));
        }
        enhanced
    }
}

/// Signed hue offset from `reference` to `hue`, in (-180, 180]
fn signed_hue_offset(hue: f32, reference: f32) -> f32 {
    let delta = (hue - reference).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}
