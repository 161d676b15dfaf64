//! Category-based palette restyling
//!
//! Remaps the saturation/lightness of generated colors into the band
//! associated with a named stylistic category. Hue is preserved except
//! for the monochrome category; remapping is proportional, so the
//! relative ordering of input values survives.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{categories, contrast};
use crate::harmony::ColorScheme;

/// A named stylistic constraint for palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteCategory {
    /// No restyling
    Standard,
    /// Soft, washed-out colors: low saturation, high lightness
    Pastel,
    /// Saturated colors at medium lightness
    Vibrant,
    /// Desaturated, mid-lightness colors
    Muted,
    /// Grayscale: saturation forced to zero
    Monochrome,
    /// Colors darkened until they contrast 4.5:1 against white
    Accessible,
}

impl PaletteCategory {
    /// All categories
    pub const ALL: [PaletteCategory; 6] = [
        Self::Standard,
        Self::Pastel,
        Self::Vibrant,
        Self::Muted,
        Self::Monochrome,
        Self::Accessible,
    ];

    /// Scheme hint for generation, where the category implies one
    pub fn scheme_hint(&self) -> Option<ColorScheme> {
        match self {
            Self::Monochrome => Some(ColorScheme::Monochromatic),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaletteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Pastel => write!(f, "Pastel"),
            Self::Vibrant => write!(f, "Vibrant"),
            Self::Muted => write!(f, "Muted"),
            Self::Monochrome => write!(f, "Monochrome"),
            Self::Accessible => write!(f, "Accessible"),
        }
    }
}

/// Modifier applying category bands to color sets
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryModifier;

impl CategoryModifier {
    /// Create a category modifier
    pub fn new() -> Self {
        Self
    }

    /// Restyle a color set to satisfy a category constraint
    ///
    /// Pure per-element remap; count and order are preserved, and
    /// `Standard` returns the input unchanged.
    pub fn apply(&self, colors: &[Color], category: PaletteCategory) -> Vec<Color> {
        match category {
            PaletteCategory::Standard => colors.to_vec(),
            _ => colors
                .iter()
                .map(|color| self.apply_one(color, category))
                .collect(),
        }
    }

    /// Restyle a single color
    pub fn apply_one(&self, color: &Color, category: PaletteCategory) -> Color {
        let hsl = color.hsl();
        let hue = hsl.hue.into_positive_degrees();
        match category {
            PaletteCategory::Standard => *color,
            PaletteCategory::Pastel => remap(
                color,
                hue,
                hsl.saturation,
                hsl.lightness,
                categories::PASTEL_SATURATION,
                categories::PASTEL_LIGHTNESS,
            ),
            PaletteCategory::Vibrant => remap(
                color,
                hue,
                hsl.saturation,
                hsl.lightness,
                categories::VIBRANT_SATURATION,
                categories::VIBRANT_LIGHTNESS,
            ),
            PaletteCategory::Muted => remap(
                color,
                hue,
                hsl.saturation,
                hsl.lightness,
                categories::MUTED_SATURATION,
                categories::MUTED_LIGHTNESS,
            ),
            PaletteCategory::Monochrome => {
                Color::from_hsla(0.0, 0.0, hsl.lightness, color.alpha())
            }
            PaletteCategory::Accessible => {
                make_accessible(color, hue, hsl.saturation, hsl.lightness)
            }
        }
    }
}

/// Proportional band remap: 0 lands on the band minimum, 1 on its maximum
fn remap(
    color: &Color,
    hue: f32,
    saturation: f32,
    lightness: f32,
    saturation_band: [f32; 2],
    lightness_band: [f32; 2],
) -> Color {
    Color::from_hsla(
        hue,
        into_band(saturation, saturation_band),
        into_band(lightness, lightness_band),
        color.alpha(),
    )
}

fn into_band(value: f32, band: [f32; 2]) -> f32 {
    band[0] + value.clamp(0.0, 1.0) * (band[1] - band[0])
}

/// Darken a color until it reaches the WCAG target contrast ratio
/// against a white background
fn make_accessible(color: &Color, hue: f32, saturation: f32, lightness: f32) -> Color {
    let saturation = into_band(saturation, categories::ACCESSIBLE_SATURATION);
    let mut lightness = lightness;

    for _ in 0..contrast::MAX_STEPS {
        let candidate = Color::from_hsla(hue, saturation, lightness, color.alpha());
        if contrast_on_white(&candidate) >= contrast::TARGET_RATIO {
            return candidate;
        }
        lightness = (lightness - contrast::LIGHTNESS_STEP).max(0.0);
    }
    Color::from_hsla(hue, saturation, lightness, color.alpha())
}

/// WCAG contrast ratio of the color against white
fn contrast_on_white(color: &Color) -> f32 {
    1.05 / (relative_luminance(color) + 0.05)
}

/// WCAG 2.1 relative luminance
fn relative_luminance(color: &Color) -> f32 {
    let linear = Srgb::new(color.red(), color.green(), color.blue()).into_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_identity() {
        let colors = vec![
            Color::from_rgb8(10, 200, 90),
            Color::from_rgb8(240, 12, 100),
        ];
        let restyled = CategoryModifier::new().apply(&colors, PaletteCategory::Standard);
        assert_eq!(restyled, colors);
    }

    #[test]
    fn test_pastel_bands_mid_gray() {
        let gray = Color::from_hex("808080").unwrap();
        let pastel = CategoryModifier::new().apply_one(&gray, PaletteCategory::Pastel);
        let hsl = pastel.to_hsl();
        assert!((20..=40).contains(&hsl.saturation), "sat: {}", hsl.saturation);
        assert!((70..=90).contains(&hsl.lightness), "light: {}", hsl.lightness);
    }

    #[test]
    fn test_pastel_preserves_hue() {
        let orange = Color::from_hsl(30.0, 0.9, 0.5);
        let pastel = CategoryModifier::new().apply_one(&orange, PaletteCategory::Pastel);
        assert!((pastel.to_hsl().hue as i32 - 30).abs() <= 1);
    }

    #[test]
    fn test_vibrant_band() {
        let dull = Color::from_hsl(260.0, 0.15, 0.85);
        let vibrant = CategoryModifier::new().apply_one(&dull, PaletteCategory::Vibrant);
        let hsl = vibrant.to_hsl();
        assert!(hsl.saturation >= 70, "sat: {}", hsl.saturation);
        assert!((40..=60).contains(&hsl.lightness), "light: {}", hsl.lightness);
    }

    #[test]
    fn test_monochrome_zeroes_saturation() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        let mono = CategoryModifier::new().apply_one(&red, PaletteCategory::Monochrome);
        assert_eq!(mono.to_hsl().saturation, 0);
        // Lightness survives.
        assert!((mono.to_hsl().lightness as i32 - 50).abs() <= 1);
    }

    #[test]
    fn test_accessible_reaches_contrast_on_white() {
        let modifier = CategoryModifier::new();
        for color in [
            Color::from_hsl(60.0, 0.5, 0.5),
            Color::from_hsl(200.0, 0.9, 0.55),
            Color::from_hsl(320.0, 0.2, 0.45),
            Color::from_hsl(120.0, 0.8, 0.85),
        ] {
            let adjusted = modifier.apply_one(&color, PaletteCategory::Accessible);
            assert!(
                contrast_on_white(&adjusted) >= contrast::TARGET_RATIO,
                "contrast {} below target for {:?}",
                contrast_on_white(&adjusted),
                adjusted
            );
        }
    }

    #[test]
    fn test_accessible_leaves_dark_colors_alone() {
        let dark = Color::from_hsl(220.0, 0.6, 0.2);
        let adjusted = CategoryModifier::new().apply_one(&dark, PaletteCategory::Accessible);
        // Already readable on white: only the saturation band applies.
        assert!((adjusted.to_hsl().lightness as i32 - 20).abs() <= 1);
    }

    #[test]
    fn test_apply_preserves_count_and_order() {
        let colors: Vec<Color> = (0..5)
            .map(|i| Color::from_hsl(i as f32 * 60.0, 0.8, 0.5))
            .collect();
        for category in PaletteCategory::ALL {
            let restyled = CategoryModifier::new().apply(&colors, category);
            assert_eq!(restyled.len(), colors.len());
        }
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert!(relative_luminance(&Color::new(0.0, 0.0, 0.0)) < 0.01);
        assert!(relative_luminance(&Color::new(1.0, 1.0, 1.0)) > 0.99);
    }

    #[test]
    fn test_scheme_hint() {
        assert_eq!(
            PaletteCategory::Monochrome.scheme_hint(),
            Some(ColorScheme::Monochromatic)
        );
        assert_eq!(PaletteCategory::Vibrant.scheme_hint(), None);
    }
}
