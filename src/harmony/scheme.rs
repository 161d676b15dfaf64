//! Hue-relationship schemes for palette generation
//!
//! A scheme names the fixed hue offsets that derive additional key
//! colors from a base hue. The generator samples palette colors inside
//! the envelope spanned by those keys.

use serde::{Deserialize, Serialize};

/// A hue-relationship scheme for deriving key colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Single hue; variation comes from saturation and lightness only
    Monochromatic,
    /// Neighboring hues, 30 degrees to either side
    Analogous,
    /// Opposite hues, 180 degrees apart
    Complementary,
    /// Balanced triangle, 120 degrees apart
    Triadic,
    /// Softer contrast at 150 and 210 degrees
    SplitComplementary,
}

impl ColorScheme {
    /// All supported schemes, for uniform sampling
    pub const ALL: [ColorScheme; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
    ];

    /// Hue offsets (degrees) deriving further keys from the base hue
    pub fn offsets(&self) -> &'static [f32] {
        match self {
            Self::Monochromatic => &[],
            Self::Analogous => &[30.0, 330.0],
            Self::Complementary => &[180.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
        }
    }

    /// Number of key colors this scheme anchors (including the base)
    pub fn key_count(&self) -> usize {
        1 + self.offsets().len()
    }

    /// Key hues derived from a base hue, base first
    pub fn key_hues(&self, base_hue: f32) -> Vec<f32> {
        std::iter::once(base_hue.rem_euclid(360.0))
            .chain(
                self.offsets()
                    .iter()
                    .map(|offset| (base_hue + offset).rem_euclid(360.0)),
            )
            .collect()
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monochromatic => write!(f, "Monochromatic"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Complementary => write!(f, "Complementary"),
            Self::Triadic => write!(f, "Triadic"),
            Self::SplitComplementary => write!(f, "Split-Complementary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(ColorScheme::Monochromatic.offsets(), &[] as &[f32]);
        assert_eq!(ColorScheme::Complementary.offsets(), &[180.0]);
        assert_eq!(ColorScheme::Triadic.offsets(), &[120.0, 240.0]);
        assert_eq!(ColorScheme::SplitComplementary.offsets(), &[150.0, 210.0]);
        assert_eq!(ColorScheme::Analogous.offsets(), &[30.0, 330.0]);
    }

    #[test]
    fn test_key_hues_wrap() {
        let hues = ColorScheme::Complementary.key_hues(300.0);
        assert_eq!(hues.len(), 2);
        assert!((hues[0] - 300.0).abs() < 1e-4);
        assert!((hues[1] - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_key_count_matches_hues() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.key_hues(45.0).len(), scheme.key_count());
        }
    }
}
