//! Harmony scoring and classification between color pairs
//!
//! Implements hue-relationship classification that:
//! - Folds the circular hue delta to [0, 180] degrees
//! - Matches the folded delta against canonical harmonic angles
//! - Scores angular closeness blended with saturation/lightness compatibility
//!
//! Algorithm tag: `algo-hue-window-classification`

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::ClassifierConfig;
use crate::constants::harmony::{
    ACHROMATIC_SATURATION, ANALOGOUS_ANGLE, ANGLE_FALLOFF, ANGLE_WEIGHT,
    COMPAT_WEIGHT, COMPLEMENTARY_ANGLE, DEFAULT_ANGLE_TOLERANCE,
    DEFAULT_MIN_CONFIDENCE, MONOCHROMATIC_ANGLE, SPLIT_COMPLEMENTARY_ANGLE,
    TRIADIC_ANGLE,
};

/// Discrete classification of the hue relationship between two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyType {
    Monochromatic,
    Analogous,
    Triadic,
    SplitComplementary,
    Complementary,
}

impl HarmonyType {
    /// All types, ordered by canonical angle
    pub const ALL: [HarmonyType; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Complementary,
    ];

    /// Canonical angle of this relationship on the folded [0, 180] scale
    pub fn canonical_angle(&self) -> f32 {
        match self {
            Self::Monochromatic => MONOCHROMATIC_ANGLE,
            Self::Analogous => ANALOGOUS_ANGLE,
            Self::Triadic => TRIADIC_ANGLE,
            Self::SplitComplementary => SPLIT_COMPLEMENTARY_ANGLE,
            Self::Complementary => COMPLEMENTARY_ANGLE,
        }
    }

    /// The type whose canonical angle is closest to a folded hue delta
    pub fn nearest(folded_delta: f32) -> HarmonyType {
        let mut best = Self::Monochromatic;
        let mut best_dist = f32::MAX;
        for candidate in Self::ALL {
            let dist = (folded_delta - candidate.canonical_angle()).abs();
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        best
    }
}

impl std::fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monochromatic => write!(f, "Monochromatic"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Triadic => write!(f, "Triadic"),
            Self::SplitComplementary => write!(f, "Split-Complementary"),
            Self::Complementary => write!(f, "Complementary"),
        }
    }
}

/// Result of classifying a color pair
///
/// Computed fresh per query; never cached. The type is absent when no
/// canonical relationship clears the classifier's confidence threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonyResult {
    /// Harmony score in [0, 1]; 1 is a perfect harmonic relationship
    pub score: f32,
    /// Matched relationship, if any window applies
    pub harmony_type: Option<HarmonyType>,
}

/// Classifier for hue-relationship harmony between two colors
pub struct HarmonyClassifier {
    angle_tolerance: f32,
    min_confidence: f32,
}

impl Default for HarmonyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyClassifier {
    /// Create a classifier with default tolerance and confidence threshold
    pub fn new() -> Self {
        Self {
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Create a classifier with custom parameters
    pub fn with_params(angle_tolerance: f32, min_confidence: f32) -> Self {
        Self {
            angle_tolerance,
            min_confidence,
        }
    }

    /// Create a classifier from an engine configuration section
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::with_params(config.angle_tolerance, config.min_confidence)
    }

    /// Classify the harmony relationship between two colors
    ///
    /// Deterministic: identical inputs always produce identical results.
    pub fn classify(&self, a: &Color, b: &Color) -> HarmonyResult {
        let hsl_a = a.hsl();
        let hsl_b = b.hsl();

        let delta = folded_hue_delta_hsl(
            hsl_a.hue.into_positive_degrees(),
            hsl_a.saturation,
            hsl_b.hue.into_positive_degrees(),
            hsl_b.saturation,
        );

        let nearest = HarmonyType::nearest(delta);
        let angular_distance = (delta - nearest.canonical_angle()).abs();
        let angle_score = (1.0 - angular_distance / ANGLE_FALLOFF).clamp(0.0, 1.0);

        let saturation_gap = (hsl_a.saturation - hsl_b.saturation).abs();
        let lightness_gap = (hsl_a.lightness - hsl_b.lightness).abs();
        let compat_score = 1.0 - (saturation_gap + lightness_gap) / 2.0;

        let score =
            (ANGLE_WEIGHT * angle_score + COMPAT_WEIGHT * compat_score).clamp(0.0, 1.0);

        let harmony_type = (angular_distance <= self.angle_tolerance
            && score >= self.min_confidence)
            .then_some(nearest);

        HarmonyResult {
            score,
            harmony_type,
        }
    }
}

/// Circular hue difference folded to [0, 180] degrees
pub fn folded_hue_delta(hue_a: f32, hue_b: f32) -> f32 {
    let raw = (hue_a - hue_b).rem_euclid(360.0);
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Folded hue delta treating achromatic inputs as hueless
///
/// When either color carries no usable saturation its hue is noise;
/// the pair is compared as if on the same hue.
fn folded_hue_delta_hsl(hue_a: f32, sat_a: f32, hue_b: f32, sat_b: f32) -> f32 {
    if sat_a < ACHROMATIC_SATURATION || sat_b < ACHROMATIC_SATURATION {
        return 0.0;
    }
    folded_hue_delta(hue_a, hue_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folded_hue_delta() {
        assert!((folded_hue_delta(10.0, 350.0) - 20.0).abs() < 1e-4);
        assert!((folded_hue_delta(0.0, 180.0) - 180.0).abs() < 1e-4);
        assert!((folded_hue_delta(90.0, 90.0)).abs() < 1e-4);
        assert!((folded_hue_delta(350.0, 10.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_type() {
        assert_eq!(HarmonyType::nearest(5.0), HarmonyType::Monochromatic);
        assert_eq!(HarmonyType::nearest(28.0), HarmonyType::Analogous);
        assert_eq!(HarmonyType::nearest(118.0), HarmonyType::Triadic);
        assert_eq!(HarmonyType::nearest(152.0), HarmonyType::SplitComplementary);
        assert_eq!(HarmonyType::nearest(178.0), HarmonyType::Complementary);
    }

    #[test]
    fn test_complementary_detection() {
        let a = Color::from_hsl(0.0, 0.8, 0.5);
        let b = Color::from_hsl(180.0, 0.8, 0.5);
        let result = HarmonyClassifier::new().classify(&a, &b);

        assert_eq!(result.harmony_type, Some(HarmonyType::Complementary));
        assert!(result.score >= 0.9, "score: {}", result.score);
    }

    #[test]
    fn test_triadic_detection() {
        let a = Color::from_hsl(40.0, 0.7, 0.5);
        let b = Color::from_hsl(160.0, 0.7, 0.5);
        let result = HarmonyClassifier::new().classify(&a, &b);

        assert_eq!(result.harmony_type, Some(HarmonyType::Triadic));
    }

    #[test]
    fn test_no_type_outside_windows() {
        // 75 degrees is the farthest a folded delta gets from any
        // canonical angle.
        let a = Color::from_hsl(0.0, 0.7, 0.5);
        let b = Color::from_hsl(75.0, 0.7, 0.5);
        let result = HarmonyClassifier::new().classify(&a, &b);

        assert_eq!(result.harmony_type, None);
        assert!(result.score < 0.9);
    }

    #[test]
    fn test_compatibility_raises_score() {
        let base = Color::from_hsl(20.0, 0.8, 0.5);
        let matched = Color::from_hsl(200.0, 0.8, 0.5);
        let mismatched = Color::from_hsl(200.0, 0.3, 0.9);

        let classifier = HarmonyClassifier::new();
        let close = classifier.classify(&base, &matched);
        let far = classifier.classify(&base, &mismatched);
        assert!(close.score > far.score);
    }

    #[test]
    fn test_achromatic_pair_is_monochromatic() {
        let light_gray = Color::new(0.8, 0.8, 0.8);
        let dark_gray = Color::new(0.3, 0.3, 0.3);
        let result = HarmonyClassifier::new().classify(&light_gray, &dark_gray);

        assert_eq!(result.harmony_type, Some(HarmonyType::Monochromatic));
    }

    #[test]
    fn test_determinism() {
        let a = Color::from_rgb8(200, 40, 90);
        let b = Color::from_rgb8(30, 160, 210);
        let classifier = HarmonyClassifier::new();

        let first = classifier.classify(&a, &b);
        let second = classifier.classify(&a, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_bounded() {
        let classifier = HarmonyClassifier::new();
        for (h1, h2) in [(0.0, 75.0), (10.0, 190.0), (300.0, 301.0)] {
            let a = Color::from_hsl(h1, 0.9, 0.2);
            let b = Color::from_hsl(h2, 0.1, 0.9);
            let result = classifier.classify(&a, &b);
            assert!((0.0..=1.0).contains(&result.score));
        }
    }
}
