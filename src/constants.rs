//! Tuning constants and reference values for harmony classification
//! and palette generation.
//!
//! This module contains compile-time defaults for the engine, grouped
//! by concern. Runtime overrides go through [`crate::config::EngineConfig`].

/// Canonical harmonic angles and classification parameters
///
/// Hue relationships are measured as the circular hue difference folded
/// to [0, 180] degrees. Each harmony type has one canonical angle on that
/// folded scale.
pub mod harmony {
    /// Canonical angle for monochromatic relationships (same hue)
    pub const MONOCHROMATIC_ANGLE: f32 = 0.0;

    /// Canonical angle for analogous relationships
    pub const ANALOGOUS_ANGLE: f32 = 30.0;

    /// Canonical angle for triadic relationships
    pub const TRIADIC_ANGLE: f32 = 120.0;

    /// Canonical angle for split-complementary relationships
    pub const SPLIT_COMPLEMENTARY_ANGLE: f32 = 150.0;

    /// Canonical angle for complementary relationships
    pub const COMPLEMENTARY_ANGLE: f32 = 180.0;

    /// Default half-width of the angular window around a canonical angle
    pub const DEFAULT_ANGLE_TOLERANCE: f32 = 15.0;

    /// Weight of the angular-closeness term in the harmony score
    pub const ANGLE_WEIGHT: f32 = 0.8;

    /// Weight of the saturation/lightness compatibility term
    pub const COMPAT_WEIGHT: f32 = 0.2;

    /// Minimum score required to report a harmony type at all
    pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

    /// Saturation below which a color is treated as achromatic
    /// (hue carries no information)
    pub const ACHROMATIC_SATURATION: f32 = 0.05;

    /// Angular distance at which the closeness term reaches zero
    pub const ANGLE_FALLOFF: f32 = 90.0;
}

/// Distinctness enforcement parameters
pub mod distinctness {
    /// Minimum perceptual difference (ΔE in CIE Lab) between any two
    /// colors of a generated palette
    pub const MIN_DELTA_E: f32 = 15.0;

    /// Refill attempt budget per requested palette slot
    pub const MAX_ATTEMPTS_PER_SLOT: usize = 10;
}

/// Palette generation parameters
pub mod generation {
    /// "Pleasant" saturation range for synthesized key colors
    pub const PLEASANT_SATURATION: [f32; 2] = [0.3, 0.8];

    /// "Pleasant" lightness range for synthesized key colors
    pub const PLEASANT_LIGHTNESS: [f32; 2] = [0.3, 0.8];

    /// Maximum number of key colors anchoring a scheme
    pub const MAX_KEY_COLORS: usize = 3;

    /// Base hue jitter (degrees) per variation step
    pub const VARIATION_HUE_JITTER: f32 = 15.0;
}

/// Saturation/lightness bands for category remapping
///
/// Each band is `[min, max]`; remapping is proportional, so an input
/// value of 0 lands on `min` and 1 lands on `max`.
pub mod categories {
    pub const PASTEL_SATURATION: [f32; 2] = [0.20, 0.40];
    pub const PASTEL_LIGHTNESS: [f32; 2] = [0.70, 0.90];

    pub const VIBRANT_SATURATION: [f32; 2] = [0.70, 1.00];
    pub const VIBRANT_LIGHTNESS: [f32; 2] = [0.40, 0.60];

    pub const MUTED_SATURATION: [f32; 2] = [0.10, 0.35];
    pub const MUTED_LIGHTNESS: [f32; 2] = [0.35, 0.65];

    pub const ACCESSIBLE_SATURATION: [f32; 2] = [0.30, 0.80];
}

/// Contrast targets for the accessible category
pub mod contrast {
    /// WCAG 2.1 AA contrast ratio for normal text
    pub const TARGET_RATIO: f32 = 4.5;

    /// Lightness adjustment step while seeking the target ratio
    pub const LIGHTNESS_STEP: f32 = 0.05;

    /// Maximum adjustment iterations before accepting the best found
    pub const MAX_STEPS: usize = 14;
}

/// Enhancement parameters
pub mod enhancement {
    /// Fraction of the saturation gap pulled toward the anchor color
    /// at full strength
    pub const SATURATION_PULL: f32 = 0.25;
}
