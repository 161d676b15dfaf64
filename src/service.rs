//! Palette service: the engine's public orchestrator
//!
//! Wires the generator, category modifier and enhancer together and
//! owns the distinctness-enforcement loop:
//! - Generates candidate palettes from seeds or at random
//! - Restyles candidates to the requested category
//! - Admits colors greedily under the minimum ΔE rule
//! - Refills rejected slots from bounded random retries
//!
//! Every stochastic operation takes an explicit random source; the
//! service itself holds only immutable configuration and is freely
//! shareable across threads.
//!
//! Algorithm tag: `algo-bounded-distinctness-refill`

use palette::Hsl;
use rand::Rng;

use crate::category::{CategoryModifier, PaletteCategory};
use crate::color::Color;
use crate::config::EngineConfig;
use crate::constants::generation::VARIATION_HUE_JITTER;
use crate::harmony::{HarmonyEnhancer, HarmonyGenerator};
use crate::{PaletteError, Result};

/// Orchestrator for palette generation, restyling and enhancement
pub struct PaletteService {
    config: EngineConfig,
    generator: HarmonyGenerator,
    modifier: CategoryModifier,
    enhancer: HarmonyEnhancer,
}

impl Default for PaletteService {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteService {
    /// Palette size used by the convenience wrappers
    pub const DEFAULT_PALETTE_SIZE: usize = 5;

    /// Variation count used by the convenience wrappers
    pub const DEFAULT_VARIATIONS: usize = 3;

    /// Enhancement strength used by the convenience wrappers
    pub const DEFAULT_ENHANCE_STRENGTH: f32 = 0.5;

    /// Create a service with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a service with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let generator = HarmonyGenerator::from_config(&config.generator);
        let enhancer = HarmonyEnhancer::from_config(&config.enhancer);
        Self {
            config,
            generator,
            modifier: CategoryModifier::new(),
            enhancer,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate a palette of `count` mutually distinct colors
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DegenerateRequest`] for `count == 0` and
    /// [`PaletteError::DistinctnessUnsatisfiable`] when the bounded
    /// refill loop cannot reach `count` distinct colors.
    pub fn generate_random_palette(
        &self,
        rng: &mut impl Rng,
        count: usize,
        category: PaletteCategory,
    ) -> Result<Vec<Color>> {
        self.generate_distinct(rng, &[], count, category)
    }

    /// Generate a palette whose first key color is the given seed
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::generate_random_palette`].
    pub fn generate_palette_from_seed(
        &self,
        rng: &mut impl Rng,
        seed: Color,
        count: usize,
        category: PaletteCategory,
    ) -> Result<Vec<Color>> {
        self.generate_distinct(rng, &[seed], count, category)
    }

    /// Restyle an existing color set to a category; count preserved
    pub fn convert_colors_to_category(
        &self,
        colors: &[Color],
        category: PaletteCategory,
    ) -> Vec<Color> {
        self.modifier.apply(colors, category)
    }

    /// Nudge an existing color set toward stronger harmony
    ///
    /// `strength` is clamped to [0, 1]; count and order are preserved.
    pub fn enhance_colors_harmony(&self, colors: &[Color], strength: f32) -> Vec<Color> {
        self.enhancer.enhance(colors, strength)
    }

    /// Generate controlled variations around a base palette
    ///
    /// Returns `variation_count + 1` palettes of the input's length. The
    /// first is the input verbatim; each subsequent palette re-samples
    /// the input's key colors with hue jitter that grows with the
    /// variation index.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DegenerateRequest`] when `colors` is empty.
    pub fn generate_variations(
        &self,
        rng: &mut impl Rng,
        colors: &[Color],
        variation_count: usize,
    ) -> Result<Vec<Vec<Color>>> {
        if colors.is_empty() {
            return Err(PaletteError::degenerate("colors", "empty"));
        }

        let mut variations = Vec::with_capacity(variation_count + 1);
        variations.push(colors.to_vec());

        let base_keys = extract_keys(colors);
        for step in 1..=variation_count {
            let jitter = VARIATION_HUE_JITTER * step as f32;
            let keys: Vec<Hsl> = base_keys
                .iter()
                .map(|key| {
                    let hue = key.hue.into_positive_degrees()
                        + rng.gen_range(-jitter..=jitter);
                    Hsl::new(hue.rem_euclid(360.0), key.saturation, key.lightness)
                })
                .collect();
            variations.push(self.generator.fill_from_keys(rng, &keys, colors.len()));
        }
        Ok(variations)
    }

    /// Generate [`Self::DEFAULT_PALETTE_SIZE`] colors with the
    /// thread-local random source
    pub fn random_palette(&self, category: PaletteCategory) -> Result<Vec<Color>> {
        self.generate_random_palette(
            &mut rand::thread_rng(),
            Self::DEFAULT_PALETTE_SIZE,
            category,
        )
    }

    /// Generate [`Self::DEFAULT_PALETTE_SIZE`] colors around a seed with
    /// the thread-local random source
    pub fn palette_from_seed(
        &self,
        seed: Color,
        category: PaletteCategory,
    ) -> Result<Vec<Color>> {
        self.generate_palette_from_seed(
            &mut rand::thread_rng(),
            seed,
            Self::DEFAULT_PALETTE_SIZE,
            category,
        )
    }

    /// Enhance at [`Self::DEFAULT_ENHANCE_STRENGTH`]
    pub fn enhance_colors(&self, colors: &[Color]) -> Vec<Color> {
        self.enhance_colors_harmony(colors, Self::DEFAULT_ENHANCE_STRENGTH)
    }

    /// Generate [`Self::DEFAULT_VARIATIONS`] variations with the
    /// thread-local random source
    pub fn variations(&self, colors: &[Color]) -> Result<Vec<Vec<Color>>> {
        self.generate_variations(&mut rand::thread_rng(), colors, Self::DEFAULT_VARIATIONS)
    }

    fn generate_distinct(
        &self,
        rng: &mut impl Rng,
        seeds: &[Color],
        count: usize,
        category: PaletteCategory,
    ) -> Result<Vec<Color>> {
        if count == 0 {
            return Err(PaletteError::degenerate("count", 0));
        }
        let min_delta_e = self.config.distinctness.min_delta_e;

        // Step 1: scheme-driven candidates, restyled to the category so
        // the distinctness rule judges what the caller will receive.
        let candidates = self
            .generator
            .generate(rng, seeds, count, category.scheme_hint());
        let styled = self.modifier.apply(&candidates, category);

        // Step 2: greedy admission under the minimum ΔE rule.
        let mut palette: Vec<Color> = Vec::with_capacity(count);
        for color in styled {
            if distinct_from_all(&palette, &color, min_delta_e) {
                palette.push(color);
            }
        }

        // Step 3: bounded refill with unconstrained random candidates.
        let budget = self
            .config
            .distinctness
            .max_attempts_per_slot
            .saturating_mul(count);
        let mut attempts = 0;
        while palette.len() < count && attempts < budget {
            attempts += 1;
            let candidate = Color::from_hsl(
                rng.gen_range(0.0..360.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            );
            let candidate = self.modifier.apply_one(&candidate, category);
            if distinct_from_all(&palette, &candidate, min_delta_e) {
                palette.push(candidate);
            }
        }

        if palette.len() < count {
            return Err(PaletteError::DistinctnessUnsatisfiable {
                requested: count,
                achieved: palette.len(),
                attempts,
            });
        }
        Ok(palette)
    }
}

/// True when the candidate clears the ΔE threshold against every kept color
fn distinct_from_all(kept: &[Color], candidate: &Color, min_delta_e: f32) -> bool {
    kept.iter()
        .all(|color| color.difference(candidate) >= min_delta_e)
}

/// Up to three key colors anchoring a palette: first, middle, last
fn extract_keys(colors: &[Color]) -> Vec<Hsl> {
    let mut indices = vec![0];
    if colors.len() > 2 {
        indices.push(colors.len() / 2);
    }
    if colors.len() > 1 {
        indices.push(colors.len() - 1);
    }
    indices.into_iter().map(|i| colors[i].hsl()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistinctnessConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn assert_all_distinct(palette: &[Color], min_delta_e: f32) {
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert!(
                    a.difference(b) >= min_delta_e,
                    "ΔE {} below {} for {:?} / {:?}",
                    a.difference(b),
                    min_delta_e,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_random_palette_count_and_distinctness() {
        let service = PaletteService::new();
        for seed in [1u64, 7, 42] {
            for count in [1usize, 3, 5, 8] {
                let palette = service
                    .generate_random_palette(&mut seeded(seed), count, PaletteCategory::Standard)
                    .unwrap();
                assert_eq!(palette.len(), count);
                assert_all_distinct(&palette, service.config().distinctness.min_delta_e);
            }
        }
    }

    #[test]
    fn test_seeded_palette_scenario() {
        let service = PaletteService::new();
        let seed_color = Color::from_hex("FF0000").unwrap();
        let palette = service
            .generate_palette_from_seed(
                &mut seeded(3),
                seed_color,
                3,
                PaletteCategory::Standard,
            )
            .unwrap();

        assert_eq!(palette.len(), 3);
        // First color is the seed key.
        assert!(palette[0].difference(&seed_color) < 1.0);
        assert_all_distinct(&palette, 15.0);
    }

    #[test]
    fn test_zero_count_is_degenerate() {
        let service = PaletteService::new();
        let result =
            service.generate_random_palette(&mut seeded(1), 0, PaletteCategory::Standard);
        assert!(matches!(
            result,
            Err(PaletteError::DegenerateRequest { .. })
        ));
    }

    #[test]
    fn test_count_one_falls_back_to_single_color() {
        let service = PaletteService::new();
        let palette = service
            .generate_random_palette(&mut seeded(9), 1, PaletteCategory::Standard)
            .unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_unsatisfiable_threshold_reports_error() {
        let service = PaletteService::with_config(EngineConfig {
            distinctness: DistinctnessConfig {
                min_delta_e: 500.0,
                max_attempts_per_slot: 5,
            },
            ..EngineConfig::default()
        });
        let result =
            service.generate_random_palette(&mut seeded(2), 3, PaletteCategory::Standard);
        match result {
            Err(PaletteError::DistinctnessUnsatisfiable {
                requested,
                achieved,
                attempts,
            }) => {
                assert_eq!(requested, 3);
                assert!(achieved < 3);
                assert_eq!(attempts, 15);
            }
            other => panic!("expected DistinctnessUnsatisfiable, got {:?}", other),
        }
    }

    #[test]
    fn test_category_palette_stays_in_band() {
        let service = PaletteService::new();
        let palette = service
            .generate_random_palette(&mut seeded(11), 4, PaletteCategory::Pastel)
            .unwrap();
        for color in &palette {
            let hsl = color.to_hsl();
            assert!((19..=41).contains(&hsl.saturation), "sat: {}", hsl.saturation);
            assert!((69..=91).contains(&hsl.lightness), "light: {}", hsl.lightness);
        }
        assert_all_distinct(&palette, 15.0);
    }

    #[test]
    fn test_monochrome_palette_is_achromatic() {
        let service = PaletteService::new();
        let palette = service
            .generate_random_palette(&mut seeded(5), 4, PaletteCategory::Monochrome)
            .unwrap();
        for color in &palette {
            assert_eq!(color.to_hsl().saturation, 0);
        }
    }

    #[test]
    fn test_variations_shape() {
        let service = PaletteService::new();
        let base = service
            .generate_random_palette(&mut seeded(13), 5, PaletteCategory::Standard)
            .unwrap();
        let variations = service
            .generate_variations(&mut seeded(14), &base, 3)
            .unwrap();

        assert_eq!(variations.len(), 4);
        assert_eq!(variations[0], base);
        for variation in &variations {
            assert_eq!(variation.len(), base.len());
        }
    }

    #[test]
    fn test_variations_on_empty_input() {
        let service = PaletteService::new();
        let result = service.generate_variations(&mut seeded(1), &[], 3);
        assert!(matches!(
            result,
            Err(PaletteError::DegenerateRequest { .. })
        ));
    }

    #[test]
    fn test_enhance_delegates_and_preserves_count() {
        let service = PaletteService::new();
        let colors = vec![
            Color::from_hsl(0.0, 0.8, 0.5),
            Color::from_hsl(165.0, 0.6, 0.5),
        ];
        let enhanced = service.enhance_colors_harmony(&colors, 0.0);
        assert_eq!(enhanced, colors);
        let enhanced = service.enhance_colors_harmony(&colors, 0.7);
        assert_eq!(enhanced.len(), 2);
    }

    #[test]
    fn test_extract_keys_shapes() {
        let colors: Vec<Color> = (0..5)
            .map(|i| Color::from_hsl(i as f32 * 50.0, 0.6, 0.5))
            .collect();
        assert_eq!(extract_keys(&colors[..1]).len(), 1);
        assert_eq!(extract_keys(&colors[..2]).len(), 2);
        assert_eq!(extract_keys(&colors).len(), 3);
    }

    #[test]
    fn test_convenience_wrappers_use_defaults() {
        let service = PaletteService::new();
        let palette = service.random_palette(PaletteCategory::Standard).unwrap();
        assert_eq!(palette.len(), PaletteService::DEFAULT_PALETTE_SIZE);

        let variations = service.variations(&palette).unwrap();
        assert_eq!(variations.len(), PaletteService::DEFAULT_VARIATIONS + 1);

        let enhanced = service.enhance_colors(&palette);
        assert_eq!(enhanced.len(), palette.len());
    }

    #[test]
    fn test_generation_deterministic_under_seed() {
        let service = PaletteService::new();
        let a = service
            .generate_random_palette(&mut seeded(21), 5, PaletteCategory::Standard)
            .unwrap();
        let b = service
            .generate_random_palette(&mut seeded(21), 5, PaletteCategory::Standard)
            .unwrap();
        assert_eq!(a, b);
    }
}
