//! Harmonious palette sampling
//!
//! Implements scheme-driven palette generation that:
//! - Synthesizes or adopts key colors anchoring a hue scheme
//! - Derives further keys by rotating the base hue by scheme offsets
//! - Fills remaining slots by sampling inside the key envelope
//!
//! Stochastic by design: every entry point takes an explicit random
//! source, so a seeded generator reproduces sequences exactly.
//!
//! Algorithm tag: `algo-scheme-envelope-sampling`

use palette::Hsl;
use rand::Rng;

use crate::color::Color;
use crate::config::GeneratorConfig;
use crate::constants::generation::{
    MAX_KEY_COLORS, PLEASANT_LIGHTNESS, PLEASANT_SATURATION,
};
use crate::harmony::ColorScheme;

/// Generator sampling palettes from hue-relationship schemes
pub struct HarmonyGenerator {
    pleasant_saturation: [f32; 2],
    pleasant_lightness: [f32; 2],
}

impl Default for HarmonyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyGenerator {
    /// Create a generator with default sampling ranges
    pub fn new() -> Self {
        Self {
            pleasant_saturation: PLEASANT_SATURATION,
            pleasant_lightness: PLEASANT_LIGHTNESS,
        }
    }

    /// Create a generator with custom key-synthesis ranges
    pub fn with_params(pleasant_saturation: [f32; 2], pleasant_lightness: [f32; 2]) -> Self {
        Self {
            pleasant_saturation,
            pleasant_lightness,
        }
    }

    /// Create a generator from an engine configuration section
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_params(
            [config.pleasant_saturation.min, config.pleasant_saturation.max],
            [config.pleasant_lightness.min, config.pleasant_lightness.max],
        )
    }

    /// Generate a harmonious palette of exactly `count` colors
    ///
    /// Key colors come first: caller-supplied seeds (up to three), then
    /// hues derived by rotating the base hue by the scheme's offsets.
    /// Remaining slots are sampled inside the envelope the keys span.
    /// With no scheme given, one is drawn uniformly from
    /// [`ColorScheme::ALL`].
    ///
    /// The output is unfiltered: distinctness enforcement is the
    /// caller's concern.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        seeds: &[Color],
        count: usize,
        scheme: Option<ColorScheme>,
    ) -> Vec<Color> {
        let scheme = scheme
            .unwrap_or_else(|| ColorScheme::ALL[rng.gen_range(0..ColorScheme::ALL.len())]);
        let keys = self.derive_keys(rng, seeds, scheme);
        self.fill_from_keys(rng, &keys, count)
    }

    /// Build the key colors for a scheme: seeds first, then rotations
    pub fn derive_keys(
        &self,
        rng: &mut impl Rng,
        seeds: &[Color],
        scheme: ColorScheme,
    ) -> Vec<Hsl> {
        let mut keys: Vec<Hsl> = seeds.iter().take(MAX_KEY_COLORS).map(Color::hsl).collect();
        if keys.is_empty() {
            keys.push(self.random_pleasant(rng));
        }

        let base = keys[0];
        let base_hue = base.hue.into_positive_degrees();
        let key_target = scheme.key_count().min(MAX_KEY_COLORS);
        for offset in scheme.offsets() {
            if keys.len() >= key_target {
                break;
            }
            keys.push(Hsl::new(
                (base_hue + offset).rem_euclid(360.0),
                base.saturation,
                base.lightness,
            ));
        }
        keys
    }

    /// Produce a palette of `count` colors anchored on the given keys
    ///
    /// Keys are emitted verbatim (truncated to `count` when there are
    /// more keys than slots); the rest is envelope samples.
    pub fn fill_from_keys(&self, rng: &mut impl Rng, keys: &[Hsl], count: usize) -> Vec<Color> {
        let mut palette: Vec<Color> = keys.iter().take(count).copied().map(Color::from).collect();
        while palette.len() < count {
            let r1 = rng.gen::<f32>();
            let r2 = rng.gen::<f32>();
            palette.push(Color::from(self.sample_from_scheme(r1, r2, keys)));
        }
        palette
    }

    /// Sample one color inside the envelope spanned by the keys
    ///
    /// `r1` and `r2` are independent uniform fractions in [0, 1); the
    /// sample interpolates between keys along the shortest hue arc, so
    /// generated colors never leave the hue/saturation/lightness range
    /// the keys establish.
    pub fn sample_from_scheme(&self, r1: f32, r2: f32, keys: &[Hsl]) -> Hsl {
        match keys {
            [] => Hsl::new(
                r1 * 360.0,
                mid(self.pleasant_saturation),
                lerp(self.pleasant_lightness[0], self.pleasant_lightness[1], r2),
            ),
            [only] => Hsl::new(
                only.hue.into_positive_degrees(),
                lerp(self.pleasant_saturation[0], self.pleasant_saturation[1], r1),
                lerp(self.pleasant_lightness[0], self.pleasant_lightness[1], r2),
            ),
            [first, second] => {
                let blended = lerp_hsl(*first, *second, r1);
                let lightness_lo = first.lightness.min(second.lightness);
                let lightness_hi = first.lightness.max(second.lightness);
                Hsl::new(
                    blended.hue.into_positive_degrees(),
                    blended.saturation,
                    lerp(lightness_lo, lightness_hi, r2),
                )
            }
            [first, second, rest @ ..] => {
                let pair = lerp_hsl(*first, *second, r1);
                lerp_hsl(pair, rest[0], r2)
            }
        }
    }

    fn random_pleasant(&self, rng: &mut impl Rng) -> Hsl {
        Hsl::new(
            rng.gen_range(0.0..360.0),
            rng.gen_range(self.pleasant_saturation[0]..self.pleasant_saturation[1]),
            rng.gen_range(self.pleasant_lightness[0]..self.pleasant_lightness[1]),
        )
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn mid(range: [f32; 2]) -> f32 {
    (range[0] + range[1]) / 2.0
}

/// Interpolate two HSL colors, taking the shortest arc for hue
fn lerp_hsl(a: Hsl, b: Hsl, t: f32) -> Hsl {
    let hue_a = a.hue.into_positive_degrees();
    let hue_b = b.hue.into_positive_degrees();
    let delta = (hue_b - hue_a + 540.0).rem_euclid(360.0) - 180.0;
    Hsl::new(
        (hue_a + delta * t).rem_euclid(360.0),
        lerp(a.saturation, b.saturation, t),
        lerp(a.lightness, b.lightness, t),
    )
}
