//! # Harmony Colors
//!
//! A Rust crate for color harmony analysis and harmonious palette
//! generation.
//!
//! This library provides perceptually-grounded palette tooling by:
//! - Converting colors between RGB, HSL, CMYK and hex representations
//! - Measuring perceptual color difference in CIE Lab
//! - Classifying hue relationships against canonical harmonic angles
//! - Sampling palettes from hue-relationship schemes
//! - Restyling palettes to categories and enhancing their harmony
//!
//! ## Example
//!
//! ```rust
//! use harmony_colors::{Color, PaletteCategory, PaletteService};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let service = PaletteService::new();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let palette = service.generate_random_palette(&mut rng, 5, PaletteCategory::Standard)?;
//! assert_eq!(palette.len(), 5);
//! for color in &palette {
//!     println!("#{} {:?}", color.to_hex(), color.to_hsl());
//! }
//! # Ok::<(), harmony_colors::PaletteError>(())
//! ```
//!
//! All randomness is injected: every generating operation takes
//! `&mut impl rand::Rng`, so a seeded `StdRng` reproduces palettes
//! exactly, while production callers pass `rand::thread_rng()`.

pub mod category;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod harmony;
pub mod service;

pub use category::{CategoryModifier, PaletteCategory};
pub use color::{CmykComponents, Color, HslComponents};
pub use config::EngineConfig;
pub use error::{PaletteError, Result};
pub use harmony::{
    ColorScheme, HarmonyClassifier, HarmonyEnhancer, HarmonyGenerator, HarmonyResult,
    HarmonyType,
};
pub use service::PaletteService;

/// Classify the harmony relationship between two colors
///
/// Convenience entry point using the default classifier; see
/// [`HarmonyClassifier`] for tunable tolerances.
pub fn calculate_harmony(a: &Color, b: &Color) -> HarmonyResult {
    HarmonyClassifier::new().classify(a, b)
}
