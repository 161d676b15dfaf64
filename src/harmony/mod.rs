//! Harmony classification, generation and enhancement
//!
//! This module hosts the engine's hue-relationship machinery: the
//! scheme tables, the pairwise classifier, the stochastic palette
//! generator, and the strength-scaled enhancer.

pub mod classify;
pub mod enhance;
pub mod generate;
pub mod scheme;

pub use classify::{folded_hue_delta, HarmonyClassifier, HarmonyResult, HarmonyType};
pub use enhance::HarmonyEnhancer;
pub use generate::HarmonyGenerator;
pub use scheme::ColorScheme;
