//! Configuration structures for the harmony_colors engine.
//!
//! This module defines all tunable parameters for harmony classification
//! and palette generation, organized into logical groups per component.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use harmony_colors::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("engine.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ClassifierConfig`]: angular tolerance and confidence threshold
//! - [`GeneratorConfig`]: key-color synthesis ranges
//! - [`DistinctnessConfig`]: ΔE threshold and retry budget
//! - [`EnhancerConfig`]: enhancement pull factors

use serde::{Deserialize, Serialize};

use crate::constants::{distinctness, enhancement, generation, harmony};

/// Complete engine configuration.
///
/// Contains all parameters the palette service and its components need.
/// Can be serialized to/from JSON for reproducible generation setups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Harmony classification parameters
    pub classifier: ClassifierConfig,

    /// Palette generation parameters
    pub generator: GeneratorConfig,

    /// Distinctness enforcement parameters
    pub distinctness: DistinctnessConfig,

    /// Harmony enhancement parameters
    pub enhancer: EnhancerConfig,
}

/// Harmony classification parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Half-width (degrees) of the window around each canonical angle
    pub angle_tolerance: f32,

    /// Minimum score required to report a harmony type
    pub min_confidence: f32,
}

/// Palette generation parameters.
///
/// The "pleasant" ranges bound saturation and lightness of synthesized
/// key colors, keeping random palettes away from extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Saturation range for synthesized key colors
    pub pleasant_saturation: Band,

    /// Lightness range for synthesized key colors
    pub pleasant_lightness: Band,
}

/// Distinctness enforcement parameters.
///
/// Controls the minimum perceptual difference between palette members
/// and how hard the service tries before reporting failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinctnessConfig {
    /// Minimum ΔE (CIE Lab) between any two palette colors
    pub min_delta_e: f32,

    /// Refill attempt budget per requested palette slot
    pub max_attempts_per_slot: usize,
}

/// Harmony enhancement parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerConfig {
    /// Fraction of the saturation gap pulled toward the anchor at full
    /// strength
    pub saturation_pull: f32,
}

/// An inclusive value range for configuration files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            generator: GeneratorConfig::default(),
            distinctness: DistinctnessConfig::default(),
            enhancer: EnhancerConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            angle_tolerance: harmony::DEFAULT_ANGLE_TOLERANCE,
            min_confidence: harmony::DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pleasant_saturation: Band {
                min: generation::PLEASANT_SATURATION[0],
                max: generation::PLEASANT_SATURATION[1],
            },
            pleasant_lightness: Band {
                min: generation::PLEASANT_LIGHTNESS[0],
                max: generation::PLEASANT_LIGHTNESS[1],
            },
        }
    }
}

impl Default for DistinctnessConfig {
    fn default() -> Self {
        Self {
            min_delta_e: distinctness::MIN_DELTA_E,
            max_attempts_per_slot: distinctness::MAX_ATTEMPTS_PER_SLOT,
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            saturation_pull: enhancement::SATURATION_PULL,
        }
    }
}

impl EngineConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
