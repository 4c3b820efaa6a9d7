//! # World Configuration
//!
//! World size and generation parameters, loaded from TOML.
//!
//! ```toml
//! [size]
//! width = 64
//! height = 32
//!
//! [params]
//! seed = 0
//!
//! [params.terrain]
//! scale = 30.0
//! magnitude = 0.5
//! offset = 0.2
//! ```
//!
//! Every field is optional; missing ones take the defaults above.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxfield_procedural::{GenerationParams, WorldError, WorldSize};

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`WorldConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration was rejected by the generator.
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete input of one world generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World dimensions.
    pub size: WorldSize,
    /// Seed and terrain shape.
    pub params: GenerationParams,
}

impl WorldConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns a copy with every field clamped into `ranges`.
    ///
    /// Each adjusted field is logged at `warn`. A field whose range is
    /// empty (reversed, or with a NaN bound) is left unchanged.
    #[must_use]
    pub fn clamped(&self, ranges: &ParamRanges) -> Self {
        let mut out = *self;

        out.size.width = clamp_logged("width", self.size.width, &ranges.width);
        out.size.height = clamp_logged("height", self.size.height, &ranges.height);
        out.params.seed = clamp_logged("seed", self.params.seed, &ranges.seed);

        let terrain = &mut out.params.terrain;
        terrain.scale = clamp_f64_logged("scale", terrain.scale, &ranges.scale);
        terrain.magnitude = clamp_f64_logged("magnitude", terrain.magnitude, &ranges.magnitude);
        terrain.offset = clamp_f64_logged("offset", terrain.offset, &ranges.offset);

        out
    }
}

/// Allowed range of every editable parameter, as exposed by the editor.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamRanges {
    /// World width in blocks.
    pub width: RangeInclusive<i32>,
    /// World height in blocks.
    pub height: RangeInclusive<i32>,
    /// Noise seed.
    pub seed: RangeInclusive<u64>,
    /// Terrain scale.
    pub scale: RangeInclusive<f64>,
    /// Terrain magnitude.
    pub magnitude: RangeInclusive<f64>,
    /// Terrain offset.
    pub offset: RangeInclusive<f64>,
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            width: 8..=128,
            height: 8..=64,
            seed: 0..=10_000,
            scale: 10.0..=100.0,
            magnitude: 0.0..=100.0,
            offset: 0.0..=1.0,
        }
    }
}

fn clamp_logged<T>(field: &str, value: T, range: &RangeInclusive<T>) -> T
where
    T: Ord + Copy + std::fmt::Display,
{
    let (start, end) = (*range.start(), *range.end());
    if range.is_empty() {
        tracing::warn!("{field} range {start}..={end} is empty, keeping {value}");
        return value;
    }

    let clamped = value.clamp(start, end);
    if clamped != value {
        tracing::warn!("{field} {value} outside {start}..={end}, using {clamped}");
    }
    clamped
}

fn clamp_f64_logged(field: &str, value: f64, range: &RangeInclusive<f64>) -> f64 {
    let (start, end) = (*range.start(), *range.end());
    // Also true for NaN bounds.
    if range.is_empty() {
        tracing::warn!("{field} range {start}..={end} is empty, keeping {value}");
        return value;
    }

    // NaN falls back to the lower bound.
    let clamped = if value.is_nan() { start } else { value.clamp(start, end) };
    if value.is_nan() || clamped != value {
        tracing::warn!("{field} {value} outside {start}..={end}, using {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.size, WorldSize::new(64, 32));
    }

    #[test]
    fn test_partial_toml() {
        let config = WorldConfig::from_toml_str(
            r"
            [size]
            width = 16

            [params.terrain]
            magnitude = 0.0
            ",
        )
        .unwrap();

        assert_eq!(config.size, WorldSize::new(16, 32));
        assert_eq!(config.params.seed, 0);
        assert_eq!(config.params.terrain.magnitude, 0.0);
        assert_eq!(config.params.terrain.scale, 30.0);
    }

    #[test]
    fn test_mistyped_field() {
        let err = WorldConfig::from_toml_str("[size]\nwidth = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("voxfield_missing_config_6d1f.toml");
        let err = WorldConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    }

    #[test]
    fn test_clamped_into_editor_ranges() {
        let mut config = WorldConfig::default();
        config.size = WorldSize::new(0, 500);
        config.params.seed = 20_000;
        config.params.terrain.scale = 1.0;
        config.params.terrain.magnitude = f64::NAN;
        config.params.terrain.offset = 0.25;

        let clamped = config.clamped(&ParamRanges::default());

        assert_eq!(clamped.size, WorldSize::new(8, 64));
        assert_eq!(clamped.params.seed, 10_000);
        assert_eq!(clamped.params.terrain.scale, 10.0);
        assert_eq!(clamped.params.terrain.magnitude, 0.0);
        assert_eq!(clamped.params.terrain.offset, 0.25);
    }

    #[test]
    fn test_default_config_is_in_range() {
        let config = WorldConfig::default();
        assert_eq!(config.clamped(&ParamRanges::default()), config);
    }

    #[test]
    fn test_reversed_ranges_leave_values_unchanged() {
        let mut config = WorldConfig::default();
        config.size = WorldSize::new(3, 500);
        config.params.terrain.scale = 5.0;

        #[allow(clippy::reversed_empty_ranges)]
        let ranges = ParamRanges {
            width: 128..=8,
            scale: 100.0..=10.0,
            magnitude: f64::NAN..=1.0,
            ..ParamRanges::default()
        };
        let clamped = config.clamped(&ranges);

        assert_eq!(clamped.size, WorldSize::new(3, 64));
        assert_eq!(clamped.params.terrain.scale, 5.0);
        assert_eq!(clamped.params.terrain.magnitude, config.params.terrain.magnitude);
    }

    #[test]
    fn test_negative_zero_is_in_range() {
        // Equal to the bound, so passed through untouched.
        let kept = clamp_f64_logged("offset", -0.0, &(0.0..=1.0));
        assert_eq!(kept.to_bits(), (-0.0f64).to_bits());
        assert_eq!(clamp_f64_logged("offset", 0.0, &(-0.0..=1.0)), 0.0);
        assert_eq!(clamp_logged("width", 8, &(8..=8)), 8);
    }
}
