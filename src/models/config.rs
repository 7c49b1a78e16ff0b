use matcha_grade::preprocess::{DEFAULT_CROP_FRACTION, DEFAULT_MAX_DIMENSION};
use matcha_grade::{GradeError, GradingPipeline, PreprocessOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Grading pipeline options
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Upload handling for the HTTP service
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Resize and crop settings passed to the grading pipeline
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Bound on the longer image side, in pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Fraction of each side kept by the center crop
    #[serde(default = "default_crop_fraction")]
    pub crop_fraction: f64,
}

fn default_max_dimension() -> u32 {
    DEFAULT_MAX_DIMENSION
}

fn default_crop_fraction() -> f64 {
    DEFAULT_CROP_FRACTION
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            crop_fraction: default_crop_fraction(),
        }
    }
}

/// Limits applied to uploaded images
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

impl AppConfig {
    /// Pick the config file: explicit path first, then `CONFIG_FILE`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Load configuration from a file, falling back to defaults.
    ///
    /// A missing or malformed file is logged and replaced by defaults.
    /// Values are not validated here; see [`AppConfig::build_pipeline`].
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_dimension = config.pipeline.max_dimension,
                        crop_fraction = config.pipeline.crop_fraction,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Preprocessing options for the core pipeline
    pub fn pipeline_options(&self) -> PreprocessOptions {
        PreprocessOptions::new()
            .max_dimension(self.pipeline.max_dimension)
            .crop_fraction(self.pipeline.crop_fraction)
    }

    /// Build a validated grading pipeline.
    ///
    /// Fails with `InvalidParameter` when the configured values are out of range.
    pub fn build_pipeline(&self) -> Result<GradingPipeline, GradeError> {
        GradingPipeline::new(self.pipeline_options())
    }
}
