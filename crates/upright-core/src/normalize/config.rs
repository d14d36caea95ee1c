//! Normalization settings.
//!
//! The maximum raster size is tied to whatever surface displays or uploads the
//! frame, so it has no built-in default and must always be supplied.
//!
//! ```toml
//! max_width = 1024
//! max_height = 768
//! filter = "lanczos3"
//! output = { jpeg = { quality = 90 } }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::FilterType;
use crate::encode::OutputFormat;

/// Errors from loading or validating a [`NormalizeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed into a config.
    #[error("Failed to parse normalize config: {0}")]
    Parse(String),

    /// A field holds a value outside its allowed range.
    #[error("Invalid normalize config: {0}")]
    Invalid(String),
}

/// Target raster constraints and output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Maximum width of the normalized raster in pixels.
    pub max_width: u32,
    /// Maximum height of the normalized raster in pixels.
    pub max_height: u32,
    /// Resampling filter used when scaling down.
    #[serde(default)]
    pub filter: FilterType,
    /// Encoded format of the upload buffer.
    #[serde(default)]
    pub output: OutputFormat,
}

impl NormalizeConfig {
    /// Config with the given maxima, bilinear filtering and PNG output.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            filter: FilterType::default(),
            output: OutputFormat::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Parse and validate a config from TOML.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the maxima are positive and the JPEG quality is 1-100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "max_width ({}) and max_height ({}) must be at least 1",
                self.max_width, self.max_height
            )));
        }

        if let OutputFormat::Jpeg { quality } = self.output {
            if !(1..=100).contains(&quality) {
                return Err(ConfigError::Invalid(format!(
                    "jpeg quality must be 1-100, got {quality}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = NormalizeConfig::new(640, 480);
        assert_eq!(config.max_width, 640);
        assert_eq!(config.max_height, 480);
        assert_eq!(config.filter, FilterType::Bilinear);
        assert_eq!(config.output, OutputFormat::Png);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NormalizeConfig::new(640, 480)
            .with_filter(FilterType::Nearest)
            .with_output(OutputFormat::Jpeg { quality: 80 });
        assert_eq!(config.filter, FilterType::Nearest);
        assert_eq!(config.output, OutputFormat::Jpeg { quality: 80 });
    }

    #[test]
    fn test_from_toml_minimal() {
        let config = NormalizeConfig::from_toml_str("max_width = 320\nmax_height = 240\n").unwrap();
        assert_eq!(config, NormalizeConfig::new(320, 240));
    }

    #[test]
    fn test_from_toml_full() {
        let src = r#"
            max_width = 1024
            max_height = 768
            filter = "lanczos3"
            output = { jpeg = { quality = 90 } }
        "#;
        let config = NormalizeConfig::from_toml_str(src).unwrap();
        assert_eq!(config.filter, FilterType::Lanczos3);
        assert_eq!(config.output, OutputFormat::Jpeg { quality: 90 });
    }

    #[test]
    fn test_from_toml_requires_maxima() {
        let result = NormalizeConfig::from_toml_str("max_width = 320\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_toml_rejects_unknown_filter() {
        let result =
            NormalizeConfig::from_toml_str("max_width = 1\nmax_height = 1\nfilter = \"cubic\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_zero_maxima() {
        let err = NormalizeConfig::new(0, 480).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("max_width (0) and max_height (480) must be at least 1".into())
        );
        assert!(NormalizeConfig::from_toml_str("max_width = 10\nmax_height = 0\n").is_err());
    }

    #[test]
    fn test_validate_jpeg_quality() {
        let config = NormalizeConfig::new(10, 10).with_output(OutputFormat::Jpeg { quality: 0 });
        assert!(config.validate().is_err());

        let config = NormalizeConfig::new(10, 10).with_output(OutputFormat::Jpeg { quality: 101 });
        assert!(config.validate().is_err());

        let config = NormalizeConfig::new(10, 10).with_output(OutputFormat::Jpeg { quality: 100 });
        assert!(config.validate().is_ok());
    }
}
