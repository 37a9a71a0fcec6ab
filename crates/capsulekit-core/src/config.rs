//! Editor configuration.
//!
//! Every field has a default, so the editor works with no configuration at
//! all. A partial object (from JSON or a JS value) overrides only the
//! fields it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::export::DEFAULT_ARCHIVE_NAME;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level editor settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub zoom: ZoomConfig,
    pub export: ExportConfig,
}

impl EditorConfig {
    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate()?;
        self.export.validate()
    }
}

/// Limits for zooming the on-screen canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    /// Smallest allowed canvas scale.
    pub min_scale: f64,
    /// Largest allowed canvas scale.
    pub max_scale: f64,
    /// Factor applied per zoom step.
    pub scale_by: f64,
    /// Fraction of the container an asset fills after fit-to-container.
    pub fit_padding: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 5.0,
            scale_by: 1.1,
            fit_padding: 0.9,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("minScale", self.min_scale), ("maxScale", self.max_scale)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "zoom.{name} must be positive, got {value}"
                )));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "zoom.minScale ({}) exceeds zoom.maxScale ({})",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.scale_by.is_finite() && self.scale_by > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom.scaleBy must be greater than 1, got {}",
                self.scale_by
            )));
        }
        if !(self.fit_padding > 0.0 && self.fit_padding <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom.fitPadding must be in (0, 1], got {}",
                self.fit_padding
            )));
        }
        Ok(())
    }

    /// Clamp a canvas scale into the configured limits.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Settings for the export bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// File name of the downloaded archive.
    pub archive_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "export.archiveName must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
