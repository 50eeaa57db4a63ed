//! Stream profile configuration.
//!
//! The profile fixes the resolution and aspect-ratio bounds requested
//! when a camera is started. Defaults match the constraint set this
//! layer has always negotiated; a TOML file can override them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounds applied to every per-device stream request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamProfile {
    /// Minimum acceptable frame width in pixels.
    pub min_width: u32,
    /// Maximum acceptable frame width in pixels.
    pub max_width: u32,
    /// Minimum acceptable width/height ratio.
    pub min_aspect_ratio: f64,
    /// Whether to request an audio track alongside video.
    pub audio: bool,
}

impl Default for StreamProfile {
    fn default() -> Self {
        Self {
            min_width: 600,
            max_width: 800,
            min_aspect_ratio: 1.6,
            audio: false,
        }
    }
}

impl StreamProfile {
    /// Validates the profile parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width == 0 || self.max_width < self.min_width {
            return Err(ConfigError::InvalidWidthBounds);
        }
        if self.min_aspect_ratio <= 0.0 {
            return Err(ConfigError::InvalidAspectRatio);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid width bounds (min_width must be 1..=max_width)")]
    InvalidWidthBounds,
    #[error("invalid aspect ratio (must be positive)")]
    InvalidAspectRatio,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[stream]` table: stream profile overrides.
    #[serde(default)]
    pub stream: StreamProfile,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.stream.validate()?;
        Ok(config)
    }
}
