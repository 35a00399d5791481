//! Session configuration.

use crate::point::Domain;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the preset created at startup.
pub const DEFAULT_PRESET_NAME: &str = "random";
/// Number of random points in the startup preset.
pub const DEFAULT_INITIAL_POINTS: usize = 10;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid domain: x {x:?}, y {y:?} (each range needs min < max)")]
    InvalidDomain { x: [f64; 2], y: [f64; 2] },
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> kurbo::Size {
        kurbo::Size::new(self.width, self.height)
    }
}

/// Settings used to bootstrap a [`Session`](crate::Session).
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Coordinate domain of the working collection.
    pub domain: Domain,
    /// Pixel size of the view.
    pub viewport: ViewportConfig,
    /// Name of the preset registered at startup.
    pub initial_preset: String,
    /// Number of random points in the startup preset.
    pub initial_points: usize,
    /// Pointer travel (domain units) before a press counts as a drag.
    pub drag_threshold: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            domain: Domain::new([-10.0, 10.0], [-5.0, 5.0]),
            viewport: ViewportConfig::default(),
            initial_preset: DEFAULT_PRESET_NAME.to_string(),
            initial_points: DEFAULT_INITIAL_POINTS,
            drag_threshold: 0.0,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.domain.is_valid() {
            return Err(ConfigError::InvalidDomain {
                x: self.domain.x,
                y: self.domain.y,
            });
        }
        let ViewportConfig { width, height } = self.viewport;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.domain, Domain::new([-10.0, 10.0], [-5.0, 5.0]));
        assert_eq!(config.viewport.size(), kurbo::Size::new(800.0, 400.0));
        assert_eq!(config.initial_preset, "random");
        assert_eq!(config.initial_points, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SessionConfig::from_json(r#"{ "initial_points": 3, "domain": { "x": [0, 1], "y": [0, 2] } }"#).unwrap();
        assert_eq!(config.initial_points, 3);
        assert_eq!(config.domain, Domain::new([0.0, 1.0], [0.0, 2.0]));
        assert_eq!(config.initial_preset, "random");
    }

    #[test]
    fn test_rejects_inverted_domain() {
        let result = SessionConfig::from_json(r#"{ "domain": { "x": [1, -1], "y": [0, 1] } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let result = SessionConfig::from_json(r#"{ "viewport": { "width": 0, "height": 400 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidViewport { .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(SessionConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_preset": "seed", "drag_threshold": 0.25 }}"#).unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_preset, "seed");
        assert!((config.drag_threshold - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SessionConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
