//! Configuration system
//!
//! Collision settings can be stored as TOML or RON; the format is picked
//! from the file extension.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from file, falling back to defaults when it is missing or invalid
    fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!("Using default configuration, could not load {}: {}", path.display(), e);
            Self::default()
        })
    }
}

enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Which collision test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMethod {
    /// Radius approximation
    Circle,
    /// Separating axis test on oriented rectangles
    BoundingBox,
    /// Alpha overlap
    #[default]
    PixelPerfect,
}

/// Collision settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Alpha a pixel must exceed to count as solid
    pub alpha_threshold: u8,
    /// Build texture masks up front instead of on the first pixel test
    pub preload_textures: bool,
    /// Test used by [`crate::physics::CollisionTester::test`]
    pub method: CollisionMethod,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 0,
            preload_textures: true,
            method: CollisionMethod::PixelPerfect,
        }
    }
}

impl Config for CollisionConfig {}
