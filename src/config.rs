//! Application configuration, loaded from a TOML file in the platform
//! config directory. Missing file means defaults; the defaults match
//! the constants of the original route data.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration. Missing fields and sections fall back to
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Window title and on-screen heading
    pub title: String,
    /// Unit-to-pixel scaling
    pub scale: ScaleSettings,
    /// Scroll input tuning
    pub scroll: ScrollSettings,
    /// Ground line and cloud placement
    pub scenery: ScenerySettings,
}

impl VizConfig {
    /// Reject settings that would break layout or scene construction.
    /// The file is user-edited, so ranges are checked at load like the
    /// route document is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale.width_mult <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "scale.width_mult must be positive".to_string(),
            ));
        }
        if self.scale.height_mult <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "scale.height_mult must be positive".to_string(),
            ));
        }
        if self.scale.mount_buffer < 0.0 {
            return Err(ConfigError::InvalidValue(
                "scale.mount_buffer must not be negative".to_string(),
            ));
        }
        if !(self.scenery.ground_frac > 0.0 && self.scenery.ground_frac <= 1.0) {
            return Err(ConfigError::InvalidValue(
                "scenery.ground_frac must be in (0, 1]".to_string(),
            ));
        }
        if self.scenery.cloud_width <= 0.0 || self.scenery.cloud_height <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "scenery cloud dimensions must be positive".to_string(),
            ));
        }
        if self.scenery.cloud_spacing_min < 0.0 {
            return Err(ConfigError::InvalidValue(
                "scenery.cloud_spacing_min must not be negative".to_string(),
            ));
        }
        if self.scenery.cloud_spacing_max < self.scenery.cloud_spacing_min {
            return Err(ConfigError::InvalidValue(
                "scenery.cloud_spacing_max must not be below cloud_spacing_min".to_string(),
            ));
        }
        if self.scenery.cloud_band_max < self.scenery.cloud_band_min {
            return Err(ConfigError::InvalidValue(
                "scenery.cloud_band_max must not be below cloud_band_min".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            title: "Relay Route Profile".to_string(),
            scale: ScaleSettings::default(),
            scroll: ScrollSettings::default(),
            scenery: ScenerySettings::default(),
        }
    }
}

/// Unit-to-pixel scale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSettings {
    /// Pixels per mile
    pub width_mult: f32,
    /// Pixels per foot of elevation
    pub height_mult: f32,
    /// Side buffer at each end of the content, in pixels
    pub mount_buffer: f32,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            width_mult: 100.0,
            height_mult: 0.1,
            mount_buffer: 300.0,
        }
    }
}

/// Scroll input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Pixels per frame while an arrow key is held
    pub scroll_speed: f32,
    /// Per-event cap on wheel deltas, in pixels
    pub max_wheel_step: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scroll_speed: 10.0,
            max_wheel_step: 80.0,
        }
    }
}

/// Ground and decoration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenerySettings {
    /// Ground line as a fraction of the viewport height
    pub ground_frac: f32,
    /// Minimum horizontal gap between clouds, in pixels
    pub cloud_spacing_min: f32,
    /// Maximum horizontal gap between clouds, in pixels
    pub cloud_spacing_max: f32,
    /// Top of the cloud band, in pixels from the top of the window
    pub cloud_band_min: f32,
    /// Bottom of the cloud band, in pixels from the top of the window
    pub cloud_band_max: f32,
    /// Cloud width in pixels
    pub cloud_width: f32,
    /// Cloud height in pixels
    pub cloud_height: f32,
}

impl Default for ScenerySettings {
    fn default() -> Self {
        Self {
            ground_frac: 0.78,
            cloud_spacing_min: 180.0,
            cloud_spacing_max: 420.0,
            cloud_band_min: 70.0,
            cloud_band_max: 240.0,
            cloud_width: 130.0,
            cloud_height: 46.0,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "relayview", "RelayView")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from the default path, falling back to defaults
/// when no file exists.
pub fn load_config() -> Result<VizConfig, ConfigError> {
    load_config_from(get_config_path())
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<VizConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(VizConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: VizConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;

    Ok(config)
}

/// Save configuration to an explicit path.
pub fn save_config_to(path: impl AsRef<Path>, config: &VizConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}
